pub mod department;
pub mod employee;
pub mod health;
pub mod query_extractor;
pub mod server;
