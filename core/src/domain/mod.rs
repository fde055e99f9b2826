pub mod common;
pub mod department;
pub mod employee;
pub mod listing;
pub mod validation;
