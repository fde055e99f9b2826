pub mod mappers;
pub mod repositories;

pub use repositories::employee_repository::PostgresEmployeeRepository;
