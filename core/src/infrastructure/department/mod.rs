pub mod mappers;
pub mod repositories;

pub use repositories::department_repository::PostgresDepartmentRepository;
