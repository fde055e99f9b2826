pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Employee, Gender, Salary};
pub use ports::{EmployeeRepository, EmployeeService};
