use std::sync::Arc;

use crate::domain::{department::ports::DepartmentRepository, employee::ports::EmployeeRepository};

/// Entry point for every domain operation. Holds the repositories it delegates to.
#[derive(Debug)]
pub struct Service<D, E>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
{
    pub(crate) department_repository: Arc<D>,
    pub(crate) employee_repository: Arc<E>,
}

impl<D, E> Service<D, E>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
{
    pub fn new(department_repository: D, employee_repository: E) -> Self {
        Self {
            department_repository: Arc::new(department_repository),
            employee_repository: Arc::new(employee_repository),
        }
    }
}

impl<D, E> Clone for Service<D, E>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
{
    fn clone(&self) -> Self {
        Self {
            department_repository: Arc::clone(&self.department_repository),
            employee_repository: Arc::clone(&self.employee_repository),
        }
    }
}
