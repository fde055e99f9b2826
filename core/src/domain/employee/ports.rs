use std::future::Future;

use serde_json::{Map, Value};

use crate::domain::{
    common::entities::app_errors::CoreError,
    employee::{
        entities::Employee,
        value_objects::{EmployeeField, EmployeePayload},
    },
    listing::{FilterQuery, ListPlan, Paginated},
};

#[cfg_attr(test, mockall::automock)]
pub trait EmployeeService: Send + Sync {
    fn get_employee(
        &self,
        employee_id: i32,
    ) -> impl Future<Output = Result<Employee, CoreError>> + Send;

    fn list_employees(
        &self,
        query: FilterQuery,
    ) -> impl Future<Output = Result<Paginated<Employee>, CoreError>> + Send;

    fn create_employee(
        &self,
        payload: Map<String, Value>,
    ) -> impl Future<Output = Result<Employee, CoreError>> + Send;

    fn update_employee(
        &self,
        employee_id: i32,
        payload: Map<String, Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn delete_employee(
        &self,
        employee_id: i32,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Employee store access. Reads join the owning department to fill
/// [`Employee::department`].
#[cfg_attr(test, mockall::automock)]
pub trait EmployeeRepository: Send + Sync {
    fn get_by_id(
        &self,
        employee_id: i32,
    ) -> impl Future<Output = Result<Employee, CoreError>> + Send;

    fn list(
        &self,
        plan: ListPlan<EmployeeField>,
    ) -> impl Future<Output = Result<Paginated<Employee>, CoreError>> + Send;

    fn create(
        &self,
        payload: EmployeePayload,
    ) -> impl Future<Output = Result<Employee, CoreError>> + Send;

    fn update(
        &self,
        employee_id: i32,
        payload: EmployeePayload,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete(&self, employee_id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}
