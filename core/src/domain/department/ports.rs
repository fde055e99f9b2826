use std::future::Future;

use serde_json::{Map, Value};

use crate::domain::{
    common::entities::app_errors::CoreError,
    department::{
        entities::Department,
        value_objects::{DepartmentField, DepartmentPayload},
    },
    listing::{FilterQuery, ListPlan, Paginated},
};

#[cfg_attr(test, mockall::automock)]
pub trait DepartmentService: Send + Sync {
    fn get_department(
        &self,
        department_id: i32,
    ) -> impl Future<Output = Result<Department, CoreError>> + Send;

    fn list_departments(
        &self,
        query: FilterQuery,
    ) -> impl Future<Output = Result<Paginated<Department>, CoreError>> + Send;

    fn create_department(
        &self,
        payload: Map<String, Value>,
    ) -> impl Future<Output = Result<Department, CoreError>> + Send;

    /// Overwrites every field; returns the success message.
    fn update_department(
        &self,
        department_id: i32,
        payload: Map<String, Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Removes the department and, through the store, its employees.
    fn delete_department(
        &self,
        department_id: i32,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DepartmentRepository: Send + Sync {
    fn get_by_id(
        &self,
        department_id: i32,
    ) -> impl Future<Output = Result<Department, CoreError>> + Send;

    fn list(
        &self,
        plan: ListPlan<DepartmentField>,
    ) -> impl Future<Output = Result<Paginated<Department>, CoreError>> + Send;

    fn create(
        &self,
        payload: DepartmentPayload,
    ) -> impl Future<Output = Result<Department, CoreError>> + Send;

    fn update(
        &self,
        department_id: i32,
        payload: DepartmentPayload,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete(&self, department_id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}
