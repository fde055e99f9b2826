use serde_json::{Map, Value};
use tracing::info;

use crate::domain::{
    common::{
        deleted_message, entities::app_errors::CoreError, services::Service, updated_message,
    },
    department::{
        entities::Department,
        ports::{DepartmentRepository, DepartmentService},
        value_objects::{DepartmentField, DepartmentPayload},
    },
    employee::ports::EmployeeRepository,
    listing::{EntityKind, FilterQuery, Paginated, build_list_plan},
    validation::{Complaints, Operation, validate_filter_request},
};

impl<D, E> DepartmentService for Service<D, E>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
{
    async fn get_department(&self, department_id: i32) -> Result<Department, CoreError> {
        self.department_repository.get_by_id(department_id).await
    }

    async fn list_departments(
        &self,
        query: FilterQuery,
    ) -> Result<Paginated<Department>, CoreError> {
        let complaints = validate_filter_request(&query, EntityKind::Department);
        if !complaints.is_empty() {
            return Err(Complaints::from(complaints).into());
        }

        let plan = build_list_plan::<DepartmentField>(&query)?;

        self.department_repository.list(plan).await
    }

    async fn create_department(
        &self,
        payload: Map<String, Value>,
    ) -> Result<Department, CoreError> {
        let payload = DepartmentPayload::from_request(&payload, Operation::Create)?;

        let department = self.department_repository.create(payload).await?;
        info!(department_id = department.department_id, "department created");

        Ok(department)
    }

    async fn update_department(
        &self,
        department_id: i32,
        payload: Map<String, Value>,
    ) -> Result<String, CoreError> {
        let payload = DepartmentPayload::from_request(&payload, Operation::Update)?;

        self.department_repository
            .update(department_id, payload)
            .await?;

        Ok(updated_message(EntityKind::Department, department_id))
    }

    async fn delete_department(&self, department_id: i32) -> Result<String, CoreError> {
        self.department_repository.delete(department_id).await?;
        info!(department_id, "department deleted");

        Ok(deleted_message(EntityKind::Department, department_id))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use serde_json::json;

    use super::*;
    use crate::domain::{
        department::ports::MockDepartmentRepository, employee::ports::MockEmployeeRepository,
    };

    fn service(
        departments: MockDepartmentRepository,
    ) -> Service<MockDepartmentRepository, MockEmployeeRepository> {
        Service::new(departments, MockEmployeeRepository::new())
    }

    #[tokio::test]
    async fn test_get_department_delegates_to_repository() {
        let mut departments = MockDepartmentRepository::new();
        departments
            .expect_get_by_id()
            .with(eq(3))
            .times(1)
            .returning(|department_id| {
                Box::pin(async move {
                    Ok(Department {
                        department_id,
                        name: "Sales".to_string(),
                    })
                })
            });

        let department = service(departments).get_department(3).await.unwrap();
        assert_eq!(department.name, "Sales");
    }

    #[tokio::test]
    async fn test_invalid_payload_never_reaches_repository() {
        let mut departments = MockDepartmentRepository::new();
        departments.expect_update().times(0);

        let error = service(departments)
            .update_department(3, json!({ "name": 12 }).as_object().cloned().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(error, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_invalid_list_query_never_reaches_repository() {
        let mut departments = MockDepartmentRepository::new();
        departments.expect_list().times(0);

        let error = service(departments)
            .list_departments(FilterQuery {
                page: Some("0".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(error, CoreError::Validation(_)));
    }
}
