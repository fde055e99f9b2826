use serde_json::{Map, Value};
use tracing::info;

use crate::domain::{
    common::{
        deleted_message, entities::app_errors::CoreError, services::Service, updated_message,
    },
    department::ports::DepartmentRepository,
    employee::{
        entities::Employee,
        ports::{EmployeeRepository, EmployeeService},
        value_objects::{EmployeeField, EmployeePayload},
    },
    listing::{EntityKind, FilterQuery, Paginated, build_list_plan},
    validation::{Complaints, Operation, validate_filter_request},
};

impl<D, E> EmployeeService for Service<D, E>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
{
    async fn get_employee(&self, employee_id: i32) -> Result<Employee, CoreError> {
        self.employee_repository.get_by_id(employee_id).await
    }

    async fn list_employees(&self, query: FilterQuery) -> Result<Paginated<Employee>, CoreError> {
        let complaints = validate_filter_request(&query, EntityKind::Employee);
        if !complaints.is_empty() {
            return Err(Complaints::from(complaints).into());
        }

        let plan = build_list_plan::<EmployeeField>(&query)?;

        self.employee_repository.list(plan).await
    }

    async fn create_employee(&self, payload: Map<String, Value>) -> Result<Employee, CoreError> {
        let payload = EmployeePayload::from_request(&payload, Operation::Create)?;

        let employee = self.employee_repository.create(payload).await?;
        info!(
            employee_id = employee.employee_id,
            department_id = employee.department_id,
            "employee created"
        );

        Ok(employee)
    }

    async fn update_employee(
        &self,
        employee_id: i32,
        payload: Map<String, Value>,
    ) -> Result<String, CoreError> {
        let payload = EmployeePayload::from_request(&payload, Operation::Update)?;

        self.employee_repository.update(employee_id, payload).await?;

        Ok(updated_message(EntityKind::Employee, employee_id))
    }

    async fn delete_employee(&self, employee_id: i32) -> Result<String, CoreError> {
        self.employee_repository.delete(employee_id).await?;
        info!(employee_id, "employee deleted");

        Ok(deleted_message(EntityKind::Employee, employee_id))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::predicate::eq;
    use serde_json::json;

    use super::*;
    use crate::domain::{
        department::ports::MockDepartmentRepository,
        employee::{
            entities::{Gender, Salary},
            ports::MockEmployeeRepository,
        },
    };

    fn service(
        employees: MockEmployeeRepository,
    ) -> Service<MockDepartmentRepository, MockEmployeeRepository> {
        Service::new(MockDepartmentRepository::new(), employees)
    }

    fn alice(employee_id: i32, salary: f64) -> Employee {
        Employee {
            employee_id,
            name: "Alice".to_string(),
            department_id: 1,
            department: "Sales".to_string(),
            date_of_joining: NaiveDate::from_ymd_opt(2021, 3, 4).unwrap(),
            gender: Gender::Female,
            address: None,
            salary: Salary::new(salary),
        }
    }

    #[tokio::test]
    async fn test_get_employee_delegates_to_repository() {
        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_get_by_id()
            .with(eq(7))
            .times(1)
            .returning(|employee_id| Box::pin(async move { Ok(alice(employee_id, 2000.0)) }));

        let employee = service(employees).get_employee(7).await.unwrap();
        assert_eq!(employee.employee_id, 7);
        assert_eq!(employee.department, "Sales");
    }

    #[tokio::test]
    async fn test_create_passes_rounded_salary_to_repository() {
        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_create()
            .withf(|payload| payload.salary == 2100.56 && payload.gender == Gender::Female)
            .times(1)
            .returning(|payload| Box::pin(async move { Ok(alice(1, payload.salary)) }));

        let employee = service(employees)
            .create_employee(
                json!({
                    "name": "Alice",
                    "department_id": 1,
                    "date_of_joining": "2021-03-04",
                    "gender": "female",
                    "salary": "2100.556"
                })
                .as_object()
                .cloned()
                .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(employee.salary.to_string(), "2100.56");
    }

    #[tokio::test]
    async fn test_invalid_payload_never_reaches_repository() {
        let mut employees = MockEmployeeRepository::new();
        employees.expect_create().times(0);
        let service = service(employees);

        for payload in [
            json!({ "name": "Alice" }),
            json!({
                "name": "Alice",
                "department_id": 1,
                "date_of_joining": "2021-03-04",
                "salary": "1e308"
            }),
        ] {
            let error = service
                .create_employee(payload.as_object().cloned().unwrap())
                .await
                .unwrap_err();
            assert!(matches!(error, CoreError::Validation(_)), "{payload}");
        }
    }

    #[tokio::test]
    async fn test_invalid_list_query_never_reaches_repository() {
        let mut employees = MockEmployeeRepository::new();
        employees.expect_list().times(0);
        let service = service(employees);

        for page in ["0", "18446744073709551615", "9223372036854775807"] {
            let error = service
                .list_employees(FilterQuery {
                    page: Some(page.to_string()),
                    page_size: Some("2".to_string()),
                    ..Default::default()
                })
                .await
                .unwrap_err();
            assert!(matches!(error, CoreError::Validation(_)), "page={page}");
        }
    }
}
