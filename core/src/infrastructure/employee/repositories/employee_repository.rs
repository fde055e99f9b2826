use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoSimpleExpr, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait, Value,
    sea_query::{Expr, SimpleExpr},
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    employee::{
        entities::Employee,
        ports::EmployeeRepository,
        value_objects::{EmployeeField, EmployeePayload},
    },
    listing::{EntityKind, ListPlan, Paginated},
};
use crate::entity::{
    department::{Column as DepartmentColumn, Entity as DepartmentEntity},
    employee::{
        ActiveModel as EmployeeActiveModel, Column as EmployeeColumn, Entity as EmployeeEntity,
    },
};

/// Column behind a list field. `department` resolves to the joined department name.
fn column(field: EmployeeField) -> SimpleExpr {
    match field {
        EmployeeField::EmployeeId => EmployeeColumn::EmployeeId.into_simple_expr(),
        EmployeeField::Name => EmployeeColumn::Name.into_simple_expr(),
        EmployeeField::DateOfJoining => EmployeeColumn::DateOfJoining.into_simple_expr(),
        EmployeeField::Gender => EmployeeColumn::Gender.into_simple_expr(),
        EmployeeField::Salary => EmployeeColumn::Salary.into_simple_expr(),
        EmployeeField::Department => DepartmentColumn::Name.into_simple_expr(),
    }
}

fn not_found(employee_id: i32) -> CoreError {
    CoreError::NotFound {
        entity: EntityKind::Employee.label(),
        id: employee_id,
    }
}

#[derive(Debug, Clone)]
pub struct PostgresEmployeeRepository {
    pub db: DatabaseConnection,
}

impl PostgresEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl EmployeeRepository for PostgresEmployeeRepository {
    async fn get_by_id(&self, employee_id: i32) -> Result<Employee, CoreError> {
        EmployeeEntity::find_by_id(employee_id)
            .find_also_related(DepartmentEntity)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get employee by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Employee::from)
            .ok_or_else(|| not_found(employee_id))
    }

    async fn list(&self, plan: ListPlan<EmployeeField>) -> Result<Paginated<Employee>, CoreError> {
        let mut query = EmployeeEntity::find().find_also_related(DepartmentEntity);
        for predicate in plan.predicates {
            let value = Value::from(predicate.value);
            query = query.filter(Expr::expr(column(predicate.field)).eq(value));
        }

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count employees: {}", e);
            CoreError::InternalServerError
        })?;

        for key in plan.ordering {
            query = query.order_by(column(key.field), key.order.into());
        }

        let employees = query
            .offset(plan.pagination.offset())
            .limit(plan.pagination.limit())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list employees: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Employee::from)
            .collect::<Vec<Employee>>();

        Ok(Paginated::new(employees, plan.pagination, total))
    }

    async fn create(&self, payload: EmployeePayload) -> Result<Employee, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let created = EmployeeActiveModel {
            name: Set(payload.name),
            department_id: Set(payload.department_id),
            date_of_joining: Set(payload.date_of_joining),
            gender: Set(payload.gender.as_str().to_string()),
            address: Set(payload.address),
            salary: Set(payload.salary),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| {
            error!("Failed to create employee: {}", e);
            CoreError::InternalServerError
        })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit employee creation: {}", e);
            CoreError::InternalServerError
        })?;

        self.get_by_id(created.employee_id).await
    }

    async fn update(&self, employee_id: i32, payload: EmployeePayload) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let result = EmployeeEntity::update_many()
            .col_expr(EmployeeColumn::Name, Expr::value(payload.name))
            .col_expr(
                EmployeeColumn::DepartmentId,
                Expr::value(payload.department_id),
            )
            .col_expr(
                EmployeeColumn::DateOfJoining,
                Expr::value(payload.date_of_joining),
            )
            .col_expr(
                EmployeeColumn::Gender,
                Expr::value(payload.gender.as_str()),
            )
            .col_expr(EmployeeColumn::Address, Expr::value(payload.address))
            .col_expr(EmployeeColumn::Salary, Expr::value(payload.salary))
            .filter(EmployeeColumn::EmployeeId.eq(employee_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to update employee: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(not_found(employee_id));
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit employee update: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(())
    }

    async fn delete(&self, employee_id: i32) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let employee = EmployeeEntity::find_by_id(employee_id)
            .one(&txn)
            .await
            .map_err(|e| {
                error!("Failed to get employee by id: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or_else(|| not_found(employee_id))?;

        EmployeeEntity::delete_by_id(employee.employee_id)
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete employee: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit employee deletion: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(())
    }
}
