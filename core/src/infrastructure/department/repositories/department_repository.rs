use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait, sea_query::Expr,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    department::{
        entities::Department,
        ports::DepartmentRepository,
        value_objects::{DepartmentField, DepartmentPayload},
    },
    listing::{EntityKind, ListPlan, Paginated},
};
use crate::entity::department::{
    ActiveModel as DepartmentActiveModel, Column as DepartmentColumn, Entity as DepartmentEntity,
};

fn column(field: DepartmentField) -> DepartmentColumn {
    match field {
        DepartmentField::DepartmentId => DepartmentColumn::DepartmentId,
        DepartmentField::Name => DepartmentColumn::Name,
    }
}

fn not_found(department_id: i32) -> CoreError {
    CoreError::NotFound {
        entity: EntityKind::Department.label(),
        id: department_id,
    }
}

#[derive(Debug, Clone)]
pub struct PostgresDepartmentRepository {
    pub db: DatabaseConnection,
}

impl PostgresDepartmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DepartmentRepository for PostgresDepartmentRepository {
    async fn get_by_id(&self, department_id: i32) -> Result<Department, CoreError> {
        DepartmentEntity::find_by_id(department_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get department by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Department::from)
            .ok_or_else(|| not_found(department_id))
    }

    async fn list(
        &self,
        plan: ListPlan<DepartmentField>,
    ) -> Result<Paginated<Department>, CoreError> {
        let mut query = DepartmentEntity::find();
        for predicate in plan.predicates {
            query = query.filter(column(predicate.field).eq(predicate.value));
        }

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count departments: {}", e);
            CoreError::InternalServerError
        })?;

        for key in plan.ordering {
            query = query.order_by(column(key.field), key.order.into());
        }

        let departments = query
            .offset(plan.pagination.offset())
            .limit(plan.pagination.limit())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list departments: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Department::from)
            .collect::<Vec<Department>>();

        Ok(Paginated::new(departments, plan.pagination, total))
    }

    async fn create(&self, payload: DepartmentPayload) -> Result<Department, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let created = DepartmentActiveModel {
            name: Set(payload.name),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| {
            error!("Failed to create department: {}", e);
            CoreError::InternalServerError
        })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit department creation: {}", e);
            CoreError::InternalServerError
        })?;

        self.get_by_id(created.department_id).await
    }

    async fn update(
        &self,
        department_id: i32,
        payload: DepartmentPayload,
    ) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let result = DepartmentEntity::update_many()
            .col_expr(DepartmentColumn::Name, Expr::value(payload.name))
            .filter(DepartmentColumn::DepartmentId.eq(department_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to update department: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(not_found(department_id));
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit department update: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(())
    }

    async fn delete(&self, department_id: i32) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let department = DepartmentEntity::find_by_id(department_id)
            .one(&txn)
            .await
            .map_err(|e| {
                error!("Failed to get department by id: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or_else(|| not_found(department_id))?;

        DepartmentEntity::delete_by_id(department.department_id)
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete department: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit department deletion: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::{FieldValue, OrderKey, Pagination, Predicate, SortOrder};
    use crate::infrastructure::db::postgres::memory_database;

    async fn repository() -> PostgresDepartmentRepository {
        PostgresDepartmentRepository::new(memory_database().await)
    }

    fn payload(name: &str) -> DepartmentPayload {
        DepartmentPayload {
            name: name.to_string(),
        }
    }

    fn plan(
        predicates: Vec<Predicate<DepartmentField>>,
        ordering: Vec<OrderKey<DepartmentField>>,
    ) -> ListPlan<DepartmentField> {
        ListPlan {
            predicates,
            ordering,
            pagination: Pagination::default(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let repository = repository().await;

        let created = repository.create(payload("Sales")).await.unwrap();
        assert_eq!(created.name, "Sales");

        let fetched = repository.get_by_id(created.department_id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let repository = repository().await;

        let error = repository.get_by_id(42).await.unwrap_err();
        assert_eq!(
            error,
            CoreError::NotFound {
                entity: "department",
                id: 42
            }
        );
    }

    #[tokio::test]
    async fn test_update_overwrites_name() {
        let repository = repository().await;
        let created = repository.create(payload("Sales")).await.unwrap();

        repository
            .update(created.department_id, payload("Marketing"))
            .await
            .unwrap();

        let fetched = repository.get_by_id(created.department_id).await.unwrap();
        assert_eq!(fetched.name, "Marketing");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repository = repository().await;

        let error = repository.update(7, payload("Marketing")).await.unwrap_err();
        assert_eq!(
            error,
            CoreError::NotFound {
                entity: "department",
                id: 7
            }
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let repository = repository().await;
        let created = repository.create(payload("Sales")).await.unwrap();

        repository.delete(created.department_id).await.unwrap();

        assert!(repository.get_by_id(created.department_id).await.is_err());
        assert!(repository.delete(created.department_id).await.is_err());
    }

    #[tokio::test]
    async fn test_list_filters_and_sorts() {
        let repository = repository().await;
        for name in ["Sales", "Engineering", "Support", "Sales"] {
            repository.create(payload(name)).await.unwrap();
        }

        let sales = repository
            .list(plan(
                vec![Predicate {
                    field: DepartmentField::Name,
                    value: FieldValue::Text("Sales".to_string()),
                }],
                vec![OrderKey {
                    field: DepartmentField::DepartmentId,
                    order: SortOrder::Desc,
                }],
            ))
            .await
            .unwrap();
        assert_eq!(sales.total_records, Some(2));
        assert_eq!(
            sales
                .items
                .iter()
                .map(|department| department.department_id)
                .collect::<Vec<_>>(),
            vec![4, 1]
        );

        let sorted = repository
            .list(plan(
                Vec::new(),
                vec![OrderKey {
                    field: DepartmentField::Name,
                    order: SortOrder::Asc,
                }],
            ))
            .await
            .unwrap();
        assert_eq!(
            sorted
                .items
                .iter()
                .map(|department| department.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Engineering", "Sales", "Sales", "Support"]
        );
    }

    #[tokio::test]
    async fn test_list_paginates() {
        let repository = repository().await;
        for index in 0..12 {
            repository
                .create(payload(&format!("Department {index}")))
                .await
                .unwrap();
        }

        let page = repository
            .list(ListPlan {
                predicates: Vec::new(),
                ordering: vec![OrderKey {
                    field: DepartmentField::DepartmentId,
                    order: SortOrder::Asc,
                }],
                pagination: Pagination::new(2, 5),
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].department_id, 6);
        assert_eq!(page.total_pages, Some(3));
        assert_eq!(page.total_records, Some(12));
        assert_eq!(page.total_records_per_page, Some(5));
    }

    #[tokio::test]
    async fn test_list_empty_store_reports_null_counts() {
        let repository = repository().await;

        let page = repository.list(plan(Vec::new(), Vec::new())).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, None);
        assert_eq!(page.total_records, None);
        assert_eq!(page.total_records_per_page, None);
    }
}
