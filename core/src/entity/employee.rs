use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub employee_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub name: String,
    pub department_id: i32,
    pub date_of_joining: Date,
    #[sea_orm(column_type = "String(StringLen::N(6))")]
    pub gender: String,
    #[sea_orm(column_type = "String(StringLen::N(1000))", nullable)]
    pub address: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub salary: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::DepartmentId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Department,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
