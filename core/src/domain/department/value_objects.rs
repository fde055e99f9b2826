use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{
    listing::{EntityKind, FieldKind, ListField},
    validation::{Complaints, Operation, helpers::present, validate_request},
};

/// Validated department write. Every field is written on update.
#[derive(Debug, Clone, PartialEq, Eq, Validate, ToSchema)]
pub struct DepartmentPayload {
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub name: String,
}

impl DepartmentPayload {
    pub fn from_request(
        payload: &Map<String, Value>,
        operation: Operation,
    ) -> Result<Self, Complaints> {
        validate_request(payload, operation, EntityKind::Department).into_result()?;

        let department = Self {
            name: present(payload, "name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        };
        department.validate()?;

        Ok(department)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentField {
    DepartmentId,
    Name,
}

impl ListField for DepartmentField {
    const ENTITY: EntityKind = EntityKind::Department;
    const NAMES: &'static [&'static str] = &["department_id", "name"];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "department_id" => Some(DepartmentField::DepartmentId),
            "name" => Some(DepartmentField::Name),
            _ => None,
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            DepartmentField::DepartmentId => FieldKind::Integer,
            DepartmentField::Name => FieldKind::Text,
        }
    }
}
