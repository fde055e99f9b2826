use chrono::NaiveDate;
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{
    employee::entities::{Gender, Salary},
    listing::{EntityKind, FieldKind, ListField},
    validation::{
        Complaints, Operation,
        helpers::{date, decimal, non_negative_integer, present},
        validate_request,
    },
};

/// Validated employee write. Every field is written on update; an absent
/// address clears the stored one.
#[derive(Debug, Clone, PartialEq, Validate, ToSchema)]
pub struct EmployeePayload {
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub name: String,
    pub department_id: i32,
    #[schema(example = "2021-03-04")]
    pub date_of_joining: NaiveDate,
    pub gender: Gender,
    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    pub address: Option<String>,
    #[validate(range(
        min = 0.0,
        max = 99999999.99,
        message = "must be between 0 and 99999999.99"
    ))]
    #[schema(example = 2000.0)]
    pub salary: f64,
}

impl EmployeePayload {
    pub fn from_request(
        payload: &Map<String, Value>,
        operation: Operation,
    ) -> Result<Self, Complaints> {
        validate_request(payload, operation, EntityKind::Employee).into_result()?;

        let employee = Self {
            name: present(payload, "name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            department_id: present(payload, "department_id")
                .and_then(non_negative_integer)
                .unwrap_or_default(),
            date_of_joining: present(payload, "date_of_joining")
                .and_then(date)
                .unwrap_or_default(),
            gender: present(payload, "gender")
                .and_then(Value::as_str)
                .and_then(|gender| gender.parse().ok())
                .unwrap_or_default(),
            address: present(payload, "address")
                .and_then(Value::as_str)
                .map(str::to_string),
            salary: present(payload, "salary")
                .and_then(decimal)
                .map(|salary| Salary::new(salary).value())
                .unwrap_or_default(),
        };
        employee.validate()?;

        Ok(employee)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    EmployeeId,
    Name,
    DateOfJoining,
    Gender,
    Salary,
    /// The owning department's name.
    Department,
}

impl ListField for EmployeeField {
    const ENTITY: EntityKind = EntityKind::Employee;
    const NAMES: &'static [&'static str] = &[
        "employee_id",
        "name",
        "date_of_joining",
        "gender",
        "salary",
        "department",
    ];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "employee_id" => Some(EmployeeField::EmployeeId),
            "name" => Some(EmployeeField::Name),
            "date_of_joining" => Some(EmployeeField::DateOfJoining),
            "gender" => Some(EmployeeField::Gender),
            "salary" => Some(EmployeeField::Salary),
            "department" => Some(EmployeeField::Department),
            _ => None,
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            EmployeeField::EmployeeId => FieldKind::Integer,
            EmployeeField::Name | EmployeeField::Department => FieldKind::Text,
            EmployeeField::DateOfJoining => FieldKind::Date,
            EmployeeField::Gender => FieldKind::Gender,
            EmployeeField::Salary => FieldKind::Decimal,
        }
    }
}
