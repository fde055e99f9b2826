use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    department::value_objects::DepartmentField,
    employee::{entities::Gender, value_objects::EmployeeField},
    listing::value_objects::Pagination,
    validation::helpers::{is_number, parse_date, parse_decimal},
};

/// The persisted record types exposed through list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Department,
    Employee,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Department => "department",
            EntityKind::Employee => "employee",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            EntityKind::Department => "Department",
            EntityKind::Employee => "Employee",
        }
    }

    /// Field names accepted by `search_by` and `sort_by`.
    pub fn allowed_fields(self) -> &'static [&'static str] {
        match self {
            EntityKind::Department => DepartmentField::NAMES,
            EntityKind::Employee => EmployeeField::NAMES,
        }
    }

    pub fn field_kind(self, name: &str) -> Option<FieldKind> {
        match self {
            EntityKind::Department => DepartmentField::from_name(name).map(ListField::kind),
            EntityKind::Employee => EmployeeField::from_name(name).map(ListField::kind),
        }
    }
}

/// A searchable/sortable field of one entity, resolved from its query-string name.
pub trait ListField: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    const ENTITY: EntityKind;
    const NAMES: &'static [&'static str];

    fn from_name(name: &str) -> Option<Self>;

    fn kind(self) -> FieldKind;
}

/// Value type of a field, used to coerce `search_for` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Decimal,
    Date,
    Gender,
    Text,
}

impl FieldKind {
    pub fn coerce(self, raw: &str) -> Option<FieldValue> {
        match self {
            FieldKind::Integer if is_number(raw) => raw.parse().ok().map(FieldValue::Integer),
            FieldKind::Integer => None,
            FieldKind::Decimal => parse_decimal(raw).map(|value| FieldValue::Decimal(round2(value))),
            FieldKind::Date => parse_date(raw).map(FieldValue::Date),
            FieldKind::Gender => raw
                .parse::<Gender>()
                .ok()
                .map(|gender| FieldValue::Text(gender.as_str().to_string())),
            FieldKind::Text => Some(FieldValue::Text(raw.to_string())),
        }
    }

    pub fn expectation(self) -> &'static str {
        match self {
            FieldKind::Integer => "must be a non-negative integer",
            FieldKind::Decimal => "must be a decimal number",
            FieldKind::Date => "must be a date in YYYY-MM-DD format",
            FieldKind::Gender => "must be one of: male, female",
            FieldKind::Text => "must be text",
        }
    }
}

/// Rounds to two decimals. Values too large to scale carry no fraction and pass through.
pub(crate) fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i32),
    Decimal(f64),
    Date(NaiveDate),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub const NAMES: &'static [&'static str] = &["ASC", "DESC"];
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}

/// Equality condition on one field. Predicates of a plan are ANDed together.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate<F> {
    pub field: F,
    pub value: FieldValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderKey<F> {
    pub field: F,
    pub order: SortOrder,
}

/// Store-agnostic description of a list query.
///
/// No predicates selects every row. No ordering keys leaves the order to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPlan<F> {
    pub predicates: Vec<Predicate<F>>,
    pub ordering: Vec<OrderKey<F>>,
    pub pagination: Pagination,
}
