use sea_orm::{Order, Value};

use crate::domain::listing::{FieldValue, SortOrder};

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Integer(value) => value.into(),
            FieldValue::Decimal(value) => value.into(),
            FieldValue::Date(value) => value.into(),
            FieldValue::Text(value) => value.into(),
        }
    }
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}
