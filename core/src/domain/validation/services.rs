use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    employee::entities::Gender,
    listing::{
        EntityKind, FilterQuery, Pagination, SortOrder,
        services::{PAST_LAST_ROW, check_count},
    },
    validation::{
        entities::{Complaint, Complaints, Operation},
        helpers::{date, decimal, is_number, non_negative_integer, present},
    },
};

fn required_fields(entity: EntityKind) -> &'static [&'static str] {
    match entity {
        EntityKind::Department => &["name"],
        EntityKind::Employee => &["name", "department_id"],
    }
}

/// Checks a create/update payload against the rules of `entity`.
///
/// Every failed rule adds one entry; an empty payload short-circuits with the
/// "request empty" message.
pub fn validate_request(
    payload: &Map<String, Value>,
    operation: Operation,
    entity: EntityKind,
) -> Complaints {
    if payload.is_empty() {
        return Complaints::request_empty();
    }

    let mut complaints = Vec::new();

    let missing = required_fields(entity)
        .iter()
        .filter(|field| present(payload, field).is_none())
        .map(|field| field.to_string())
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        complaints.push(Complaint::MissingFields { fields: missing });
    }

    if let Some(name) = present(payload, "name")
        && !name.is_string()
    {
        complaints.push(Complaint::invalid_value("name", "must be a string"));
    }

    if entity == EntityKind::Employee {
        validate_employee_fields(payload, &mut complaints);
    }

    debug!(
        entity = entity.label(),
        ?operation,
        complaints = complaints.len(),
        "validated request payload"
    );

    Complaints::List(complaints)
}

fn validate_employee_fields(payload: &Map<String, Value>, complaints: &mut Vec<Complaint>) {
    if let Some(department_id) = present(payload, "department_id")
        && non_negative_integer(department_id).is_none()
    {
        complaints.push(Complaint::invalid_value(
            "department_id",
            "must be a non-negative integer",
        ));
    }

    if present(payload, "date_of_joining").and_then(date).is_none() {
        complaints.push(Complaint::invalid_value(
            "date_of_joining",
            "must be a date in YYYY-MM-DD format",
        ));
    }

    if let Some(gender) = present(payload, "gender")
        && gender.as_str().and_then(|g| g.parse::<Gender>().ok()).is_none()
    {
        complaints.push(Complaint::invalid_value(
            "gender",
            format!("must be one of: {}", Gender::NAMES.join(", ")),
        ));
    }

    if let Some(address) = present(payload, "address")
        && !address.is_string()
    {
        complaints.push(Complaint::invalid_value("address", "must be a string"));
    }

    if present(payload, "salary").and_then(decimal).is_none() {
        complaints.push(Complaint::invalid_value("salary", "must be a decimal number"));
    }
}

fn split(value: &Option<String>) -> Vec<&str> {
    value
        .as_deref()
        .map(|value| value.split(',').collect())
        .unwrap_or_default()
}

/// Checks list parameters against the rules of `entity`.
pub fn validate_filter_request(filter: &FilterQuery, entity: EntityKind) -> Vec<Complaint> {
    let mut complaints = Vec::new();

    let mut counts = Vec::new();
    for (field, value) in [("page", &filter.page), ("page_size", &filter.page_size)] {
        match value.as_deref() {
            None => counts.push(None),
            Some(raw) if !is_number(raw) => complaints.push(Complaint::invalid_value(
                field,
                "must be a non-negative integer",
            )),
            Some(raw) => match check_count(raw) {
                Ok(count) => counts.push(Some(count)),
                Err(reason) => complaints.push(Complaint::invalid_value(field, reason)),
            },
        }
    }
    if let [page, page_size] = counts[..]
        && Pagination::checked(
            page.unwrap_or(Pagination::DEFAULT_PAGE),
            page_size.unwrap_or(Pagination::DEFAULT_PAGE_SIZE),
        )
        .is_none()
    {
        complaints.push(Complaint::invalid_value("page", PAST_LAST_ROW));
    }

    if split(&filter.order_by)
        .iter()
        .any(|order| order.parse::<SortOrder>().is_err())
    {
        complaints.push(Complaint::invalid_value(
            "order_by",
            format!("must be one of: {}", SortOrder::NAMES.join(", ")),
        ));
    }

    // Paired parameters are all-or-nothing.
    let pairs = [
        ("search_by", &filter.search_by, "search_for", &filter.search_for),
        ("sort_by", &filter.sort_by, "order_by", &filter.order_by),
    ];
    let missing = pairs
        .iter()
        .filter_map(|(left, left_value, right, right_value)| {
            match (left_value.is_some(), right_value.is_some()) {
                (true, false) => Some(right.to_string()),
                (false, true) => Some(left.to_string()),
                _ => None,
            }
        })
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        complaints.push(Complaint::MissingFields { fields: missing });
    }

    let allowed = entity.allowed_fields();
    let mut search_fields_valid = true;
    for (parameter, value) in [("sort_by", &filter.sort_by), ("search_by", &filter.search_by)] {
        let unknown = split(value)
            .into_iter()
            .filter(|name| !allowed.iter().any(|field| field == name))
            .map(str::to_string)
            .collect::<Vec<_>>();
        if !unknown.is_empty() {
            if parameter == "search_by" {
                search_fields_valid = false;
            }
            complaints.push(Complaint::InvalidFields {
                parameter: parameter.to_string(),
                fields: unknown,
                allowed: allowed.iter().map(|name| name.to_string()).collect(),
            });
        }
    }

    if search_fields_valid {
        let fields = split(&filter.search_by);
        let values = split(&filter.search_for);
        for (name, raw) in fields.into_iter().zip(values) {
            if let Some(kind) = entity.field_kind(name)
                && kind.coerce(raw).is_none()
            {
                complaints.push(Complaint::invalid_value(name, kind.expectation()));
            }
        }
    }

    complaints
}

/// Parses a path identifier: digits only and greater than zero.
pub fn parse_identifier(raw: &str) -> Result<i32, CoreError> {
    if !is_number(raw) {
        return Err(CoreError::InvalidIdentifier(raw.to_string()));
    }

    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| CoreError::InvalidIdentifier(raw.to_string()))
}
