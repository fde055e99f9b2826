use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    listing::{
        entities::{ListField, ListPlan, OrderKey, Predicate, SortOrder},
        value_objects::{FilterQuery, Pagination},
    },
    validation::{Complaint, Complaints, helpers::is_number},
};

/// Splits two comma-separated parameters and zips them positionally.
///
/// Only yields pairs when both parameters are present; extra entries on the longer
/// side are dropped.
fn zip_pair<'a>(left: Option<&'a str>, right: Option<&'a str>) -> Vec<(&'a str, &'a str)> {
    match (left, right) {
        (Some(left), Some(right)) => left.split(',').zip(right.split(',')).collect(),
        _ => Vec::new(),
    }
}

fn unknown_field<F: ListField>(parameter: &str, name: &str) -> CoreError {
    Complaints::from(vec![Complaint::InvalidFields {
        parameter: parameter.to_string(),
        fields: vec![name.to_string()],
        allowed: F::NAMES.iter().map(|name| name.to_string()).collect(),
    }])
    .into()
}

pub(crate) const NOT_POSITIVE: &str = "must be integer and greater than zero";
pub(crate) const TOO_LARGE: &str = "must not exceed 9223372036854775807";
pub(crate) const PAST_LAST_ROW: &str = "reaches past the last addressable row";

fn count_complaint(field: &str, reason: &str) -> CoreError {
    Complaints::from(vec![Complaint::invalid_value(field, reason)]).into()
}

/// Checks a page or page-size parameter, returning the complaint reason on failure.
pub(crate) fn check_count(raw: &str) -> Result<u64, &'static str> {
    match raw.parse::<u64>() {
        Ok(value) if value > Pagination::MAX_COUNT => Err(TOO_LARGE),
        Ok(value) if value > 0 => Ok(value),
        Err(_) if is_number(raw) => Err(TOO_LARGE),
        _ => Err(NOT_POSITIVE),
    }
}

fn parse_count(field: &str, raw: Option<&str>, default: u64) -> Result<u64, CoreError> {
    match raw {
        None => Ok(default),
        Some(raw) => check_count(raw).map_err(|reason| count_complaint(field, reason)),
    }
}

pub fn pagination(query: &FilterQuery) -> Result<Pagination, CoreError> {
    let page = parse_count("page", query.page.as_deref(), Pagination::DEFAULT_PAGE)?;
    let page_size = parse_count(
        "page_size",
        query.page_size.as_deref(),
        Pagination::DEFAULT_PAGE_SIZE,
    )?;

    Pagination::checked(page, page_size).ok_or_else(|| count_complaint("page", PAST_LAST_ROW))
}

/// Translates a validated filter-query into a [`ListPlan`] for entity field type `F`.
pub fn build_list_plan<F: ListField>(query: &FilterQuery) -> Result<ListPlan<F>, CoreError> {
    let mut predicates = Vec::new();
    for (name, raw) in zip_pair(query.search_by.as_deref(), query.search_for.as_deref()) {
        let field = F::from_name(name).ok_or_else(|| unknown_field::<F>("search_by", name))?;
        let value = field.kind().coerce(raw).ok_or_else(|| {
            CoreError::from(Complaints::from(vec![Complaint::invalid_value(
                name,
                field.kind().expectation(),
            )]))
        })?;
        predicates.push(Predicate { field, value });
    }

    let mut ordering = Vec::new();
    for (name, direction) in zip_pair(query.sort_by.as_deref(), query.order_by.as_deref()) {
        let field = F::from_name(name).ok_or_else(|| unknown_field::<F>("sort_by", name))?;
        let order = direction.parse::<SortOrder>().map_err(|_| {
            CoreError::from(Complaints::from(vec![Complaint::invalid_value(
                "order_by",
                "must be ASC or DESC",
            )]))
        })?;
        ordering.push(OrderKey { field, order });
    }

    let plan = ListPlan {
        predicates,
        ordering,
        pagination: pagination(query)?,
    };
    debug!(entity = F::ENTITY.label(), ?plan, "built list plan");

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{
        department::value_objects::DepartmentField,
        employee::value_objects::EmployeeField,
        listing::entities::FieldValue,
    };

    fn query() -> FilterQuery {
        FilterQuery::default()
    }

    #[test]
    fn test_no_parameters_selects_all_in_store_order() {
        let plan = build_list_plan::<DepartmentField>(&query()).unwrap();
        assert!(plan.predicates.is_empty());
        assert!(plan.ordering.is_empty());
        assert_eq!(plan.pagination, Pagination::new(1, 10));
    }

    #[test]
    fn test_search_pairs_zip_positionally() {
        let plan = build_list_plan::<EmployeeField>(&FilterQuery {
            search_by: Some("name,gender".to_string()),
            search_for: Some("Alice,female".to_string()),
            ..query()
        })
        .unwrap();

        assert_eq!(
            plan.predicates,
            vec![
                Predicate {
                    field: EmployeeField::Name,
                    value: FieldValue::Text("Alice".to_string()),
                },
                Predicate {
                    field: EmployeeField::Gender,
                    value: FieldValue::Text("female".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_search_values_are_typed() {
        let plan = build_list_plan::<EmployeeField>(&FilterQuery {
            search_by: Some("employee_id,salary,date_of_joining".to_string()),
            search_for: Some("4,1500.456,2020-02-29".to_string()),
            ..query()
        })
        .unwrap();

        let values = plan
            .predicates
            .into_iter()
            .map(|p| p.value)
            .collect::<Vec<_>>();
        assert_eq!(
            values,
            vec![
                FieldValue::Integer(4),
                FieldValue::Decimal(1500.46),
                FieldValue::Date(NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()),
            ]
        );
    }

    #[test]
    fn test_department_resolves_to_joined_name() {
        let plan = build_list_plan::<EmployeeField>(&FilterQuery {
            sort_by: Some("department,name".to_string()),
            order_by: Some("DESC,ASC".to_string()),
            ..query()
        })
        .unwrap();

        assert_eq!(
            plan.ordering,
            vec![
                OrderKey {
                    field: EmployeeField::Department,
                    order: SortOrder::Desc,
                },
                OrderKey {
                    field: EmployeeField::Name,
                    order: SortOrder::Asc,
                },
            ]
        );
    }

    #[test]
    fn test_half_pair_is_ignored() {
        let plan = build_list_plan::<DepartmentField>(&FilterQuery {
            search_by: Some("name".to_string()),
            sort_by: Some("name".to_string()),
            ..query()
        })
        .unwrap();
        assert!(plan.predicates.is_empty());
        assert!(plan.ordering.is_empty());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = build_list_plan::<DepartmentField>(&FilterQuery {
            sort_by: Some("salary".to_string()),
            order_by: Some("ASC".to_string()),
            ..query()
        });
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_pagination_offset() {
        let plan = build_list_plan::<DepartmentField>(&FilterQuery {
            page: Some("2".to_string()),
            page_size: Some("5".to_string()),
            ..query()
        })
        .unwrap();
        assert_eq!(plan.pagination.offset(), 5);
        assert_eq!(plan.pagination.limit(), 5);
    }

    fn paged(page: &str, page_size: &str) -> Result<Pagination, CoreError> {
        pagination(&FilterQuery {
            page: Some(page.to_string()),
            page_size: Some(page_size.to_string()),
            ..query()
        })
    }

    #[test]
    fn test_pagination_beyond_u64_is_rejected() {
        let result = paged("18446744073709551616", "2");
        assert_eq!(
            result,
            Err(CoreError::Validation(Complaints::from(vec![
                Complaint::invalid_value("page", TOO_LARGE)
            ])))
        );
    }

    #[test]
    fn test_pagination_overflowing_offset_is_rejected() {
        let result = paged("18446744073709551615", "2");
        assert!(matches!(result, Err(CoreError::Validation(_))));

        let result = paged("9223372036854775807", "2");
        assert_eq!(
            result,
            Err(CoreError::Validation(Complaints::from(vec![
                Complaint::invalid_value("page", PAST_LAST_ROW)
            ])))
        );
    }

    #[test]
    fn test_pagination_page_size_above_cap_is_rejected() {
        let result = paged("1", "9223372036854775808");
        assert_eq!(
            result,
            Err(CoreError::Validation(Complaints::from(vec![
                Complaint::invalid_value("page_size", TOO_LARGE)
            ])))
        );
    }
}
