use tracing::warn;

use crate::{
    domain::employee::entities::{Employee, Gender, Salary},
    entity::{department, employee},
};

fn stored_gender(employee_id: i32, stored: &str) -> Gender {
    stored.parse().unwrap_or_else(|_| {
        warn!(employee_id, gender = stored, "Unknown stored gender, reading as default");
        Gender::default()
    })
}

/// Row of the employee/department join. The foreign key guarantees the
/// department side is present.
impl From<(employee::Model, Option<department::Model>)> for Employee {
    fn from((model, department): (employee::Model, Option<department::Model>)) -> Self {
        Self {
            employee_id: model.employee_id,
            gender: stored_gender(model.employee_id, &model.gender),
            name: model.name,
            department_id: model.department_id,
            department: department.map(|department| department.name).unwrap_or_default(),
            date_of_joining: model.date_of_joining,
            address: model.address,
            salary: Salary::new(model.salary),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn row(gender: &str) -> (employee::Model, Option<department::Model>) {
        (
            employee::Model {
                employee_id: 4,
                name: "Alice".to_string(),
                department_id: 2,
                date_of_joining: NaiveDate::from_ymd_opt(2021, 3, 4).unwrap(),
                gender: gender.to_string(),
                address: None,
                salary: 2000.0,
            },
            Some(department::Model {
                department_id: 2,
                name: "Sales".to_string(),
            }),
        )
    }

    #[test]
    fn test_row_maps_joined_department() {
        let employee = Employee::from(row("female"));
        assert_eq!(employee.gender, Gender::Female);
        assert_eq!(employee.department, "Sales");
        assert_eq!(employee.salary.to_string(), "2000.00");
    }

    #[test]
    fn test_unknown_stored_gender_reads_as_default() {
        let employee = Employee::from(row("robot"));
        assert_eq!(employee.gender, Gender::Male);
        assert_eq!(employee.name, "Alice");
    }
}
