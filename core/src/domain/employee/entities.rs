use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use utoipa::ToSchema;

use crate::domain::listing::entities::round2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const NAMES: &'static [&'static str] = &["male", "female"];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monetary amount with two decimal places, rendered as text (`"2000.00"`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Salary(f64);

impl Salary {
    pub fn new(value: f64) -> Self {
        Self(round2(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Salary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Salary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Salary::new(value)),
            Raw::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(Salary::new)
                .map_err(|_| de::Error::custom(format!("invalid salary: {text}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    pub employee_id: i32,
    pub name: String,
    pub department_id: i32,
    /// Name of the owning department.
    pub department: String,
    #[schema(example = "2021-03-04")]
    pub date_of_joining: NaiveDate,
    pub gender: Gender,
    pub address: Option<String>,
    #[schema(value_type = String, example = "2000.00")]
    pub salary: Salary,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_salary_renders_two_decimals() {
        assert_eq!(Salary::new(2000.0).to_string(), "2000.00");
        assert_eq!(Salary::new(1234.567).to_string(), "1234.57");
        assert_eq!(json!(Salary::new(1500.4)), json!("1500.40"));
    }

    #[test]
    fn test_salary_near_float_limit_stays_finite() {
        assert!(Salary::new(1e308).value().is_finite());
        assert_eq!(Salary::new(1e308).value(), 1e308);
    }

    #[test]
    fn test_salary_accepts_text_or_number() {
        let from_text: Salary = serde_json::from_value(json!("2500.5")).unwrap();
        let from_number: Salary = serde_json::from_value(json!(2500.5)).unwrap();
        assert_eq!(from_text, from_number);
        assert!(serde_json::from_value::<Salary>(json!("lots")).is_err());
    }

    #[test]
    fn test_gender_names() {
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
        assert!("Female".parse::<Gender>().is_err());
        assert_eq!(Gender::default(), Gender::Male);
        assert_eq!(json!(Gender::Female), json!("female"));
    }
}
