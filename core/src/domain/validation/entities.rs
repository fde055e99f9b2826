use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Which write a payload is validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
}

/// One structured validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum Complaint {
    MissingFields {
        fields: Vec<String>,
    },
    InvalidFields {
        parameter: String,
        fields: Vec<String>,
        allowed: Vec<String>,
    },
    InvalidValue {
        field: String,
        reason: String,
    },
}

impl Complaint {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Complaint::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Outcome of request validation.
///
/// An empty payload is reported as a bare message rather than a list, so the two
/// shapes serialize differently on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Complaints {
    Message(String),
    List(Vec<Complaint>),
}

impl Complaints {
    pub const REQUEST_EMPTY: &'static str = "request empty";

    pub fn request_empty() -> Self {
        Complaints::Message(Self::REQUEST_EMPTY.to_string())
    }

    /// `true` when nothing was reported, i.e. the request is valid.
    pub fn is_empty(&self) -> bool {
        matches!(self, Complaints::List(list) if list.is_empty())
    }

    pub fn into_result(self) -> Result<(), Complaints> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Default for Complaints {
    fn default() -> Self {
        Complaints::List(Vec::new())
    }
}

impl From<Vec<Complaint>> for Complaints {
    fn from(list: Vec<Complaint>) -> Self {
        Complaints::List(list)
    }
}

impl From<ValidationErrors> for Complaints {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| (field.to_string(), errors.clone()))
            .collect::<Vec<_>>();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let complaints = fields
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.into_iter().map(move |error| {
                    let reason = error
                        .message
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    Complaint::invalid_value(field.clone(), reason)
                })
            })
            .collect();

        Complaints::List(complaints)
    }
}
