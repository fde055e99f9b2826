use thiserror::Error;

use crate::domain::validation::entities::Complaints;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Request validation failed")]
    Validation(Complaints),

    #[error("{0} must be integer and greater than zero")]
    InvalidIdentifier(String),

    #[error("Requested {entity} id {id} not found.")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Internal server error")]
    InternalServerError,
}

impl From<Complaints> for CoreError {
    fn from(complaints: Complaints) -> Self {
        CoreError::Validation(complaints)
    }
}
