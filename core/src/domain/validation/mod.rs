pub mod entities;
pub mod helpers;
pub mod services;

pub use entities::{Complaint, Complaints, Operation};
pub use services::{parse_identifier, validate_filter_request, validate_request};
