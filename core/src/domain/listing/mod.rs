//! Search, sort and pagination for list endpoints.
//!
//! A [`FilterQuery`] carries the raw query-string parameters. Once validated it is turned
//! into a [`ListPlan`] that repositories translate into store predicates, ordering keys
//! and an offset/limit pair. Results come back wrapped in [`Paginated`].

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{
    EntityKind, FieldKind, FieldValue, ListField, ListPlan, OrderKey, Predicate, SortOrder,
};
pub use services::build_list_plan;
pub use value_objects::{FilterQuery, Paginated, Pagination};
