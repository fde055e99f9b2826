pub mod mappers;
pub mod postgres;
