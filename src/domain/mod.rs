//! Domain layer - Core cache contracts and errors

pub mod error;
pub mod parameter;

pub use error::{DomainError, FetchError};
