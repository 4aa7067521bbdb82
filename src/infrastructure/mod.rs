//! Infrastructure layer - Cache implementation, AWS adapter and logging

pub mod logging;
pub mod parameter;
