//! Common utilities shared across the database layer

pub mod error;

pub use error::{DatabaseError, DatabaseResult};
