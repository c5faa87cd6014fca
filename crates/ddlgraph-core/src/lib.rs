mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Constraint, Field, Index, Schema, Table};

/// A Result type alias that uses ddlgraph's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
