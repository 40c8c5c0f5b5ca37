//! FILENAME: core/access/src/error.rs

use thiserror::Error;

use crate::table::SourceTable;

#[derive(Error, Debug)]
pub enum AccessError {
    /// Opening the session failed. The raw driver text is surfaced to the
    /// user on the login path, so it stays in the message.
    #[error("{0}")]
    Connect(#[source] sqlx::Error),

    /// A query against one of the fixed tables failed. Shown to the user
    /// only as a generic message; the detail goes to the log.
    #[error("query against {table} failed: {source}")]
    Query {
        table: SourceTable,
        #[source]
        source: sqlx::Error,
    },

    /// A returned column could not be rendered as text.
    #[error("unsupported column type {type_name} at position {column}")]
    Decode { column: usize, type_name: String },

    /// The connection was already released.
    #[error("no open database session")]
    NoSession,
}
