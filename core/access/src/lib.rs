//! FILENAME: core/access/src/lib.rs
//! Datascope Data Access Module
//!
//! Wraps the fixed queries against the three source tables, the session
//! role model derived at login, and the Postgres connection itself.

mod config;
mod error;
mod ops;
mod postgres;
mod role;
mod source;
mod table;

pub use config::ConnectionConfig;
pub use error::AccessError;
pub use ops::{Operation, OperationKind};
pub use postgres::PostgresSource;
pub use role::Role;
pub use source::DataSource;
pub use table::SourceTable;
