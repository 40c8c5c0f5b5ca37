//! FILENAME: core/access/src/source.rs
// PURPOSE: The seam between the browser commands and the database.

use async_trait::async_trait;

use crate::error::AccessError;
use crate::table::SourceTable;

/// The six fixed read operations, plus connection release.
///
/// Implementations are expected to return rows in the table's natural
/// return order and never to filter by user: every operation reads the
/// whole table.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// `SELECT * FROM <table>`: all columns, all rows, as display text.
    async fn fetch_all(&self, table: SourceTable) -> Result<Vec<Vec<String>>, AccessError>;

    /// `SELECT COUNT(*) FROM <table>`.
    async fn row_count(&self, table: SourceTable) -> Result<i64, AccessError>;

    /// `SELECT first_name, last_name FROM in450b`.
    async fn contact_names(&self) -> Result<Vec<(String, String)>, AccessError>;

    /// Releases the connection. Best-effort: callers log failures and
    /// move on.
    async fn close(&self) -> Result<(), AccessError>;
}
