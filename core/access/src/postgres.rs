//! FILENAME: core/access/src/postgres.rs
// PURPOSE: Postgres-backed DataSource over a single, serially reused
// connection. One session = one connection, authenticated with the
// credentials entered at login.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgRow};
use sqlx::{Column, ConnectOptions, Connection, PgConnection, Row, TypeInfo};
use tokio::sync::Mutex;

use crate::config::ConnectionConfig;
use crate::error::AccessError;
use crate::source::DataSource;
use crate::table::SourceTable;

pub struct PostgresSource {
    // Option so close() can hand the connection to sqlx by value.
    conn: Mutex<Option<PgConnection>>,
}

impl PostgresSource {
    /// Opens a session using the supplied credentials. Any driver failure
    /// is returned verbatim; the login screen shows it to the user.
    pub async fn connect(
        config: &ConnectionConfig,
        username: &str,
        password: &str,
    ) -> Result<Self, AccessError> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.database)
            .username(username)
            .password(password);
        let conn = options.connect().await.map_err(AccessError::Connect)?;
        Ok(PostgresSource {
            conn: Mutex::new(Some(conn)),
        })
    }
}

#[async_trait]
impl DataSource for PostgresSource {
    async fn fetch_all(&self, table: SourceTable) -> Result<Vec<Vec<String>>, AccessError> {
        let sql = format!("SELECT * FROM {};", table.name());
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or(AccessError::NoSession)?;
        let rows = sqlx::query(&sql)
            .fetch_all(conn)
            .await
            .map_err(|source| AccessError::Query { table, source })?;
        rows.iter()
            .map(|row| {
                (0..row.len())
                    .map(|i| decode_cell(row, i))
                    .collect::<Result<Vec<String>, AccessError>>()
            })
            .collect()
    }

    async fn row_count(&self, table: SourceTable) -> Result<i64, AccessError> {
        let sql = format!("SELECT COUNT(*) FROM {};", table.name());
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or(AccessError::NoSession)?;
        sqlx::query_scalar(&sql)
            .fetch_one(conn)
            .await
            .map_err(|source| AccessError::Query { table, source })
    }

    async fn contact_names(&self) -> Result<Vec<(String, String)>, AccessError> {
        let table = SourceTable::In450b;
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or(AccessError::NoSession)?;
        sqlx::query_as::<_, (String, String)>("SELECT first_name, last_name FROM in450b;")
            .fetch_all(conn)
            .await
            .map_err(|source| AccessError::Query { table, source })
    }

    async fn close(&self) -> Result<(), AccessError> {
        let conn = self.conn.lock().await.take();
        match conn {
            Some(conn) => conn.close().await.map_err(AccessError::Connect),
            None => Ok(()),
        }
    }
}

/// Renders one returned cell as display text, whatever its declared type.
/// NULL becomes the empty string, matching how the grid shows absent data.
fn decode_cell(row: &PgRow, idx: usize) -> Result<String, AccessError> {
    if let Ok(v) = row.try_get::<Option<String>, _>(idx) {
        return Ok(v.unwrap_or_default());
    }
    if let Ok(v) = row.try_get::<Option<i32>, _>(idx) {
        return Ok(v.map(|v| v.to_string()).unwrap_or_default());
    }
    if let Ok(v) = row.try_get::<Option<i64>, _>(idx) {
        return Ok(v.map(|v| v.to_string()).unwrap_or_default());
    }
    if let Ok(v) = row.try_get::<Option<i16>, _>(idx) {
        return Ok(v.map(|v| v.to_string()).unwrap_or_default());
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(idx) {
        return Ok(v.map(|v| v.to_string()).unwrap_or_default());
    }
    if let Ok(v) = row.try_get::<Option<f32>, _>(idx) {
        return Ok(v.map(|v| v.to_string()).unwrap_or_default());
    }
    if let Ok(v) = row.try_get::<Option<bool>, _>(idx) {
        return Ok(v.map(|v| v.to_string()).unwrap_or_default());
    }
    if let Ok(v) = row.try_get::<Option<chrono::NaiveDateTime>, _>(idx) {
        return Ok(v.map(|v| v.to_string()).unwrap_or_default());
    }
    if let Ok(v) = row.try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(idx) {
        return Ok(v.map(|v| v.to_rfc3339()).unwrap_or_default());
    }
    if let Ok(v) = row.try_get::<Option<chrono::NaiveDate>, _>(idx) {
        return Ok(v.map(|v| v.to_string()).unwrap_or_default());
    }
    if let Ok(v) = row.try_get::<Option<chrono::NaiveTime>, _>(idx) {
        return Ok(v.map(|v| v.to_string()).unwrap_or_default());
    }
    Err(AccessError::Decode {
        column: idx,
        type_name: row.column(idx).type_info().name().to_string(),
    })
}
