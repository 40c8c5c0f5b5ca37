//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for Datascope backend integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use access::{AccessError, DataSource, SourceTable};
use app_lib::{create_app_state, install_session, AppState, LoginData};
use async_trait::async_trait;

/// Test harness for creating and managing test state.
pub struct TestHarness {
    pub state: AppState,
}

impl TestHarness {
    /// Create a new test harness with empty state (login screen up).
    pub fn new() -> Self {
        TestHarness {
            state: create_app_state(),
        }
    }

    /// Create a harness with an installed session backed by a mock source
    /// populated with the sample tables.
    pub async fn with_session(username: &str) -> (Self, Arc<MockSource>, LoginData) {
        let harness = Self::new();
        let mock = Arc::new(MockSource::with_sample_data());
        let login = install_session(&harness.state, username, Box::new(mock.clone())).await;
        (harness, mock, login)
    }
}

/// In-memory stand-in for the Postgres source. Row order is insertion
/// order, mirroring the natural return order of the real tables.
pub struct MockSource {
    tables: Mutex<HashMap<SourceTable, Vec<Vec<String>>>>,
    fail_queries: AtomicBool,
    pub closed: AtomicBool,
}

impl MockSource {
    pub fn new() -> Self {
        MockSource {
            tables: Mutex::new(HashMap::new()),
            fail_queries: AtomicBool::new(false),
            closed: AtomicBool::new(false),
        }
    }

    pub fn with_sample_data() -> Self {
        let mock = Self::new();
        mock.set_table(
            SourceTable::In450a,
            vec![
                row(&["0.000001", "10.0.0.1", "10.0.0.2", "TCP", "60", "SYN"]),
                row(&["0.000145", "10.0.0.2", "10.0.0.1", "TCP", "60", "SYN, ACK"]),
                row(&["0.000198", "10.0.0.1", "10.0.0.2", "HTTP", "512", "GET /index"]),
            ],
        );
        mock.set_table(
            SourceTable::In450b,
            vec![
                row(&["Jane", "Doe", "j@x.com", "10.0.0.1", "10.0.0.2"]),
                row(&["John", "Smith", "john@x.com", "10.0.0.3", "10.0.0.4"]),
            ],
        );
        mock.set_table(
            SourceTable::In450c,
            vec![row(&[
                "7", "wireshark", "4.2.0", "10.0.0.1", "10.0.0.2", "sha256:ab12",
            ])],
        );
        mock
    }

    pub fn set_table(&self, table: SourceTable, rows: Vec<Vec<String>>) {
        self.tables.lock().unwrap().insert(table, rows);
    }

    /// Make every subsequent query fail, simulating a dropped connection.
    pub fn fail_queries(&self) {
        self.fail_queries.store(true, Ordering::SeqCst);
    }

    pub fn was_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn check(&self, table: SourceTable) -> Result<(), AccessError> {
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(AccessError::Query {
                table,
                source: sqlx::Error::Protocol("simulated connection loss".into()),
            });
        }
        Ok(())
    }

    fn rows(&self, table: SourceTable) -> Vec<Vec<String>> {
        self.tables
            .lock()
            .unwrap()
            .get(&table)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DataSource for Arc<MockSource> {
    async fn fetch_all(&self, table: SourceTable) -> Result<Vec<Vec<String>>, AccessError> {
        self.check(table)?;
        Ok(self.rows(table))
    }

    async fn row_count(&self, table: SourceTable) -> Result<i64, AccessError> {
        self.check(table)?;
        Ok(self.rows(table).len() as i64)
    }

    async fn contact_names(&self) -> Result<Vec<(String, String)>, AccessError> {
        self.check(SourceTable::In450b)?;
        Ok(self
            .rows(SourceTable::In450b)
            .into_iter()
            .map(|r| (r[0].clone(), r[1].clone()))
            .collect())
    }

    async fn close(&self) -> Result<(), AccessError> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}
