//! FILENAME: app/src-tauri/src/session.rs
// PURPOSE: The application-owned entity: username + role + live handle.

use access::{DataSource, Role};

/// Created at successful login, destroyed at logout or window close.
/// The handle is shared serially, one logical caller at a time.
pub struct Session {
    pub username: String,
    pub role: Role,
    pub source: Box<dyn DataSource>,
}

impl Session {
    pub fn new(username: impl Into<String>, role: Role, source: Box<dyn DataSource>) -> Self {
        Session {
            username: username.into(),
            role,
            source,
        }
    }

    /// Releases the connection. Best-effort: the caller logs failures.
    pub async fn close(&self) -> Result<(), access::AccessError> {
        self.source.close().await
    }
}
