//! FILENAME: app/src-tauri/src/commands/auth.rs
// PURPOSE: The credential gate: open and release database sessions.

use access::{ConnectionConfig, DataSource, PostgresSource, Role};
use tauri::State;

use crate::api_types::{ButtonData, LoginData};
use crate::session::Session;
use crate::{log_error, log_info, AppState};

/// Shown when a login is submitted with an empty field.
pub const VALIDATION_ERROR: &str = "All fields are required.";

/// Validates the submitted credentials. Submissions with an empty username
/// or an empty password are rejected before any connection attempt.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.is_empty() || password.is_empty() {
        return Err(VALIDATION_ERROR.to_string());
    }
    Ok(())
}

/// Derives the role, installs the session and resets the grid.
/// Shared by the real login path and the test harness.
pub async fn install_session(
    state: &AppState,
    username: &str,
    source: Box<dyn DataSource>,
) -> LoginData {
    let role = Role::from_username(username);
    let buttons: Vec<ButtonData> = role
        .operations()
        .iter()
        .copied()
        .map(ButtonData::from)
        .collect();

    *state.session.lock().await = Some(Session::new(username, role, source));
    state.view.lock().unwrap().clear();

    log_info!("AUTH", "session opened for '{}' role={:?}", username, role);

    LoginData {
        username: username.to_string(),
        role,
        greeting: format!("You are logged in as {}.", username),
        buttons,
    }
}

pub async fn login_internal(
    state: &AppState,
    username: &str,
    password: &str,
) -> Result<LoginData, String> {
    validate_credentials(username, password)?;

    let config = ConnectionConfig::from_env();
    let source = PostgresSource::connect(&config, username, password)
        .await
        .map_err(|e| {
            log_error!("AUTH", "Error connecting to the database: {}", e);
            e.to_string()
        })?;

    Ok(install_session(state, username, Box::new(source)).await)
}

/// Releases the session, closing cursor and connection. Failures are
/// logged and swallowed: release is best-effort on every exit path.
pub async fn logout_internal(state: &AppState) {
    let session = state.session.lock().await.take();
    if let Some(session) = session {
        if let Err(e) = session.close().await {
            log_error!("AUTH", "Error closing the connection: {}", e);
        } else {
            log_info!("AUTH", "session closed for '{}'", session.username);
        }
    }
    state.view.lock().unwrap().clear();
}

/// Attempt a login with the credentials from the form. On failure the
/// raw underlying error text is returned for the error dialog and the
/// login screen stays up.
#[tauri::command]
pub async fn login(
    state: State<'_, AppState>,
    username: String,
    password: String,
) -> Result<LoginData, String> {
    login_internal(&state, &username, &password).await
}

#[tauri::command]
pub async fn logout(state: State<'_, AppState>) -> Result<(), String> {
    logout_internal(&state).await;
    Ok(())
}
