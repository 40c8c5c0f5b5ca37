//! FILENAME: app/src-tauri/src/lib.rs
// PURPOSE: Main library entry point (Tauri Bridge).
// CONTEXT: One window, one optional session, one grid. Everything the
// frontend does goes through the commands registered here.

use std::sync::Mutex;

use tauri::Manager;
use tokio::sync::Mutex as AsyncMutex;

pub mod api_types;
pub mod commands;
pub mod logging;
pub mod session;
pub mod view;

pub use api_types::{ButtonData, CountData, LoginData, TableViewData};
pub use commands::auth::{
    install_session, login_internal, logout_internal, validate_credentials, VALIDATION_ERROR,
};
pub use commands::data::{show_count_internal, show_rows_internal, FETCH_ERROR};
pub use commands::styles::{style_sheet, StyleSheet, WidgetStyle};
pub use logging::{get_log_path, init_log_file, write_log};
pub use session::Session;
pub use view::BrowserView;

// ============================================================================
// APPLICATION STATE
// ============================================================================

pub struct AppState {
    /// The authenticated session, None while the login screen is up.
    /// Async mutex: the handle is held across query awaits.
    pub session: AsyncMutex<Option<Session>>,
    /// The tabular display.
    pub view: Mutex<BrowserView>,
}

pub fn create_app_state() -> AppState {
    AppState {
        session: AsyncMutex::new(None),
        view: Mutex::new(BrowserView::new()),
    }
}

// ============================================================================
// TAURI ENTRY POINT
// ============================================================================

pub fn run() {
    match init_log_file() {
        Ok(path) => {
            log_info!("SYS", "backend starting, log={}", path.display());
        }
        Err(e) => {
            eprintln!("[LOG_INIT] FAILED: {}", e);
            eprintln!("[LOG_INIT] Continuing with console-only logging");
        }
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(create_app_state())
        .on_window_event(|window, event| {
            // Best-effort connection release when the window goes away.
            if matches!(event, tauri::WindowEvent::Destroyed) {
                let state = window.state::<AppState>();
                tauri::async_runtime::block_on(logout_internal(&state));
            }
        })
        .invoke_handler(tauri::generate_handler![
            // Credential gate
            commands::login,
            commands::logout,
            // Trigger operations
            commands::show_rows,
            commands::show_count,
            commands::get_row_detail,
            commands::get_browser_view,
            // Styling
            commands::get_style_sheet,
            // Logging
            logging::log_frontend,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
