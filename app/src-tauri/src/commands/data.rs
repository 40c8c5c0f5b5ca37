//! FILENAME: app/src-tauri/src/commands/data.rs
// PURPOSE: Trigger operations: fetch rows into the grid, counts into dialogs.

use access::{Operation, OperationKind, SourceTable};
use tauri::State;

use crate::api_types::{CountData, TableViewData};
use crate::{log_error, log_warn, AppState};

/// The one message users see when a data fetch fails. The underlying
/// error goes to the log only.
pub const FETCH_ERROR: &str = "An error occurred while fetching data. Please check the logs.";

const NO_SESSION: &str = "No open database session.";
const NOT_PERMITTED: &str = "You do not have permission to perform this action.";

fn count_dialog_title(table: SourceTable) -> String {
    match table {
        SourceTable::In450a => "IN450a Row Count".to_string(),
        SourceTable::In450b => "IN450b Row Count".to_string(),
        SourceTable::In450c => "IN450c Row Count".to_string(),
    }
}

/// Runs a row-returning operation and replaces the grid with its result.
pub async fn show_rows_internal(
    state: &AppState,
    op: Operation,
) -> Result<TableViewData, String> {
    if op.kind() != OperationKind::Rows {
        return Err(format!("{} is not a row-returning operation", op.label()));
    }

    let guard = state.session.lock().await;
    let session = guard.as_ref().ok_or(NO_SESSION)?;
    if !session.role.allows(op) {
        log_warn!(
            "DATA",
            "'{}' ({:?}) attempted {:?}",
            session.username,
            session.role,
            op
        );
        return Err(NOT_PERMITTED.to_string());
    }

    let table = op.table();
    let (columns, rows) = match op {
        Operation::NamesIn450b => {
            let names = session.source.contact_names().await.map_err(|e| {
                log_error!("DATA", "Failed to get names from {}: {}", table, e);
                FETCH_ERROR.to_string()
            })?;
            let rows = names
                .into_iter()
                .map(|(first, last)| vec![first, last])
                .collect();
            (vec!["First Name".to_string(), "Last Name".to_string()], rows)
        }
        _ => {
            let rows = session.source.fetch_all(table).await.map_err(|e| {
                log_error!("DATA", "Failed to get data from {}: {}", table, e);
                FETCH_ERROR.to_string()
            })?;
            let columns = table.headers().iter().map(|h| h.to_string()).collect();
            (columns, rows)
        }
    };
    drop(guard);

    let mut view = state.view.lock().unwrap();
    view.display(columns, rows);
    Ok(view.snapshot())
}

/// Runs a count operation. The grid state is left untouched.
pub async fn show_count_internal(state: &AppState, op: Operation) -> Result<CountData, String> {
    if op.kind() != OperationKind::Count {
        return Err(format!("{} is not a count operation", op.label()));
    }

    let guard = state.session.lock().await;
    let session = guard.as_ref().ok_or(NO_SESSION)?;
    if !session.role.allows(op) {
        log_warn!(
            "DATA",
            "'{}' ({:?}) attempted {:?}",
            session.username,
            session.role,
            op
        );
        return Err(NOT_PERMITTED.to_string());
    }

    let table = op.table();
    let count = session.source.row_count(table).await.map_err(|e| {
        log_error!("DATA", "Failed to get row count for {}: {}", table, e);
        FETCH_ERROR.to_string()
    })?;

    Ok(CountData {
        count,
        title: count_dialog_title(table),
        message: format!("Row count: {}", count),
    })
}

#[tauri::command]
pub async fn show_rows(
    state: State<'_, AppState>,
    op: Operation,
) -> Result<TableViewData, String> {
    show_rows_internal(&state, op).await
}

#[tauri::command]
pub async fn show_count(state: State<'_, AppState>, op: Operation) -> Result<CountData, String> {
    show_count_internal(&state, op).await
}

/// The selected row's values joined by newlines, for the info dialog.
#[tauri::command]
pub fn get_row_detail(state: State<AppState>, index: usize) -> Result<String, String> {
    let view = state.view.lock().unwrap();
    view.row_detail(index)
        .ok_or_else(|| format!("No row at index {}", index))
}

/// Current grid contents, for re-rendering.
#[tauri::command]
pub fn get_browser_view(state: State<AppState>) -> TableViewData {
    state.view.lock().unwrap().snapshot()
}
