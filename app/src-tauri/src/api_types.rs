//! FILENAME: app/src-tauri/src/api_types.rs
// PURPOSE: Shared type definitions for Tauri API communication.
// CONTEXT: All structs use camelCase serialization for JavaScript interoperability.

use access::{Operation, OperationKind, Role};
use serde::{Deserialize, Serialize};

/// One trigger button on the browser screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonData {
    pub op: Operation,
    pub kind: OperationKind,
    pub label: String,
}

impl From<Operation> for ButtonData {
    fn from(op: Operation) -> Self {
        ButtonData {
            op,
            kind: op.kind(),
            label: op.label().to_string(),
        }
    }
}

/// Returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub username: String,
    pub role: Role,
    /// Dialog text shown after login.
    pub greeting: String,
    /// Buttons visible for this role, in layout order.
    pub buttons: Vec<ButtonData>,
}

/// The tabular display: headers plus rows of display text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableViewData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Result of a count operation, ready for a dismissible dialog.
/// The grid is not touched by these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountData {
    pub count: i64,
    pub title: String,
    pub message: String,
}
