//! FILENAME: app/src-tauri/src/commands/styles.rs
// PURPOSE: Declarative widget styling, applied by the frontend at view
// construction. No toolkit style-class inheritance: the whole theme is a
// widget-role -> style map with per-state overrides.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Visual properties for one widget role, all optional so roles only
/// carry what they override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relief: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// State-variant overrides, e.g. "active" for hover.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub states: BTreeMap<String, WidgetStyle>,
}

/// Widget-role -> style. Keys: window, label, entry, button, table,
/// table-heading.
pub type StyleSheet = BTreeMap<String, WidgetStyle>;

/// The application theme: dark blue and orange.
pub fn style_sheet() -> StyleSheet {
    let mut sheet = StyleSheet::new();

    sheet.insert(
        "window".to_string(),
        WidgetStyle {
            background: Some("darkblue".to_string()),
            ..WidgetStyle::default()
        },
    );

    sheet.insert(
        "label".to_string(),
        WidgetStyle {
            background: Some("darkblue".to_string()),
            foreground: Some("orange".to_string()),
            font: Some("16px Roman".to_string()),
            relief: Some("raised".to_string()),
            padding: Some(5),
            border: Some(5),
            ..WidgetStyle::default()
        },
    );

    sheet.insert(
        "entry".to_string(),
        WidgetStyle {
            foreground: Some("maroon".to_string()),
            font: Some("14px Courier".to_string()),
            ..WidgetStyle::default()
        },
    );

    let mut button_states = BTreeMap::new();
    button_states.insert(
        "active".to_string(),
        WidgetStyle {
            background: Some("darkblue".to_string()),
            foreground: Some("orange".to_string()),
            border_color: Some("orange".to_string()),
            font: Some("italic 14px Courier".to_string()),
            ..WidgetStyle::default()
        },
    );
    sheet.insert(
        "button".to_string(),
        WidgetStyle {
            background: Some("orange".to_string()),
            foreground: Some("#002060".to_string()),
            border_color: Some("#002060".to_string()),
            font: Some("bold 14px Courier".to_string()),
            relief: Some("raised".to_string()),
            states: button_states,
            ..WidgetStyle::default()
        },
    );

    sheet.insert(
        "table".to_string(),
        WidgetStyle {
            background: Some("orange".to_string()),
            foreground: Some("darkblue".to_string()),
            font: Some("12px Arial".to_string()),
            relief: Some("groove".to_string()),
            border: Some(5),
            ..WidgetStyle::default()
        },
    );

    sheet.insert(
        "table-heading".to_string(),
        WidgetStyle {
            background: Some("darkblue".to_string()),
            foreground: Some("orange".to_string()),
            font: Some("bold 15px Times".to_string()),
            ..WidgetStyle::default()
        },
    );

    sheet
}

/// Hand the theme to the frontend once, at view construction.
#[tauri::command]
pub fn get_style_sheet() -> StyleSheet {
    style_sheet()
}
