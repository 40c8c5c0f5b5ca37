//! FILENAME: app/src-tauri/src/view.rs
// PURPOSE: State of the tabular display.

use crate::api_types::TableViewData;

/// The browser grid. Two states: rendering nothing (no columns, no rows)
/// or rendering the last fetched result set. Transitions happen only when
/// a row-returning operation completes; count operations never touch it.
#[derive(Debug, Default)]
pub struct BrowserView {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl BrowserView {
    pub fn new() -> Self {
        BrowserView::default()
    }

    /// Replaces the displayed columns and rows wholesale. Prior rows are
    /// cleared first so nothing stale survives a shorter result set.
    pub fn display(&mut self, columns: Vec<String>, rows: Vec<Vec<String>>) {
        self.rows.clear();
        self.columns = columns;
        self.rows = rows;
    }

    /// Back to the initial empty state (used at login/logout).
    pub fn clear(&mut self) {
        self.columns.clear();
        self.rows.clear();
    }

    pub fn is_rendering(&self) -> bool {
        !self.columns.is_empty()
    }

    /// The selected row's values joined by newlines, for the info dialog.
    pub fn row_detail(&self, index: usize) -> Option<String> {
        self.rows.get(index).map(|row| row.join("\n"))
    }

    pub fn snapshot(&self) -> TableViewData {
        TableViewData {
            columns: self.columns.clone(),
            rows: self.rows.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<Vec<String>> {
        vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), "d".to_string()],
        ]
    }

    #[test]
    fn starts_rendering_nothing() {
        let view = BrowserView::new();
        assert!(!view.is_rendering());
        assert!(view.snapshot().columns.is_empty());
        assert!(view.row_detail(0).is_none());
    }

    #[test]
    fn display_replaces_wholesale() {
        let mut view = BrowserView::new();
        view.display(vec!["X".into(), "Y".into()], sample_rows());
        view.display(vec!["Z".into()], vec![vec!["only".to_string()]]);

        let snap = view.snapshot();
        assert_eq!(snap.columns, vec!["Z"]);
        assert_eq!(snap.rows.len(), 1);
    }

    #[test]
    fn row_detail_joins_with_newlines() {
        let mut view = BrowserView::new();
        view.display(vec!["X".into(), "Y".into()], sample_rows());
        assert_eq!(view.row_detail(1).as_deref(), Some("c\nd"));
        assert!(view.row_detail(2).is_none());
    }

    #[test]
    fn headers_can_render_with_zero_rows() {
        let mut view = BrowserView::new();
        view.display(vec!["Time".into()], Vec::new());
        assert!(view.is_rendering());
        assert!(view.snapshot().rows.is_empty());
    }
}
