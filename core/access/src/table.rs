//! FILENAME: core/access/src/table.rs
// PURPOSE: Metadata for the three fixed source tables.

use serde::{Deserialize, Serialize};

/// One of the three tables the application is allowed to read.
///
/// The table set is fixed: rows are created and destroyed entirely by the
/// external database, never by this application. Each variant carries the
/// literal table identifier (also the role token matched against usernames)
/// and the display headers for the browser grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTable {
    In450a,
    In450b,
    In450c,
}

impl SourceTable {
    pub const ALL: [SourceTable; 3] = [
        SourceTable::In450a,
        SourceTable::In450b,
        SourceTable::In450c,
    ];

    /// The table identifier as it appears in the database schema.
    pub fn name(self) -> &'static str {
        match self {
            SourceTable::In450a => "in450a",
            SourceTable::In450b => "in450b",
            SourceTable::In450c => "in450c",
        }
    }

    /// Column headers shown in the browser grid for a full fetch.
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            SourceTable::In450a => {
                &["Time", "Source", "Destination", "Protocol", "Length", "Info"]
            }
            SourceTable::In450b => {
                &["First Name", "Last Name", "Email", "Source IP", "Destination IP"]
            }
            SourceTable::In450c => &[
                "App ID",
                "App Name",
                "App Version",
                "Source IP",
                "Destination IP",
                "DigSig",
            ],
        }
    }

    /// Number of columns a full fetch of this table is expected to return.
    pub fn column_count(self) -> usize {
        self.headers().len()
    }
}

impl std::fmt::Display for SourceTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
