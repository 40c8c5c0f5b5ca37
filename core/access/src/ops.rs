//! FILENAME: core/access/src/ops.rs
// PURPOSE: The six trigger operations a browser button can invoke.

use serde::{Deserialize, Serialize};

use crate::table::SourceTable;

/// What a trigger operation does with its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationKind {
    /// Replaces the browser grid with the returned rows.
    Rows,
    /// Shows an integer in a dismissible dialog; the grid is untouched.
    Count,
}

/// One of the six fixed operations. Each browser button invokes exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    CountIn450a,
    NamesIn450b,
    CountIn450c,
    FetchIn450a,
    FetchIn450b,
    FetchIn450c,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::CountIn450a,
        Operation::NamesIn450b,
        Operation::CountIn450c,
        Operation::FetchIn450a,
        Operation::FetchIn450b,
        Operation::FetchIn450c,
    ];

    /// The table this operation reads from.
    pub fn table(self) -> SourceTable {
        match self {
            Operation::CountIn450a | Operation::FetchIn450a => SourceTable::In450a,
            Operation::NamesIn450b | Operation::FetchIn450b => SourceTable::In450b,
            Operation::CountIn450c | Operation::FetchIn450c => SourceTable::In450c,
        }
    }

    pub fn kind(self) -> OperationKind {
        match self {
            Operation::CountIn450a | Operation::CountIn450c => OperationKind::Count,
            Operation::NamesIn450b
            | Operation::FetchIn450a
            | Operation::FetchIn450b
            | Operation::FetchIn450c => OperationKind::Rows,
        }
    }

    /// Button caption shown on the browser screen.
    pub fn label(self) -> &'static str {
        match self {
            Operation::CountIn450a => "Show IN450a Row Count",
            Operation::NamesIn450b => "Show IN450b Names",
            Operation::CountIn450c => "Show IN450c Count",
            Operation::FetchIn450a => "Show All Data for in450a",
            Operation::FetchIn450b => "Show All Data for in450b",
            Operation::FetchIn450c => "Show All Data for in450c",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_never_touch_the_grid() {
        assert_eq!(Operation::CountIn450a.kind(), OperationKind::Count);
        assert_eq!(Operation::CountIn450c.kind(), OperationKind::Count);
        assert_eq!(Operation::NamesIn450b.kind(), OperationKind::Rows);
    }

    #[test]
    fn operations_read_their_own_table() {
        assert_eq!(Operation::FetchIn450b.table(), SourceTable::In450b);
        assert_eq!(Operation::CountIn450c.table(), SourceTable::In450c);
    }

    #[test]
    fn all_lists_every_operation_with_a_distinct_label() {
        let labels: std::collections::HashSet<&str> =
            Operation::ALL.iter().map(|op| op.label()).collect();
        assert_eq!(labels.len(), Operation::ALL.len());
    }

    #[test]
    fn every_table_has_a_fetch_and_a_count_or_names_trigger() {
        for table in SourceTable::ALL {
            let ops: Vec<Operation> = Operation::ALL
                .into_iter()
                .filter(|op| op.table() == table)
                .collect();
            assert_eq!(ops.len(), 2);
            assert!(ops.iter().any(|op| op.kind() == OperationKind::Rows));
        }
    }
}
