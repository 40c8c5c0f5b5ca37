//! FILENAME: core/access/src/role.rs
// PURPOSE: Role model derived once at login from the username.

use serde::{Deserialize, Serialize};

use crate::ops::Operation;

/// The viewing role of a logged-in user.
///
/// Resolved exactly once, at login, by substring-matching the username
/// against the table identifiers. The match order is significant: a
/// username containing `in450a` is Full even if it also contains the
/// other tokens. A username containing none of the tokens gets no
/// operations at all; there is no fallback role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    /// May view all three tables.
    Full,
    /// May view in450b only.
    In450bOnly,
    /// May view in450c only.
    In450cOnly,
    /// No table access.
    Unassigned,
}

impl Role {
    pub fn from_username(username: &str) -> Role {
        if username.contains("in450a") {
            Role::Full
        } else if username.contains("in450b") {
            Role::In450bOnly
        } else if username.contains("in450c") {
            Role::In450cOnly
        } else {
            Role::Unassigned
        }
    }

    /// Operations this role may trigger, in the order their buttons are
    /// laid out on the browser screen.
    pub fn operations(self) -> &'static [Operation] {
        match self {
            Role::Full => &[
                Operation::CountIn450a,
                Operation::NamesIn450b,
                Operation::CountIn450c,
                Operation::FetchIn450a,
                Operation::FetchIn450b,
                Operation::FetchIn450c,
            ],
            Role::In450bOnly => &[Operation::NamesIn450b, Operation::FetchIn450b],
            Role::In450cOnly => &[Operation::CountIn450c, Operation::FetchIn450c],
            Role::Unassigned => &[],
        }
    }

    pub fn allows(self, op: Operation) -> bool {
        self.operations().contains(&op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_is_derived_by_substring_match() {
        assert_eq!(Role::from_username("in450a_admin"), Role::Full);
        assert_eq!(Role::from_username("user_in450b"), Role::In450bOnly);
        assert_eq!(Role::from_username("xin450cx"), Role::In450cOnly);
        assert_eq!(Role::from_username("alice"), Role::Unassigned);
    }

    #[test]
    fn in450a_token_wins_over_the_others() {
        assert_eq!(Role::from_username("in450b_in450a"), Role::Full);
        assert_eq!(Role::from_username("in450c_in450b"), Role::In450bOnly);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(Role::from_username("IN450A"), Role::Unassigned);
    }

    #[test]
    fn operation_counts_per_role() {
        assert_eq!(Role::Full.operations().len(), 6);
        assert_eq!(Role::In450bOnly.operations().len(), 2);
        assert_eq!(Role::In450cOnly.operations().len(), 2);
        assert!(Role::Unassigned.operations().is_empty());
    }

    #[test]
    fn restricted_roles_cannot_trigger_foreign_operations() {
        assert!(!Role::In450bOnly.allows(Operation::FetchIn450a));
        assert!(!Role::In450cOnly.allows(Operation::NamesIn450b));
        assert!(Role::Full.allows(Operation::FetchIn450c));
    }
}
