use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Role memberships of a recognized guild member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Membership {
    pub role_ids: BTreeSet<String>,
}

impl Membership {
    pub fn new<I, S>(role_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            role_ids: role_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether any of `roles` is held.
    #[must_use]
    pub fn holds_any(&self, roles: &BTreeSet<String>) -> bool {
        !self.role_ids.is_disjoint(roles)
    }
}

/// The identity a gate is evaluated for.
///
/// `membership` is `None` when the user is not a recognized member (for
/// example, a direct message), in which case only the user id counts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Requester {
    pub user_id: String,
    pub membership: Option<Membership>,
}

impl Requester {
    pub fn member<I, S>(user_id: impl Into<String>, role_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_id: user_id.into(),
            membership: Some(Membership::new(role_ids)),
        }
    }

    pub fn guest(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            membership: None,
        }
    }

    pub(crate) fn holds_any(&self, roles: &BTreeSet<String>) -> bool {
        self.membership
            .as_ref()
            .is_some_and(|membership| membership.holds_any(roles))
    }
}
