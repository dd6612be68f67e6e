//! Aggregate statistics over a user list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{User, UserRole};

/// Counts by activity, role and department.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub by_role: BTreeMap<UserRole, usize>,
    pub by_department: BTreeMap<String, usize>,
}

/// Computes [`UserStats`] in a single pass.
pub fn user_stats(users: &[User]) -> UserStats {
    users.iter().fold(
        UserStats {
            total: users.len(),
            ..Default::default()
        },
        |mut stats, user| {
            if user.is_active {
                stats.active += 1;
            } else {
                stats.inactive += 1;
            }
            *stats.by_role.entry(user.role).or_insert(0) += 1;
            *stats
                .by_department
                .entry(user.department.clone())
                .or_insert(0) += 1;
            stats
        },
    )
}
