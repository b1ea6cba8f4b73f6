//! User domain model.
//!
//! # Invariants
//! - New users start on `Plan::Regular` with an empty watch history.
//! - `watched` keeps playback order and may contain duplicates.

use crate::model::tier::Plan;
use serde::{Deserialize, Serialize};

/// Registered platform user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, compared exactly.
    pub email: String,
    /// Display name used in plan-change messages.
    pub name: String,
    pub plan: Plan,
    /// Series names in playback order.
    pub watched: Vec<String>,
}

impl User {
    /// Creates a regular-plan user with no watch history.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            plan: Plan::default(),
            watched: Vec::new(),
        }
    }

    /// Returns whether `series_name` was played at least once.
    pub fn has_watched(&self, series_name: &str) -> bool {
        self.watched.iter().any(|name| name == series_name)
    }
}
