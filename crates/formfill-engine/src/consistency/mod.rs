//! Per-pass consistency state.
//!
//! One value of this lives for exactly one fill pass and is threaded by
//! mutable reference through the resolver. It is what lets confirmation
//! fields repeat an earlier value, emails reuse generated names, and end
//! dates land after start dates. Never a process-wide singleton, never
//! persisted.

use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct ConsistencyState {
    /// Last generated free-text or email value, for confirm fields.
    pub previous_value: Option<String>,
    /// Last generated password, for confirm fields.
    pub previous_password: Option<String>,
    /// Last generated username, reusable by email assembly.
    pub previous_username: Option<String>,
    pub previous_first_name: Option<String>,
    pub previous_last_name: Option<String>,
    /// Start date of the currently open start/end pair, if any.
    pub previous_date: Option<NaiveDate>,
}

impl ConsistencyState {
    pub fn new() -> Self {
        Self::default()
    }
}
