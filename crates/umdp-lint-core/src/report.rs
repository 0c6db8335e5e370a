//! Result types for one checked unit.

use serde::{Deserialize, Serialize};

/// One failed check within a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedCheck {
    /// Description of the rule that failed.
    pub name: String,
    /// Joined diagnostic keys recorded during the check, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Failure count returned by the rule.
    pub count: usize,
}

impl FailedCheck {
    /// Formats the check the way the report prints it: description,
    /// followed by the diagnostic keys when present.
    #[must_use]
    pub fn headline(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{}: {}", self.name, detail),
            None => self.name.clone(),
        }
    }
}

/// Aggregated outcome of running a rule table over one unit.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct UnitReport {
    /// Total failures across all rules.
    pub failures: usize,
    /// The checks that reported at least one failure.
    pub failed: Vec<FailedCheck>,
}

impl UnitReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when every check passed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures == 0
    }

    /// Folds another report into this one.
    pub fn extend(&mut self, other: Self) {
        self.failures += other.failures;
        self.failed.extend(other.failed);
    }
}
