use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity grade for a vital sign, ordered `Normal < Warning < Critical`.
///
/// The derived ordering is what makes worst-of folding a plain `max`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum VitalStatus {
    #[default]
    Normal,
    Warning,
    Critical,
}

impl VitalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VitalStatus::Normal => "normal",
            VitalStatus::Warning => "warning",
            VitalStatus::Critical => "critical",
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, VitalStatus::Normal)
    }
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
