use serde::{Deserialize, Serialize};

/// Severity of a notification toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// An ephemeral notification. Toasts live in the notifier's queue until they
/// auto-expire (oldest first) or are dismissed explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: String,
    pub severity: Severity,
    pub message: String,
}
