//! Workflow Status Labels
//!
//! Classification of the status strings reported by the workflow status
//! endpoint. Only four labels are recognized as terminal; anything else
//! (SUBMITTED, RUNNING, labels added by future API versions) is treated
//! as still in progress.

use std::fmt;

/// Classified workflow status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkflowStatus {
    /// Terminal: the run completed successfully.
    Succeeded,
    /// Terminal: the run failed.
    Failed,
    /// Terminal: the run was cancelled.
    Cancelled,
    /// Terminal: the platform lost track of the run.
    Unknown,
    /// Any other label; treated as in progress.
    InProgress(String),
}

impl WorkflowStatus {
    /// Classifies a raw status label from the API.
    pub fn classify(label: &str) -> Self {
        match label {
            "SUCCEEDED" => Self::Succeeded,
            "FAILED" => Self::Failed,
            "CANCELLED" => Self::Cancelled,
            "UNKNOWN" => Self::Unknown,
            other => Self::InProgress(other.to_string()),
        }
    }

    /// True for any status that stops the polling loop.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress(_))
    }

    /// True for terminal statuses other than success.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed | Self::Cancelled | Self::Unknown)
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => write!(f, "SUCCEEDED"),
            Self::Failed => write!(f, "FAILED"),
            Self::Cancelled => write!(f, "CANCELLED"),
            Self::Unknown => write!(f, "UNKNOWN"),
            Self::InProgress(label) => write!(f, "{}", label),
        }
    }
}
