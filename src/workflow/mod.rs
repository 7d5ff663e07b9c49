//! Workflow Operations
//!
//! The two operations this crate exposes, plus their supporting pieces.
//!
//! # Structure
//!
//! - [`params`]: parameter file loading and placeholder resolution
//! - [`launch`]: payload construction and run submission
//! - [`status`]: status label classification
//! - [`monitor`]: blocking status poll loop

pub mod launch;
pub mod monitor;
pub mod params;
pub mod status;

pub use launch::{launch_workflow, LaunchPayload, LaunchRequest};
pub use monitor::{monitor_workflow, MonitorOptions, DEFAULT_POLL_INTERVAL};
pub use params::{load_params, resolve_placeholders, GLOBUS_ROOT_TOKEN};
pub use status::WorkflowStatus;
