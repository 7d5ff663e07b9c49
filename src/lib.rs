//! SeqLaunch - Pipeline Launch and Monitoring for the Seqera Platform
//!
//! Thin glue between a compute-delegation framework and the Seqera
//! Platform REST API: one operation submits a genomics pipeline run, the
//! other polls its status until it reaches a terminal state. Both are
//! stateless, synchronous, and independent; composing them is the
//! caller's job.
//!
//! # Architecture
//!
//! - [`api`]: authentication and the synchronous HTTP client
//! - [`config`]: externalized pipeline metadata with production defaults
//! - [`workflow`]: the launch and monitor operations
//! - [`error`]: the crate-wide error taxonomy
//!
//! # Example
//!
//! ```rust,no_run
//! use seqlaunch::api::{resolve_token, SeqeraClient};
//! use seqlaunch::config::LaunchSettings;
//! use seqlaunch::workflow::{launch_workflow, monitor_workflow, MonitorOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = LaunchSettings::default();
//!     let client = SeqeraClient::new(&settings.api_base, &resolve_token(None)?);
//!
//!     let workflow_id = launch_workflow(
//!         &client,
//!         &settings,
//!         "/mnt/store",
//!         "/runs/s1/params.yaml",
//!         "/runs/s1/work",
//!         "5xAbCdEfGh",
//!     )?;
//!
//!     monitor_workflow(&client, &workflow_id, &MonitorOptions::default())?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod workflow;

// Re-export commonly used types
pub use api::{resolve_token, SeqeraClient};
pub use config::LaunchSettings;
pub use error::SeqeraError;
pub use workflow::{launch_workflow, monitor_workflow, MonitorOptions, WorkflowStatus};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "SeqLaunch";
