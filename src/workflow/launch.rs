//! Workflow Launch
//!
//! Builds the launch payload from a parameter file and the configured
//! pipeline metadata, submits it, and returns the workflow identifier.

use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

use crate::api::SeqeraClient;
use crate::config::LaunchSettings;
use crate::error::SeqeraError;
use crate::workflow::params;

/// Body of the `launch` field in the submission payload.
///
/// Field names are camelCase on the wire.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    pub compute_env_id: String,
    pub pipeline: String,
    pub work_dir: String,
    pub config_profiles: Vec<String>,
    pub config_text: String,
    pub params_text: String,
    pub pre_run_script: String,
}

/// Top-level submission payload.
#[derive(Serialize, Clone, Debug)]
pub struct LaunchPayload {
    pub launch: LaunchRequest,
}

/// Submits a pipeline run and returns its workflow identifier.
///
/// `params_file_relative` and `work_directory_relative` are resolved by
/// plain string concatenation with `globus_root`; no path normalization
/// is performed, so relatives are expected to start with a separator.
///
/// # Example
///
/// ```rust,no_run
/// use seqlaunch::api::{resolve_token, SeqeraClient};
/// use seqlaunch::config::LaunchSettings;
/// use seqlaunch::workflow::launch_workflow;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let settings = LaunchSettings::default();
///     let client = SeqeraClient::new(&settings.api_base, &resolve_token(None)?);
///
///     let workflow_id = launch_workflow(
///         &client,
///         &settings,
///         "/mnt/store",
///         "/runs/s1/params.yaml",
///         "/runs/s1/work",
///         "5xAbCdEfGh",
///     )?;
///     println!("Launched workflow {}", workflow_id);
///     Ok(())
/// }
/// ```
pub fn launch_workflow(
    client: &SeqeraClient,
    settings: &LaunchSettings,
    globus_root: &str,
    params_file_relative: &str,
    work_directory_relative: &str,
    compute_env_id: &str,
) -> Result<String, SeqeraError> {
    let params_file = format!("{}{}", globus_root, params_file_relative);
    let work_directory = format!("{}{}", globus_root, work_directory_relative);

    info!("Loading pipeline parameters: {}", params_file);

    let raw_params = params::load_params(&params_file)?;
    let resolved = params::resolve_placeholders(&raw_params, globus_root);
    let params_text = Value::Object(resolved).to_string();

    debug!("Resolved paramsText: {}", params_text);

    let payload = LaunchPayload {
        launch: LaunchRequest {
            compute_env_id: compute_env_id.to_string(),
            pipeline: settings.pipeline.clone(),
            work_dir: work_directory,
            config_profiles: settings.config_profiles.clone(),
            config_text: settings.config_text.clone(),
            params_text,
            pre_run_script: settings.pre_run_script.clone(),
        },
    };

    info!(
        "Submitting launch request: pipeline={}, computeEnvId={}",
        settings.pipeline, compute_env_id
    );

    let workflow_id = client.launch(&payload)?;
    info!("Workflow launched: {}", workflow_id);

    Ok(workflow_id)
}
