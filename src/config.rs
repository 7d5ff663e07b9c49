//! Launch Settings
//!
//! Pipeline metadata used to build the launch payload. A deployment can
//! point at a different pipeline revision or config overlay through a YAML
//! settings file; without one, the defaults match the production
//! wf-human-variation deployment on NCI Gadi.

use std::fs;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::SeqeraError;

/// Base URL of the Seqera Platform API.
pub const DEFAULT_API_BASE: &str = "https://seqera.services.biocommons.org.au/api";

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_pipeline() -> String {
    "file:/scratch/ma77/workflows/wf-human-variation/2.6.0/wf-human-variation.git".to_string()
}

fn default_config_profiles() -> Vec<String> {
    vec!["singularity".to_string()]
}

fn default_config_text() -> String {
    "includeConfig \"/scratch/ma77/workflows/wf-human-variation/2.6.0/config/nci_gadi.config\""
        .to_string()
}

fn default_pre_run_script() -> String {
    "module load nextflow/24.04.4; \nexport NXF_SINGULARITY_CACHEDIR=/scratch/ma77/workflows/wf-human-variation/2.6.0/images"
        .to_string()
}

/// Fixed pipeline metadata combined into every launch payload.
///
/// Every field has a default matching the production deployment, so a
/// settings file only needs to list the fields it overrides.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LaunchSettings {
    /// Base URL of the Seqera API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Pipeline source reference passed to the launch endpoint.
    #[serde(default = "default_pipeline")]
    pub pipeline: String,

    /// Nextflow config profiles to activate.
    #[serde(default = "default_config_profiles")]
    pub config_profiles: Vec<String>,

    /// Inline Nextflow configuration overlay.
    #[serde(default = "default_config_text")]
    pub config_text: String,

    /// Shell script executed on the compute environment before the run.
    #[serde(default = "default_pre_run_script")]
    pub pre_run_script: String,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            pipeline: default_pipeline(),
            config_profiles: default_config_profiles(),
            config_text: default_config_text(),
            pre_run_script: default_pre_run_script(),
        }
    }
}

impl LaunchSettings {
    /// Loads settings from a YAML overlay file.
    ///
    /// Fields absent from the file keep their defaults.
    pub fn load(path: &str) -> Result<Self, SeqeraError> {
        let content = fs::read_to_string(path).map_err(|e| SeqeraError::Settings {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        let settings: LaunchSettings =
            serde_yaml::from_str(&content).map_err(|e| SeqeraError::Settings {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        info!("Loaded launch settings from: {}", path);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_base() {
        let settings = LaunchSettings::default();
        assert_eq!(settings.api_base, "https://seqera.services.biocommons.org.au/api");
    }

    #[test]
    fn test_default_pipeline_reference() {
        let settings = LaunchSettings::default();
        assert_eq!(
            settings.pipeline,
            "file:/scratch/ma77/workflows/wf-human-variation/2.6.0/wf-human-variation.git"
        );
    }

    #[test]
    fn test_default_profiles_and_config() {
        let settings = LaunchSettings::default();
        assert_eq!(settings.config_profiles, vec!["singularity".to_string()]);
        assert!(settings.config_text.starts_with("includeConfig"));
        assert!(settings.pre_run_script.contains("nextflow/24.04.4"));
    }

    #[test]
    fn test_load_partial_overlay_keeps_defaults() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pipeline: https://github.com/example/pipeline").unwrap();

        let settings = LaunchSettings::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings.pipeline, "https://github.com/example/pipeline");
        // Untouched fields fall back to defaults
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        assert_eq!(settings.config_profiles, vec!["singularity".to_string()]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = LaunchSettings::load("/nonexistent/settings.yaml");
        assert!(matches!(result, Err(SeqeraError::Settings { .. })));
    }

    #[test]
    fn test_load_malformed_yaml() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "config_profiles: [[[").unwrap();

        let result = LaunchSettings::load(file.path().to_str().unwrap());
        assert!(matches!(result, Err(SeqeraError::Settings { .. })));
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let settings = LaunchSettings::default();
        let yaml = serde_yaml::to_string(&settings).unwrap();
        let loaded: LaunchSettings = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(loaded.pipeline, settings.pipeline);
        assert_eq!(loaded.pre_run_script, settings.pre_run_script);
    }
}
