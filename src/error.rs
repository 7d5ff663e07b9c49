//! Error Types
//!
//! All failure modes for launching and monitoring workflows. Every error
//! is fatal to the invocation that raised it; there is no retry or
//! recovery anywhere in the crate.

use thiserror::Error;

/// Errors produced by the launch and monitor operations.
#[derive(Debug, Error)]
pub enum SeqeraError {
    /// No API token was supplied and the fallback environment variable
    /// is unset or empty.
    #[error("Seqera API access token is required but not provided or found in {0} environment variable")]
    MissingToken(&'static str),

    /// The parameter file could not be read.
    #[error("failed to read params file '{path}': {source}")]
    ParamsIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The parameter file is not a valid YAML key-value document.
    #[error("failed to parse params file '{path}': {source}")]
    ParamsFormat {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The settings overlay file could not be read or parsed.
    #[error("failed to load settings file '{path}': {message}")]
    Settings { path: String, message: String },

    /// The HTTP request itself failed (connection, TLS, serialization).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success HTTP status.
    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    /// A successful response carried a body that is not valid JSON.
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    /// An expected field was absent from an otherwise successful response.
    #[error("field '{0}' not found in the API response")]
    MissingField(&'static str),

    /// The workflow reached a terminal non-success status.
    #[error("workflow finished with status '{0}'")]
    WorkflowFailed(String),

    /// The optional monitoring deadline elapsed before the workflow finished.
    #[error("workflow did not reach a terminal state within {0} seconds")]
    DeadlineExceeded(u64),
}
