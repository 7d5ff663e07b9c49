//! Seqera HTTP Client
//!
//! Thin synchronous client for the two endpoints this crate uses:
//! `POST /workflow/launch` and `GET /workflow/{id}`. Every request carries
//! the same header set (JSON accept/content types, bearer authorization,
//! and the `Accept-Version` API version marker).
//!
//! The client performs no retries; any transport failure or non-success
//! HTTP status is surfaced to the caller immediately.

use log::debug;
use reqwest::blocking::RequestBuilder;
use serde::Serialize;
use serde_json::Value;

use crate::error::SeqeraError;

/// API version sent in the `Accept-Version` header.
const API_VERSION: &str = "1";

/// Synchronous client bound to one API base URL and one access token.
#[derive(Debug)]
pub struct SeqeraClient {
    base_url: String,
    token: String,
    http: reqwest::blocking::Client,
}

impl SeqeraClient {
    /// Creates a client for the given API base URL and bearer token.
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Returns the API base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits a launch payload and returns the new workflow identifier.
    pub fn launch<T: Serialize>(&self, payload: &T) -> Result<String, SeqeraError> {
        let url = format!("{}/workflow/launch", self.base_url);
        debug!("POST {}", url);

        let request = self.with_headers(self.http.post(&url)).json(payload);
        let response = self.execute(request, &url)?;

        response
            .get("workflowId")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(SeqeraError::MissingField("workflowId"))
    }

    /// Fetches the current status label for a workflow.
    pub fn workflow_status(&self, workflow_id: &str) -> Result<String, SeqeraError> {
        let url = format!("{}/workflow/{}", self.base_url, workflow_id);
        debug!("GET {}", url);

        let request = self.with_headers(self.http.get(&url));
        let response = self.execute(request, &url)?;

        response
            .get("workflow")
            .and_then(|w| w.get("status"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(SeqeraError::MissingField("status"))
    }

    /// Attaches the shared header set to a request.
    fn with_headers(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("Accept-Version", API_VERSION)
            .bearer_auth(&self.token)
    }

    /// Sends a request and decodes the JSON body of a successful response.
    fn execute(&self, request: RequestBuilder, url: &str) -> Result<Value, SeqeraError> {
        let response = request.send().map_err(|e| SeqeraError::Request {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status();
        let body = response.text().map_err(|e| SeqeraError::Request {
            url: url.to_string(),
            source: e,
        })?;

        if !status.is_success() {
            return Err(SeqeraError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| SeqeraError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
