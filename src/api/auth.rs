//! Credential Resolution
//!
//! Both operations authenticate with a personal access token sent as a
//! bearer credential. An explicitly supplied token wins; otherwise the
//! token is read from the environment. An empty string counts as absent.

use std::env;

use log::debug;

use crate::error::SeqeraError;

/// Environment variable consulted when no explicit token is supplied.
pub const TOKEN_ENV_VAR: &str = "SEQERA_API_ACCESS_TOKEN";

/// Resolves the API access token from an optional explicit value or the
/// `SEQERA_API_ACCESS_TOKEN` environment variable.
pub fn resolve_token(explicit: Option<&str>) -> Result<String, SeqeraError> {
    resolve_token_from(explicit, TOKEN_ENV_VAR)
}

/// Resolution against a caller-chosen environment variable.
///
/// Split out so tests can use throwaway variable names without touching
/// the process-wide `SEQERA_API_ACCESS_TOKEN`.
pub(crate) fn resolve_token_from(
    explicit: Option<&str>,
    env_var: &'static str,
) -> Result<String, SeqeraError> {
    if let Some(token) = explicit {
        if !token.is_empty() {
            debug!("Using explicitly supplied API token");
            return Ok(token.to_string());
        }
    }

    match env::var(env_var) {
        Ok(token) if !token.is_empty() => {
            debug!("Using API token from {}", env_var);
            Ok(token)
        }
        _ => Err(SeqeraError::MissingToken(TOKEN_ENV_VAR)),
    }
}
