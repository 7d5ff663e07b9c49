//! Seqera API Access
//!
//! Authentication and HTTP transport for the Seqera Platform REST API.
//!
//! - [`auth`]: bearer-token resolution (explicit argument or environment)
//! - [`client`]: synchronous HTTP client for the launch and status endpoints

pub mod auth;
pub mod client;

pub use auth::{resolve_token, TOKEN_ENV_VAR};
pub use client::SeqeraClient;
