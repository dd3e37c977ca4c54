//! Oracle-subsystem error type.
//!
//! These errors circulate only between the client and
//! [`fetch_route`](crate::fetch_route), which absorbs every one of them
//! into a fallback route.  They are logged, never surfaced.

use std::time::Duration;

use thiserror::Error;

/// Ways a shortest-path request can fail.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("oracle returned status {0}")]
    Status(u16),

    #[error("oracle unreachable: {0}")]
    Unreachable(String),

    #[error("malformed path: {0}")]
    Malformed(String),

    #[error("oracle response carried no usable path")]
    EmptyPath,

    #[error("oracle deadline of {0:?} elapsed")]
    Timeout(Duration),
}
