//! Error types for the graph request descriptor.
//!
//! # Design
//! `AccessTokenMismatch` gets a dedicated variant because it is the one
//! failure a caller must resolve by deciding which credential is
//! authoritative; the remaining variants are validation failures surfaced
//! when a read accessor is asked for a wire form the descriptor cannot yet
//! produce. Token and secret values never appear in error text.

use std::fmt;

/// Errors returned by `GraphRequest` mutators and read accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A token discovered in an endpoint URL or parameter map conflicts with
    /// the token already set on the descriptor.
    AccessTokenMismatch,

    /// Token validation ran with no access token set (empty counts as unset).
    MissingAccessToken,

    /// A URL was requested before any HTTP method was set.
    MissingMethod,

    /// The stored method is not one of GET, POST, DELETE. Carries the
    /// rejected verb.
    InvalidMethod(String),

    /// An app secret proof was requested with no app attached.
    MissingApp,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::AccessTokenMismatch => {
                write!(
                    f,
                    "access token mismatch: the token provided in the URL or params \
                     does not match the token already set on the request"
                )
            }
            GraphError::MissingAccessToken => {
                write!(f, "no access token set on the request")
            }
            GraphError::MissingMethod => {
                write!(f, "no HTTP method set on the request")
            }
            GraphError::InvalidMethod(method) => {
                write!(f, "invalid HTTP method {method:?}: expected GET, POST, or DELETE")
            }
            GraphError::MissingApp => {
                write!(f, "no app attached to the request: an app secret is required to sign it")
            }
        }
    }
}

impl std::error::Error for GraphError {}
