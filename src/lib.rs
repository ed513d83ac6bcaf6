//! Request descriptor core for a versioned JSON-over-HTTP graph API.
//!
//! # Overview
//! Assembles method, endpoint, parameters, credentials, and caching metadata
//! into a canonical request description without touching the network
//! (host-does-IO pattern). The caller executes the actual HTTP round-trip,
//! making the core fully deterministic and testable.
//!
//! # Design
//! - `GraphRequest` holds the mutable state of a not-yet-sent call; the read
//!   accessors (`url`, `headers`, `params`, `post_params`) are pure functions
//!   of that state, computed on demand.
//! - An access token set explicitly, embedded in the endpoint URL, or embedded
//!   in the parameter map is reconciled into a single source of truth; a
//!   conflicting token is a hard error, never a silent overwrite.
//! - `access_token` and `appsecret_proof` are never stored in the endpoint or
//!   the parameter map — they are synthesized at read time from the token and
//!   the app secret.
//! - Types use owned `String` / map fields, so descriptors are self-contained
//!   values with no borrowed state.

pub mod error;
pub mod http;
pub mod proof;
pub mod request;
pub mod types;
pub mod url_util;

pub use error::GraphError;
pub use http::HttpMethod;
pub use request::GraphRequest;
pub use types::{AccessToken, App, Params};

/// Graph API version used when a request does not specify one.
pub const DEFAULT_GRAPH_VERSION: &str = "v2.10";
