//! Value types supplied by external collaborators.
//!
//! # Design
//! These mirror the credential-store objects owned by the embedding
//! application but are defined independently, as owned values, so a
//! descriptor never borrows from its surroundings. Serde derives let
//! applications persist and reload credentials; `Debug` output elides
//! secret material.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Request parameter map. Ordered so computed query strings are
/// deterministic.
pub type Params = BTreeMap<String, String>;

/// A registered graph application: identifier plus signing secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    id: String,
    secret: String,
}

impl App {
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            secret: secret.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("id", &self.id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// An opaque access token. `Display` is the canonical string coercion used
/// everywhere the raw credential is needed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

impl From<String> for AccessToken {
    fn from(value: String) -> Self {
        AccessToken(value)
    }
}

impl From<&str> for AccessToken {
    fn from(value: &str) -> Self {
        AccessToken(value.to_string())
    }
}
