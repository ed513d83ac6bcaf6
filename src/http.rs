//! HTTP method as plain data.
//!
//! # Design
//! The descriptor stores the caller-supplied verb verbatim (upper-cased) so
//! an unsupported verb can be reported by validation rather than rejected by
//! the type system; `HttpMethod` is the validated form handed to the host
//! transport. The graph API accepts exactly these three verbs.

/// A validated HTTP method for a graph API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    /// Parse an upper-cased verb. Returns `None` for anything the graph API
    /// does not accept.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "DELETE" => Some(HttpMethod::Delete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}
