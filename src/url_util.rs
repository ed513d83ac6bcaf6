//! Query-string manipulation for endpoint URLs.
//!
//! # Design
//! Endpoints arrive as path-plus-query strings relative to the graph host
//! (`/me?fields=id,name`), so everything here works on the text after the
//! first `?` and leaves the path untouched. Encoding and decoding go through
//! `url::form_urlencoded`; nothing percent-encodes by hand.

use url::form_urlencoded;

use crate::types::Params;

/// Parse the query portion of `url` into a parameter map. A URL without a
/// query string yields an empty map; a repeated key keeps its last value.
pub fn parse_query(url: &str) -> Params {
    match url.split_once('?') {
        Some((_, query)) => form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect(),
        None => Params::new(),
    }
}

/// Remove the named parameters from `url`'s query string, preserving the
/// rest. Drops the `?` entirely when nothing survives.
pub fn strip_params(url: &str, keys: &[&str]) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let kept: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .filter(|(k, _)| !keys.contains(&k.as_str()))
        .collect();
    if kept.is_empty() {
        return base.to_string();
    }
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.extend_pairs(kept);
    format!("{}?{}", base, serializer.finish())
}

/// Prefix `path` with `/` unless it already starts with one. The empty
/// string becomes `/`.
pub fn force_slash_prefix(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Append `params` to `url` as a query string. Parameters already present on
/// the URL take precedence over appended ones of the same name; the merged
/// query is re-encoded in key order.
pub fn append_params(url: &str, params: &Params) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let (base, existing) = match url.split_once('?') {
        Some((base, query)) => {
            let existing: Params = form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect();
            (base, existing)
        }
        None => (url, Params::new()),
    };
    let mut merged = params.clone();
    merged.extend(existing);
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.extend_pairs(merged.iter());
    format!("{}?{}", base, serializer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parse_query_splits_pairs() {
        let parsed = parse_query("/me?fields=id%2Cname&limit=5");
        assert_eq!(parsed, params(&[("fields", "id,name"), ("limit", "5")]));
    }

    #[test]
    fn parse_query_without_query_is_empty() {
        assert!(parse_query("/me").is_empty());
    }

    #[test]
    fn strip_params_removes_only_named_keys() {
        let stripped = strip_params("/me?access_token=tok&fields=id", &["access_token"]);
        assert_eq!(stripped, "/me?fields=id");
    }

    #[test]
    fn strip_params_drops_question_mark_when_empty() {
        let stripped = strip_params("/me?access_token=tok", &["access_token"]);
        assert_eq!(stripped, "/me");
    }

    #[test]
    fn strip_params_without_query_is_identity() {
        assert_eq!(strip_params("/me", &["access_token"]), "/me");
    }

    #[test]
    fn force_slash_prefix_adds_missing_slash() {
        assert_eq!(force_slash_prefix("v2.2"), "/v2.2");
        assert_eq!(force_slash_prefix("/v2.2"), "/v2.2");
        assert_eq!(force_slash_prefix(""), "/");
    }

    #[test]
    fn append_params_adds_query() {
        let url = append_params("/v2.2/me", &params(&[("fields", "id,name")]));
        assert_eq!(url, "/v2.2/me?fields=id%2Cname");
    }

    #[test]
    fn append_params_existing_url_params_win() {
        let url = append_params("/me?limit=10", &params(&[("limit", "25"), ("after", "x")]));
        assert_eq!(url, "/me?after=x&limit=10");
    }

    #[test]
    fn append_params_empty_map_is_identity() {
        assert_eq!(append_params("/me", &Params::new()), "/me");
    }
}
