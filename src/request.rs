//! Mutable descriptor for a single not-yet-sent graph API call.
//!
//! # Design
//! `GraphRequest` accumulates method, endpoint, parameters, credentials, and
//! caching metadata through setters, then computes the final wire form on
//! demand through pure read accessors. Mutation never fails because of
//! missing *other* fields; only validation at read time does.
//!
//! The access token is the single source of truth for authentication. A token
//! may arrive explicitly, embedded in the endpoint URL, or embedded in the
//! parameter map; the reconciliation protocol in
//! [`set_access_token_from_params`](GraphRequest::set_access_token_from_params)
//! guarantees the three sources can never silently diverge. The
//! `access_token` and `appsecret_proof` parameters are never stored — they
//! are synthesized by the read accessors from the token and the app secret.

use crate::error::GraphError;
use crate::http::HttpMethod;
use crate::proof;
use crate::types::{AccessToken, App, Params};
use crate::url_util;
use crate::DEFAULT_GRAPH_VERSION;

/// Reserved parameter names, synthesized at read time and stripped on write.
const PARAM_ACCESS_TOKEN: &str = "access_token";
const PARAM_APP_SECRET_PROOF: &str = "appsecret_proof";

const USER_AGENT: &str = concat!("graph-core/", env!("CARGO_PKG_VERSION"));

/// Descriptor for one outbound graph API call.
///
/// Build one per logical request, mutate it through the setters, then hand
/// [`url`](Self::url), [`headers`](Self::headers), and
/// [`post_params`](Self::post_params) to the transport layer that performs
/// the actual I/O.
#[derive(Debug, Clone)]
pub struct GraphRequest {
    app: Option<App>,
    access_token: Option<AccessToken>,
    method: Option<String>,
    endpoint: Option<String>,
    params: Params,
    etag: Option<String>,
    graph_version: String,
}

impl GraphRequest {
    /// An empty descriptor on the default graph version.
    pub fn new() -> Self {
        Self {
            app: None,
            access_token: None,
            method: None,
            endpoint: None,
            params: Params::new(),
            etag: None,
            graph_version: DEFAULT_GRAPH_VERSION.to_string(),
        }
    }

    /// Build a descriptor in one step. Runs the same setters (and therefore
    /// the same token reconciliation) as piecemeal construction: a token
    /// embedded in `endpoint` or `params` that conflicts with `access_token`
    /// fails with [`GraphError::AccessTokenMismatch`].
    pub fn from_parts(
        app: Option<App>,
        access_token: Option<AccessToken>,
        method: &str,
        endpoint: &str,
        params: Params,
        etag: Option<String>,
        graph_version: Option<&str>,
    ) -> Result<Self, GraphError> {
        let mut request = Self::new();
        if let Some(app) = app {
            request.set_app(app);
        }
        if let Some(token) = access_token {
            request.set_access_token(token);
        }
        request.set_method(method);
        request.set_endpoint(endpoint)?;
        request.set_params(params)?;
        if let Some(etag) = etag {
            request.set_etag(etag);
        }
        if let Some(version) = graph_version {
            request.set_graph_version(version);
        }
        Ok(request)
    }

    pub fn set_app(&mut self, app: App) {
        self.app = Some(app);
    }

    /// Set the access token from the trusted, canonical path. Accepts a raw
    /// string or an [`AccessToken`]; overwrites without a conflict check.
    pub fn set_access_token(&mut self, token: impl Into<AccessToken>) {
        self.access_token = Some(token.into());
    }

    /// Reconcile a token discovered in an endpoint URL or a parameter map
    /// against the token already on the descriptor:
    ///
    /// - no token set yet: adopt the discovered one;
    /// - identical token already set: no-op;
    /// - different token already set: [`GraphError::AccessTokenMismatch`] —
    ///   a hard stop, never a silent credential swap.
    ///
    /// An empty discovered token counts as "nothing discovered" and is
    /// always a no-op.
    pub fn set_access_token_from_params(&mut self, token: &str) -> Result<(), GraphError> {
        if token.is_empty() {
            return Ok(());
        }
        match self.current_token() {
            None => {
                self.access_token = Some(AccessToken::from(token));
                Ok(())
            }
            Some(existing) if existing == token => Ok(()),
            Some(_) => Err(GraphError::AccessTokenMismatch),
        }
    }

    /// Store the verb upper-cased; validity is checked at read time by
    /// [`validate_method`](Self::validate_method).
    pub fn set_method(&mut self, method: &str) {
        self.method = Some(method.to_uppercase());
    }

    /// Set the endpoint path. A token embedded in the query string is
    /// reconciled first; `access_token` and `appsecret_proof` are then
    /// stripped from the stored text (they are reconstituted at read time).
    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<(), GraphError> {
        let query = url_util::parse_query(endpoint);
        if let Some(token) = query.get(PARAM_ACCESS_TOKEN) {
            self.set_access_token_from_params(token)?;
        }
        self.endpoint = Some(url_util::strip_params(
            endpoint,
            &[PARAM_ACCESS_TOKEN, PARAM_APP_SECRET_PROOF],
        ));
        Ok(())
    }

    /// Merge `params` into the stored parameter map, new keys overwriting
    /// existing ones. An `access_token` entry is reconciled first; both
    /// reserved keys are stripped unconditionally before the merge.
    pub fn set_params(&mut self, mut params: Params) -> Result<(), GraphError> {
        if let Some(token) = params.get(PARAM_ACCESS_TOKEN).cloned() {
            self.set_access_token_from_params(&token)?;
        }
        params.remove(PARAM_ACCESS_TOKEN);
        params.remove(PARAM_APP_SECRET_PROOF);
        self.params.extend(params);
        Ok(())
    }

    /// Merge `params` with no filtering and no token reconciliation.
    ///
    /// Trusted bypass for internal callers that have already validated their
    /// input; reserved keys pass through verbatim and will shadow or collide
    /// with the synthesized credentials. Never use with untrusted input —
    /// [`set_params`](Self::set_params) is the default path.
    pub fn set_params_unchecked(&mut self, params: Params) {
        self.params.extend(params);
    }

    pub fn set_etag(&mut self, etag: impl Into<String>) {
        self.etag = Some(etag.into());
    }

    pub fn set_graph_version(&mut self, version: &str) {
        self.graph_version = version.to_string();
    }

    pub fn app(&self) -> Option<&App> {
        self.app.as_ref()
    }

    /// The reconciled access token. An empty stored token reads as unset.
    pub fn access_token(&self) -> Option<&str> {
        self.current_token()
    }

    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// The stored endpoint, with `access_token` and `appsecret_proof`
    /// stripped. Batch assemblers read this when they need the path without
    /// a fully composed URL.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    pub fn graph_version(&self) -> &str {
        &self.graph_version
    }

    /// Fails with [`GraphError::MissingAccessToken`] when no token is set
    /// (empty counts as unset).
    pub fn validate_access_token(&self) -> Result<(), GraphError> {
        match self.current_token() {
            Some(_) => Ok(()),
            None => Err(GraphError::MissingAccessToken),
        }
    }

    /// Fails with [`GraphError::MissingMethod`] when no method is set and
    /// [`GraphError::InvalidMethod`] when the verb is not GET, POST, or
    /// DELETE.
    pub fn validate_method(&self) -> Result<HttpMethod, GraphError> {
        match self.method.as_deref() {
            None | Some("") => Err(GraphError::MissingMethod),
            Some(method) => {
                HttpMethod::parse(method).ok_or_else(|| GraphError::InvalidMethod(method.to_string()))
            }
        }
    }

    /// The app secret proof for the current token: hex HMAC-SHA256 of the
    /// token keyed by the app secret. Requires a token and an attached app.
    pub fn app_secret_proof(&self) -> Result<String, GraphError> {
        let token = self.current_token().ok_or(GraphError::MissingAccessToken)?;
        let app = self.app.as_ref().ok_or(GraphError::MissingApp)?;
        Ok(proof::app_secret_proof(token, app.secret()))
    }

    /// The stored parameters plus, when a token is present, the synthesized
    /// `access_token` and `appsecret_proof` entries layered on top.
    pub fn params(&self) -> Result<Params, GraphError> {
        let mut params = self.params.clone();
        if let Some(token) = self.current_token() {
            params.insert(PARAM_ACCESS_TOKEN.to_string(), token.to_string());
            params.insert(PARAM_APP_SECRET_PROOF.to_string(), self.app_secret_proof()?);
        }
        Ok(params)
    }

    /// Body parameters: [`params`](Self::params) for POST, an empty map for
    /// every other method. POST calls carry all state (credential and proof
    /// included) in the body, never the URL.
    pub fn post_params(&self) -> Result<Params, GraphError> {
        if self.method.as_deref() == Some("POST") {
            self.params()
        } else {
            Ok(Params::new())
        }
    }

    /// Default headers, plus `If-None-Match` when an eTag is set.
    pub fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![
            ("User-Agent".to_string(), USER_AGENT.to_string()),
            ("Accept-Encoding".to_string(), "*".to_string()),
        ];
        if let Some(etag) = &self.etag {
            headers.push(("If-None-Match".to_string(), etag.clone()));
        }
        headers
    }

    /// The path-plus-query wire form, relative to the graph host:
    /// `/{graph_version}/{endpoint}`, with [`params`](Self::params) appended
    /// as a query string for GET and DELETE. POST returns the bare path —
    /// its parameters travel in the body via
    /// [`post_params`](Self::post_params). Query parameters already present
    /// in the endpoint text keep precedence over appended ones.
    pub fn url(&self) -> Result<String, GraphError> {
        let method = self.validate_method()?;
        let path = format!(
            "{}{}",
            url_util::force_slash_prefix(&self.graph_version),
            url_util::force_slash_prefix(self.endpoint.as_deref().unwrap_or_default()),
        );
        if method == HttpMethod::Post {
            return Ok(path);
        }
        Ok(url_util::append_params(&path, &self.params()?))
    }

    // Single normalized view of the token: empty string reads as unset, so
    // reconciliation, validation, and the read accessors all agree.
    fn current_token(&self) -> Option<&str> {
        self.access_token
            .as_ref()
            .map(AccessToken::as_str)
            .filter(|token| !token.is_empty())
    }
}

impl Default for GraphRequest {
    fn default() -> Self {
        Self::new()
    }
}
