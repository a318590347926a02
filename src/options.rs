use crate::constants::{WILDCARD, header, method, scheme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// User-supplied origin check. Receives the raw `Origin` header value.
pub type OriginPredicateFn = dyn Fn(&str) -> bool + Send + Sync;

const DEFAULT_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Declarative access-control policy consumed by [`crate::Cors::new`].
///
/// Exactly one origin-selection mode must be configured: `allow_all_origins`,
/// `allow_origin_fn`, or a non-empty `allow_origins` list. [`Self::validate`]
/// rejects every other combination.
#[derive(Clone)]
pub struct CorsOptions {
    pub allow_all_origins: bool,
    /// Exact origins or single-`*` patterns. Must stay empty when `allow_origin_fn` is set.
    pub allow_origins: Vec<String>,
    pub allow_origin_fn: Option<Arc<OriginPredicateFn>>,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
    pub expose_headers: Vec<String>,
    pub allow_credentials: bool,
    /// How long a preflight result may be cached. Emitted in whole seconds.
    pub max_age: Duration,
    /// Compile `*` entries of `allow_origins` into wildcard rules.
    pub allow_wildcard: bool,
    pub allow_browser_extensions: bool,
    pub allow_web_sockets: bool,
    /// Accept `file://` origins. Only enable when you really need it.
    pub allow_files: bool,
    /// Answer disallowed origins with `403 Forbidden` instead of passing through.
    pub reject_disallowed: bool,
}

/// Configuration problems detected while building the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "conflicting origin modes: all origins are allowed, so allow_origin_fn and allow_origins must not be set"
    )]
    ConflictingOriginModes,
    #[error(
        "no origins allowed: set allow_all_origins, allow_origin_fn or a non-empty allow_origins"
    )]
    NoOriginsAllowed,
    #[error("conflicting origin modes: allow_origin_fn is set, so allow_origins must be empty")]
    PredicateWithOrigins,
    #[error("bad origin '{origin}': origins must contain '*' or start with one of {schemes}")]
    BadOrigin { origin: String, schemes: String },
    #[error("origin pattern '{pattern}' contains more than one '*'")]
    MultipleWildcards { pattern: String },
}

impl CorsOptions {
    /// An empty policy: no origins, methods or headers, every toggle off.
    pub fn new() -> Self {
        Self {
            allow_all_origins: false,
            allow_origins: Vec::new(),
            allow_origin_fn: None,
            allow_methods: Vec::new(),
            allow_headers: Vec::new(),
            expose_headers: Vec::new(),
            allow_credentials: false,
            max_age: Duration::ZERO,
            allow_wildcard: false,
            allow_browser_extensions: false,
            allow_web_sockets: false,
            allow_files: false,
            reject_disallowed: false,
        }
    }

    /// The default policy with every origin allowed.
    pub fn permissive() -> Self {
        Self::default().allow_all_origins(true)
    }

    pub fn allow_all_origins(mut self, enabled: bool) -> Self {
        self.allow_all_origins = enabled;
        self
    }

    pub fn allow_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    pub fn allow_origin_fn<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.allow_origin_fn = Some(Arc::new(predicate));
        self
    }

    pub fn allow_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expose_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.allow_credentials = enabled;
        self
    }

    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn allow_wildcard(mut self, enabled: bool) -> Self {
        self.allow_wildcard = enabled;
        self
    }

    pub fn allow_browser_extensions(mut self, enabled: bool) -> Self {
        self.allow_browser_extensions = enabled;
        self
    }

    pub fn allow_web_sockets(mut self, enabled: bool) -> Self {
        self.allow_web_sockets = enabled;
        self
    }

    pub fn allow_files(mut self, enabled: bool) -> Self {
        self.allow_files = enabled;
        self
    }

    pub fn reject_disallowed(mut self, enabled: bool) -> Self {
        self.reject_disallowed = enabled;
        self
    }

    pub fn add_allow_methods<I, S>(&mut self, methods: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_methods.extend(methods.into_iter().map(Into::into));
    }

    pub fn add_allow_headers<I, S>(&mut self, headers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_headers.extend(headers.into_iter().map(Into::into));
    }

    pub fn add_expose_headers<I, S>(&mut self, headers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expose_headers.extend(headers.into_iter().map(Into::into));
    }

    /// Scheme prefixes a literal origin may start with, in a fixed order:
    /// defaults, browser extensions, websockets, files.
    pub fn allowed_schemes(&self) -> Vec<&'static str> {
        let mut schemes = scheme::DEFAULT.to_vec();
        if self.allow_browser_extensions {
            schemes.extend_from_slice(scheme::BROWSER_EXTENSIONS);
        }
        if self.allow_web_sockets {
            schemes.extend_from_slice(scheme::WEB_SOCKETS);
        }
        if self.allow_files {
            schemes.extend_from_slice(scheme::FILES);
        }
        schemes
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let has_predicate = self.allow_origin_fn.is_some();
        let has_list = !self.allow_origins.is_empty();

        if self.allow_all_origins && (has_predicate || has_list) {
            return Err(ValidationError::ConflictingOriginModes);
        }
        if !self.allow_all_origins && !has_predicate && !has_list {
            return Err(ValidationError::NoOriginsAllowed);
        }
        if has_predicate && has_list {
            return Err(ValidationError::PredicateWithOrigins);
        }

        let schemes = self.allowed_schemes();
        for origin in &self.allow_origins {
            if origin.contains(WILDCARD) {
                continue;
            }
            if !schemes.iter().any(|prefix| origin.starts_with(prefix)) {
                return Err(ValidationError::BadOrigin {
                    origin: origin.clone(),
                    schemes: schemes.join(","),
                });
            }
        }

        Ok(())
    }

    /// True when the list contains the bare `*` entry, which stands for
    /// "allow every origin".
    pub(crate) fn lists_any_origin(&self) -> bool {
        self.allow_origin_fn.is_none()
            && self.allow_origins.iter().any(|origin| origin == "*")
    }
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            allow_methods: vec![
                method::GET.into(),
                method::POST.into(),
                method::PUT.into(),
                method::PATCH.into(),
                method::DELETE.into(),
                method::HEAD.into(),
                method::OPTIONS.into(),
            ],
            allow_headers: vec![
                header::ORIGIN.into(),
                header::CONTENT_LENGTH.into(),
                header::CONTENT_TYPE.into(),
            ],
            max_age: DEFAULT_MAX_AGE,
            ..Self::new()
        }
    }
}

impl fmt::Debug for CorsOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorsOptions")
            .field("allow_all_origins", &self.allow_all_origins)
            .field("allow_origins", &self.allow_origins)
            .field(
                "allow_origin_fn",
                &self.allow_origin_fn.as_ref().map(|_| ".."),
            )
            .field("allow_methods", &self.allow_methods)
            .field("allow_headers", &self.allow_headers)
            .field("expose_headers", &self.expose_headers)
            .field("allow_credentials", &self.allow_credentials)
            .field("max_age", &self.max_age)
            .field("allow_wildcard", &self.allow_wildcard)
            .field("allow_browser_extensions", &self.allow_browser_extensions)
            .field("allow_web_sockets", &self.allow_web_sockets)
            .field("allow_files", &self.allow_files)
            .field("reject_disallowed", &self.reject_disallowed)
            .finish()
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
