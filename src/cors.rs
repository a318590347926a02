use crate::constants::{WILDCARD, header, method, status};
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::Headers;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::OriginMatcher;
use crate::result::{CorsDecision, CorsResult};
use crate::wildcard::{WildcardRule, compile_wildcard_rules};
use tracing::{debug, trace, warn};

/// Compiled CORS engine. Build once with [`Cors::new`] and share it across
/// request handlers; [`Cors::check`] never mutates it.
#[derive(Debug, Clone)]
pub struct Cors {
    matcher: OriginMatcher,
    normal_headers: Headers,
    preflight_headers: Headers,
    reject_disallowed: bool,
}

impl Cors {
    /// Validates `options`, compiles its wildcard rules and precomputes the
    /// normal and preflight header sets.
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        let wildcards = compile_wildcard_rules(&options)?;

        if !options.allow_wildcard
            && options.allow_origin_fn.is_none()
            && !options.lists_any_origin()
            && options.allow_origins.iter().any(|origin| origin.contains(WILDCARD))
        {
            warn!("wildcard origins are configured but allow_wildcard is off; they will never match");
        }

        Ok(Self::build(&options, wildcards))
    }

    /// Engine for [`CorsOptions::permissive`]: every origin, default methods
    /// and headers.
    pub fn permissive() -> Self {
        Self::build(&CorsOptions::permissive(), Vec::new())
    }

    fn build(options: &CorsOptions, wildcards: Vec<WildcardRule>) -> Self {
        let matcher = OriginMatcher::from_options(options, wildcards);
        if matcher.is_any() && options.allow_credentials {
            warn!("credentials are allowed together with every origin");
        }

        match &matcher {
            OriginMatcher::Rules { exact, wildcards } => debug!(
                exact = exact.len(),
                wildcards = wildcards.len(),
                "compiled rule-based origin matcher"
            ),
            OriginMatcher::Predicate(_) => debug!("compiled predicate origin matcher"),
            OriginMatcher::Any => debug!("compiled allow-all origin matcher"),
        }

        let builder = HeaderBuilder::new(options);
        Self {
            normal_headers: builder.build_normal_headers(),
            preflight_headers: builder.build_preflight_headers(),
            reject_disallowed: options.reject_disallowed,
            matcher,
        }
    }

    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.matcher.is_allowed(origin)
    }

    pub fn matcher(&self) -> &OriginMatcher {
        &self.matcher
    }

    /// Header set shared by every allowed non-preflight response.
    pub fn normal_headers(&self) -> &Headers {
        &self.normal_headers
    }

    /// Header set shared by every preflight response.
    pub fn preflight_headers(&self) -> &Headers {
        &self.preflight_headers
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let Some(origin) = request.origin else {
            return CorsDecision::NotApplicable;
        };
        if request.is_same_origin(origin) {
            return CorsDecision::NotApplicable;
        }

        if request.method.eq_ignore_ascii_case(method::OPTIONS) {
            self.process_preflight(origin)
        } else {
            self.process_simple(origin)
        }
    }

    fn process_preflight(&self, origin: &str) -> CorsDecision {
        if origin.is_empty() || !self.matcher.is_allowed(origin) {
            trace!(origin, "preflight origin not allowed");
            if self.reject_disallowed {
                return Self::rejection();
            }

            let mut headers = self.preflight_headers.clone();
            headers.shift_remove(header::ACCESS_CONTROL_ALLOW_ORIGIN);
            return CorsDecision::Preflight(CorsResult {
                headers,
                status: Some(status::NO_CONTENT),
                end_response: true,
            });
        }

        CorsDecision::Preflight(CorsResult {
            headers: self.with_origin(&self.preflight_headers, origin),
            status: Some(status::NO_CONTENT),
            end_response: true,
        })
    }

    fn process_simple(&self, origin: &str) -> CorsDecision {
        if origin.is_empty() {
            return CorsDecision::NotApplicable;
        }
        if !self.matcher.is_allowed(origin) {
            trace!(origin, "origin not allowed");
            return if self.reject_disallowed {
                Self::rejection()
            } else {
                CorsDecision::NotApplicable
            };
        }

        CorsDecision::Simple(CorsResult {
            headers: self.with_origin(&self.normal_headers, origin),
            status: None,
            end_response: false,
        })
    }

    // The allow-all sets already carry `*`.
    fn with_origin(&self, base: &Headers, origin: &str) -> Headers {
        let mut headers = base.clone();
        if !self.matcher.is_any() {
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
                origin.to_string(),
            );
        }
        headers
    }

    fn rejection() -> CorsDecision {
        CorsDecision::Rejected(CorsResult {
            headers: Headers::new(),
            status: Some(status::FORBIDDEN),
            end_response: true,
        })
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
