use crate::headers::Headers;

/// Headers and response metadata emitted for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsResult {
    pub headers: Headers,
    /// Terminal status to answer with, when the engine short-circuits.
    pub status: Option<u16>,
    /// `true` when the wrapped handler must not run.
    pub end_response: bool,
}

/// Overall decision returned by [`crate::Cors::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// Preflight answered by the engine. Never forwarded to the handler.
    Preflight(CorsResult),
    /// Allowed cross-origin request. Add the headers and continue.
    Simple(CorsResult),
    /// Disallowed origin with rejection enabled.
    Rejected(CorsResult),
    /// Not a cross-origin request, or an origin that is silently ignored.
    NotApplicable,
}

impl CorsDecision {
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            CorsDecision::Preflight(result)
            | CorsDecision::Simple(result)
            | CorsDecision::Rejected(result) => Some(&result.headers),
            CorsDecision::NotApplicable => None,
        }
    }

    pub fn ends_response(&self) -> bool {
        match self {
            CorsDecision::Preflight(result)
            | CorsDecision::Simple(result)
            | CorsDecision::Rejected(result) => result.end_response,
            CorsDecision::NotApplicable => false,
        }
    }
}
