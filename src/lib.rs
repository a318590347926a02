//! Origin-policy CORS engine.
//!
//! A [`CorsOptions`] policy is validated and compiled once into a [`Cors`]
//! engine, which then classifies each request and returns the headers the
//! host should write.
//!
//! ```
//! use gatekeep_cors::{Cors, CorsDecision, CorsOptions, RequestContext};
//!
//! let cors = Cors::new(
//!     CorsOptions::default()
//!         .allow_wildcard(true)
//!         .allow_origins(["https://app.example.com", "https://*.example.org"]),
//! )
//! .expect("valid policy");
//!
//! let decision = cors.check(&RequestContext::new("GET", Some("https://api.example.org")));
//! assert!(matches!(decision, CorsDecision::Simple(_)));
//! ```

pub mod constants;
mod context;
mod cors;
mod header_builder;
mod headers;
mod options;
mod origin;
mod result;
mod util;
mod wildcard;

pub use context::RequestContext;
pub use cors::Cors;
pub use header_builder::HeaderBuilder;
pub use headers::Headers;
pub use options::{CorsOptions, OriginPredicateFn, ValidationError};
pub use origin::OriginMatcher;
pub use result::{CorsDecision, CorsResult};
pub use util::canonical_header_key;
pub use wildcard::{Bound, WildcardRule, compile_wildcard_rules};
