use crate::options::{CorsOptions, OriginPredicateFn};
use crate::wildcard::WildcardRule;
use std::fmt;
use std::sync::Arc;

/// Compiled origin check, chosen once from the policy.
#[derive(Clone)]
pub enum OriginMatcher {
    /// Every origin is allowed.
    Any,
    /// Only the user predicate decides.
    Predicate(Arc<OriginPredicateFn>),
    /// Exact literals first, then wildcard rules.
    Rules {
        exact: Vec<String>,
        wildcards: Vec<WildcardRule>,
    },
}

impl OriginMatcher {
    /// Picks the matching mode for a validated policy. `wildcards` are the
    /// rules compiled from the same policy.
    pub fn from_options(options: &CorsOptions, wildcards: Vec<WildcardRule>) -> Self {
        if options.allow_all_origins || options.lists_any_origin() {
            return Self::Any;
        }
        if let Some(predicate) = &options.allow_origin_fn {
            return Self::Predicate(Arc::clone(predicate));
        }

        Self::Rules {
            exact: options.allow_origins.clone(),
            wildcards,
        }
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        match self {
            OriginMatcher::Any => true,
            OriginMatcher::Predicate(predicate) => predicate(origin),
            OriginMatcher::Rules { exact, wildcards } => {
                exact.iter().any(|value| value == origin)
                    || wildcards.iter().any(|rule| rule.matches(origin))
            }
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, OriginMatcher::Any)
    }
}

impl fmt::Debug for OriginMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginMatcher::Any => f.write_str("Any"),
            OriginMatcher::Predicate(_) => f.write_str("Predicate(..)"),
            OriginMatcher::Rules { exact, wildcards } => f
                .debug_struct("Rules")
                .field("exact", exact)
                .field("wildcards", wildcards)
                .finish(),
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
