use crate::constants::WILDCARD;
use crate::options::{CorsOptions, ValidationError};

/// One side of a compiled wildcard rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bound {
    /// Matches anything on this side of the origin.
    Any,
    Literal(String),
}

/// A single-`*` origin pattern split into a prefix and a suffix check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardRule {
    pub prefix: Bound,
    pub suffix: Bound,
}

impl WildcardRule {
    /// Splits `pattern` around its only `*`. Patterns without a `*` yield `None`.
    ///
    /// A trailing `*` also swallows the byte in front of it, so
    /// `https://api.*` compiles to the prefix `https://api`.
    pub fn compile(pattern: &str) -> Result<Option<Self>, ValidationError> {
        let mut stars = pattern.match_indices(WILDCARD);
        let Some((index, _)) = stars.next() else {
            return Ok(None);
        };
        if stars.next().is_some() {
            return Err(ValidationError::MultipleWildcards {
                pattern: pattern.to_owned(),
            });
        }

        let rule = if index == 0 {
            Self {
                prefix: Bound::Any,
                suffix: Bound::Literal(pattern[1..].to_owned()),
            }
        } else if index == pattern.len() - 1 {
            let cut = floor_char_boundary(pattern, index - 1);
            Self {
                prefix: Bound::Literal(pattern[..cut].to_owned()),
                suffix: Bound::Any,
            }
        } else {
            Self {
                prefix: Bound::Literal(pattern[..index].to_owned()),
                suffix: Bound::Literal(pattern[index + 1..].to_owned()),
            }
        };

        Ok(Some(rule))
    }

    pub fn matches(&self, origin: &str) -> bool {
        match (&self.prefix, &self.suffix) {
            (Bound::Any, Bound::Any) => true,
            (Bound::Any, Bound::Literal(suffix)) => origin.ends_with(suffix.as_str()),
            (Bound::Literal(prefix), Bound::Any) => origin.starts_with(prefix.as_str()),
            (Bound::Literal(prefix), Bound::Literal(suffix)) => {
                origin.len() >= prefix.len() + suffix.len()
                    && origin.starts_with(prefix.as_str())
                    && origin.ends_with(suffix.as_str())
            }
        }
    }
}

/// Compiles every `*` entry of `allow_origins` into a [`WildcardRule`].
///
/// Returns no rules when `allow_wildcard` is off; `*` entries are then only
/// ever compared as plain strings.
pub fn compile_wildcard_rules(options: &CorsOptions) -> Result<Vec<WildcardRule>, ValidationError> {
    if !options.allow_wildcard {
        return Ok(Vec::new());
    }

    options
        .allow_origins
        .iter()
        .filter_map(|origin| WildcardRule::compile(origin).transpose())
        .collect()
}

// Stays on a char boundary when the byte before the star is part of a
// multi-byte character.
fn floor_char_boundary(value: &str, mut index: usize) -> usize {
    while !value.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
#[path = "wildcard_test.rs"]
mod wildcard_test;
