use std::collections::HashSet;

pub(crate) fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        let mut owned = value.to_owned();
        owned.make_ascii_lowercase();
        owned
    } else {
        value.to_lowercase()
    }
}

pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

/// Rewrites a header name so every `-`-delimited segment starts with an
/// uppercase letter and continues in lowercase.
///
/// ```
/// use gatekeep_cors::canonical_header_key;
///
/// assert_eq!(canonical_header_key("X-user"), "X-User");
/// assert_eq!(canonical_header_key("xPassword"), "Xpassword");
/// ```
///
/// Input that is not a valid HTTP token is returned trimmed and lowercased.
pub fn canonical_header_key(value: &str) -> String {
    let lowered = normalize_lower(value.trim());
    if !is_http_token(&lowered) {
        return lowered;
    }

    let mut upper = true;
    lowered
        .chars()
        .map(|ch| {
            let out = if upper { ch.to_ascii_uppercase() } else { ch };
            upper = ch == '-';
            out
        })
        .collect()
}

/// Trims, lowercases and de-duplicates `values`, keeping the first
/// occurrence of each entry and dropping empty ones.
pub(crate) fn normalize_list<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(values.len());
    let mut normalized = Vec::with_capacity(values.len());

    for value in values {
        let value = normalize_lower(value.as_ref().trim());
        if value.is_empty() {
            continue;
        }
        if seen.insert(value.clone()) {
            normalized.push(value);
        }
    }

    normalized
}

pub(crate) fn normalize_methods<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    normalize_list(values)
        .into_iter()
        .map(|method| method.to_uppercase())
        .collect()
}

pub(crate) fn normalize_header_names<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    normalize_list(values)
        .iter()
        .map(|name| canonical_header_key(name))
        .collect()
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
