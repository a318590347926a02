use gatekeep_cors::Headers;
use gatekeep_cors::constants::header;

// Engine output always uses the canonical names from `constants::header`.
pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers.get(name).map(String::as_str)
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    headers.contains_key(name)
}

/// `Vary` entries in the order they were written.
pub fn vary_values(headers: &Headers) -> Vec<&str> {
    header_value(headers, header::VARY)
        .into_iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}
