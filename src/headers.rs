use crate::constants::header;
use indexmap::IndexMap;

/// Response headers in insertion order.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.headers.insert(name.into(), value.into());
    }

    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let incoming = value.into();
        let incoming = incoming.trim();
        if incoming.is_empty() {
            return;
        }

        match self.headers.get_mut(header::VARY) {
            Some(existing) => {
                let present = existing
                    .split(',')
                    .any(|part| part.trim().eq_ignore_ascii_case(incoming));
                if !present {
                    existing.push_str(", ");
                    existing.push_str(incoming);
                }
            }
            None => {
                self.headers
                    .insert(header::VARY.to_string(), incoming.to_string());
            }
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
