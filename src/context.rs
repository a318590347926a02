use crate::constants::scheme;

/// Borrowed view of the parts of an incoming request the engine inspects.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    /// Raw `Origin` header. `Some("")` means the header was sent empty.
    pub origin: Option<&'a str>,
    /// `Host` of the request, used to recognise same-origin calls.
    pub host: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, origin: Option<&'a str>) -> Self {
        Self {
            method,
            origin,
            host: None,
        }
    }

    pub fn with_host(mut self, host: &'a str) -> Self {
        self.host = Some(host);
        self
    }

    pub(crate) fn is_same_origin(&self, origin: &str) -> bool {
        let Some(host) = self.host.filter(|host| !host.is_empty()) else {
            return false;
        };

        scheme::DEFAULT.iter().any(|prefix| {
            origin
                .strip_prefix(prefix)
                .is_some_and(|rest| rest == host)
        })
    }
}
