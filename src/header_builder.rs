use crate::constants::header;
use crate::headers::{HeaderCollection, Headers};
use crate::options::CorsOptions;
use crate::util::{normalize_header_names, normalize_methods};

/// Derives the request-independent header sets from a policy.
pub struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// Headers attached to allowed non-preflight responses.
    pub fn build_normal_headers(&self) -> Headers {
        let mut headers = HeaderCollection::with_estimate(3);
        self.push_origin_headers(&mut headers);
        self.push_credentials_header(&mut headers);
        self.push_exposed_headers(&mut headers);
        headers.into_headers()
    }

    /// Headers attached to every preflight response.
    pub fn build_preflight_headers(&self) -> Headers {
        let mut headers = HeaderCollection::with_estimate(5);
        self.push_origin_headers(&mut headers);
        self.push_credentials_header(&mut headers);
        self.push_methods_header(&mut headers);
        self.push_allowed_headers(&mut headers);
        self.push_max_age_header(&mut headers);
        headers.into_headers()
    }

    fn allows_all_origins(&self) -> bool {
        self.options.allow_all_origins || self.options.lists_any_origin()
    }

    fn push_origin_headers(&self, headers: &mut HeaderCollection) {
        if self.allows_all_origins() {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
        } else {
            headers.add_vary(header::ORIGIN);
        }
    }

    fn push_credentials_header(&self, headers: &mut HeaderCollection) {
        if self.options.allow_credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
    }

    fn push_exposed_headers(&self, headers: &mut HeaderCollection) {
        let exposed = normalize_header_names(&self.options.expose_headers);
        if !exposed.is_empty() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, exposed.join(","));
        }
    }

    fn push_methods_header(&self, headers: &mut HeaderCollection) {
        let methods = normalize_methods(&self.options.allow_methods);
        if !methods.is_empty() {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, methods.join(","));
        }
    }

    fn push_allowed_headers(&self, headers: &mut HeaderCollection) {
        let allowed = normalize_header_names(&self.options.allow_headers);
        if !allowed.is_empty() {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, allowed.join(","));
        }
    }

    fn push_max_age_header(&self, headers: &mut HeaderCollection) {
        let seconds = self.options.max_age.as_secs();
        if seconds > 0 {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
