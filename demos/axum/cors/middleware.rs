use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header},
    middleware::Next,
    response::Response,
};
use gatekeep_cors::{CorsDecision, CorsResult, Headers, RequestContext};

use super::{AppState, SharedCors};

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let cors: SharedCors = state.cors.clone();

    let owned_ctx = OwnedRequestContext::from_request(&request);
    let context = owned_ctx.as_request_context();

    match cors.check(&context) {
        CorsDecision::Preflight(result) => terminal_response(result, Body::empty()),
        CorsDecision::Rejected(result) => {
            terminal_response(result, Body::from("CORS request rejected: origin not allowed"))
        }
        CorsDecision::Simple(result) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &result.headers);
            response
        }
        CorsDecision::NotApplicable => next.run(request).await,
    }
}

fn terminal_response(result: CorsResult, body: Body) -> Response {
    let mut response = Response::new(body);
    *response.status_mut() = result
        .status
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::NO_CONTENT);

    apply_headers(response.headers_mut(), &result.headers);
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}

struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
    host: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            origin: header_value(headers, header::ORIGIN),
            host: header_value(headers, header::HOST),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        let context = RequestContext::new(&self.method, self.origin.as_deref());
        match self.host.as_deref() {
            Some(host) => context.with_host(host),
            None => context,
        }
    }
}

fn header_value(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
