use super::headers::{header_value, vary_values};
use gatekeep_cors::{CorsDecision, Headers};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(result) => {
            assert_eq!(result.status, None);
            assert!(!result.end_response, "simple requests must continue");
            result.headers
        }
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16, bool) {
    match decision {
        CorsDecision::Preflight(result) => (
            result.headers,
            result.status.expect("preflight carries a status"),
            result.end_response,
        ),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_not_applicable(decision: CorsDecision) {
    assert!(
        matches!(decision, CorsDecision::NotApplicable),
        "expected pass-through, got {:?}",
        decision
    );
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "unexpected value for header {name}"
    );
}

pub fn assert_vary_eq<I, S>(headers: &Headers, expected: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let expected: Vec<String> = expected.into_iter().map(Into::into).collect();
    assert_eq!(vary_values(headers), expected);
}

pub fn assert_vary_is_empty(headers: &Headers) {
    let values = vary_values(headers);
    assert!(values.is_empty(), "expected no Vary header, got {:?}", values);
}
