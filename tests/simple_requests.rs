mod common;

use gatekeep_cors::constants::{header, method};
use gatekeep_cors::{CorsDecision, CorsOptions};
use common::asserts::{
    assert_header_eq, assert_not_applicable, assert_simple, assert_vary_eq, assert_vary_is_empty,
};
use common::builders::{cors, simple_request};
use common::headers::has_header;

#[test]
fn allowed_origin_is_echoed_with_vary() {
    let cors = cors().origins(["https://allowed.dev"]).build();

    let headers = assert_simple(
        simple_request()
            .method(method::POST)
            .origin("https://allowed.dev")
            .check(&cors),
    );

    assert_header_eq(
        &headers,
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        "https://allowed.dev",
    );
    assert_vary_eq(&headers, [header::ORIGIN]);
}

#[test]
fn request_without_origin_passes_through() {
    let cors = cors().origins(["https://allowed.dev"]).build();

    assert_not_applicable(simple_request().check(&cors));
}

#[test]
fn disallowed_origin_passes_through_without_headers() {
    let cors = cors().origins(["https://allowed.dev"]).build();

    assert_not_applicable(simple_request().origin("https://evil.dev").check(&cors));
}

#[test]
fn disallowed_origin_is_forbidden_when_rejection_enabled() {
    let cors = cors()
        .origins(["https://allowed.dev"])
        .reject_disallowed(true)
        .build();

    let decision = simple_request().origin("https://evil.dev").check(&cors);

    match decision {
        CorsDecision::Rejected(result) => {
            assert_eq!(result.status, Some(403));
            assert!(result.end_response);
            assert!(!has_header(&result.headers, header::ACCESS_CONTROL_ALLOW_ORIGIN));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn allow_all_emits_star_without_vary() {
    let cors = cors().allow_all_origins().build();

    let headers = assert_simple(simple_request().origin("https://whoever.dev").check(&cors));

    assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
    assert_vary_is_empty(&headers);
}

#[test]
fn same_origin_request_is_left_alone() {
    let cors = cors().allow_all_origins().build();

    assert_not_applicable(
        simple_request()
            .origin("http://localhost:8080")
            .host("localhost:8080")
            .check(&cors),
    );
}

#[test]
fn simple_response_never_carries_preflight_headers() {
    let cors = cors()
        .origins(["https://allowed.dev"])
        .methods(["GET", "PUT"])
        .allowed_headers(["X-Custom"])
        .max_age_secs(60)
        .build();

    let headers = assert_simple(simple_request().origin("https://allowed.dev").check(&cors));

    assert!(!has_header(&headers, header::ACCESS_CONTROL_ALLOW_METHODS));
    assert!(!has_header(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS));
    assert!(!has_header(&headers, header::ACCESS_CONTROL_MAX_AGE));
}

#[test]
fn non_options_methods_are_all_simple() {
    let cors = cors().allow_all_origins().build();

    for verb in [method::GET, method::POST, method::PUT, method::DELETE, "PROPFIND"] {
        assert_simple(
            simple_request()
                .method(verb)
                .origin("https://any.dev")
                .check(&cors),
        );
    }
}

#[test]
fn permissive_engine_accepts_everyone() {
    let cors = gatekeep_cors::Cors::new(CorsOptions::permissive()).expect("valid policy");

    let headers = assert_simple(simple_request().origin("https://anyone.dev").check(&cors));

    assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
}
