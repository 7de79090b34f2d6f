//! Integration tests for store failure mapping: a missing or malformed
//! catalog document is a generic 500 with a human-readable message.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json, valid_create_body};

#[tokio::test]
async fn malformed_document_maps_to_500_with_generic_message() {
    let test = build_test_app(&[]);
    std::fs::write(test.file.path(), "not json at all").expect("corrupt catalog");

    let response = get(test.app.clone(), "/api/products").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    let message = json["error"].as_str().expect("error string");
    // The client never sees I/O details, only a generic message.
    assert_eq!(message, "An internal error occurred");
}

#[tokio::test]
async fn missing_document_maps_to_500() {
    let test = build_test_app(&[]);
    std::fs::remove_file(test.file.path()).expect("remove catalog");

    let response = get(test.app.clone(), "/api/products").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn mutations_also_map_store_failures_to_500() {
    let test = build_test_app(&[]);
    std::fs::write(test.file.path(), "[1, 2, 3]").expect("corrupt catalog");

    let response = post_json(test.app.clone(), "/api/products", valid_create_body()).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn rendered_pages_also_map_store_failures_to_500() {
    let test = build_test_app(&[]);
    std::fs::write(test.file.path(), "{").expect("corrupt catalog");

    for uri in ["/", "/realtimeproducts"] {
        let response = get(test.app.clone(), uri).await;
        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "uri: {uri}"
        );
    }
}
