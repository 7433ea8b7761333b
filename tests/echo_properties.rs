//! Property tests for the echo contract, driven through the router in-process.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use echo_server::{create_router, AppConfig, AppState};
use http_body_util::BodyExt;
use proptest::prelude::*;
use tower::ServiceExt;

fn echo_once(body: Vec<u8>) -> (StatusCode, Vec<u8>) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    runtime.block_on(async move {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/")
            .body(Body::from(body))
            .unwrap();
        let response = create_router(AppState::new(&AppConfig::default()))
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn echo_returns_arbitrary_bytes_unchanged(body in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let (status, echoed) = echo_once(body.clone());
        prop_assert_eq!(status, StatusCode::OK);
        prop_assert_eq!(echoed, body);
    }

    #[test]
    fn echo_returns_arbitrary_text_unchanged(body in ".*") {
        let (status, echoed) = echo_once(body.clone().into_bytes());
        prop_assert_eq!(status, StatusCode::OK);
        prop_assert_eq!(echoed, body.into_bytes());
    }
}
