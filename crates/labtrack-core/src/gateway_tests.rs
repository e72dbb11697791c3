//! Gateway construction tests; request behavior is covered end-to-end by
//! the integration tests.

use crate::gateway::{DEFAULT_BASE_URL, Gateway};

#[test]
fn test_builder_defaults_to_local_backend() {
    let gateway = Gateway::builder().build().unwrap();
    assert_eq!(gateway.base_url(), DEFAULT_BASE_URL);
}

#[test]
fn test_builder_strips_trailing_slashes() {
    let gateway = Gateway::builder()
        .base_url("http://example.test/api/")
        .build()
        .unwrap();
    assert_eq!(gateway.base_url(), "http://example.test/api");
}

#[test]
fn test_debug_shows_base_url_only() {
    let gateway = Gateway::new("http://example.test/api").unwrap();
    let debug = format!("{gateway:?}");
    assert!(debug.contains("http://example.test/api"));
}
