//! Custom assertion macros and helpers

use axum::http::{header::LOCATION, StatusCode};
use axum_test::TestResponse;

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert a `303 See Other` pointing at `location`
pub fn assert_redirects_to(response: &TestResponse, location: &str) {
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header(LOCATION).to_str().unwrap(), location);
}
