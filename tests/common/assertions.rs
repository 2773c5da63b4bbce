//! Custom assertion macros and utilities

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

/// Assert the `{ error, status }` body of contact and auth routes
#[macro_export]
macro_rules! assert_error_body {
    ($body:expr, $status:expr) => {
        assert_eq!($body["status"], serde_json::json!($status.as_u16()));
        assert!(
            $body["error"].as_str().map_or(false, |e| !e.is_empty()),
            "Expected a non-empty error message in {}",
            $body
        );
    };
}
