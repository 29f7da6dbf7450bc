//! Helper functions for integration tests

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Assert that two readings agree within a relative tolerance
pub fn assert_readings_close(actual: f64, expected: f64, tolerance: f64, message: &str) {
    let error = relative_error(actual, expected);
    assert!(
        error < tolerance,
        "{}: {} vs {} (relative error {}, tolerance {})",
        message,
        actual,
        expected,
        error,
        tolerance
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_assert_readings_close_accepts_small_gap() {
        assert_readings_close(100.001, 100.0, 1e-3, "near-identical readings");
    }

    #[test]
    #[should_panic(expected = "way off")]
    fn test_assert_readings_close_rejects_large_gap() {
        assert_readings_close(150.0, 100.0, 1e-3, "way off");
    }
}
