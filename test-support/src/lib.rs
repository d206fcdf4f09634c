pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{john_doe, JOHN_DOE_JSON};

/// Property test cases per run.
pub const PROPERTY_CASES: u32 = 256;
pub const PROPERTY_CASES_CI: u32 = 1024;

/// Check if running in CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
}

/// Get the number of property test cases based on environment.
pub fn property_cases() -> u32 {
    if is_ci() {
        PROPERTY_CASES_CI
    } else {
        PROPERTY_CASES
    }
}
