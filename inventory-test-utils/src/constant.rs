//! Shared constants for test databases and fixtures.

/// Connection string for the throwaway database each test runs against.
pub static TEST_DATABASE_URL: &str = "sqlite::memory:";

/// Start of the seasonal event window used by fixtures (RFC 3339).
pub static TEST_EVENT_START: &str = "2024-11-25T00:00:00Z";

/// End of the seasonal event window used by fixtures (RFC 3339).
pub static TEST_EVENT_END: &str = "2024-12-02T23:59:59Z";
