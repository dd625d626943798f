//! Shared constants for end-to-end tests
//!
//! When test data changes (job card ids, field values), update only this
//! file.

/// Job card id present in the stub backend's seed data
pub const JOB_ID: &str = "42";

/// Second seeded job card id
pub const JOB_ID_2: &str = "7";

/// Job card id absent from the stub backend
pub const MISSING_JOB_ID: &str = "9999";

/// Client-side request timeout used in tests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 5;
