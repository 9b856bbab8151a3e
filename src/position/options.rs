use std::time::Duration;

/// How a single position request is served.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionOptions {
    /// Upper bound on how long a read may take.
    pub timeout: Duration,
    /// Maximum age of a cached reading that may be returned instead of a fresh one. Zero disables the cache.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        PositionOptions {
            timeout: Duration::from_secs(5),
            maximum_age: Duration::ZERO,
        }
    }
}
