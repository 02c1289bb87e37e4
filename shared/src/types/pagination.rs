//! Pagination for list queries

use serde::{Deserialize, Serialize};

/// Minimum number of items per page
pub const MIN_LIMIT: usize = 1;

/// Maximum number of items per page
pub const MAX_LIMIT: usize = 100;

/// Default number of items per page
pub const DEFAULT_LIMIT: usize = 50;

/// Default limit used by serde when deserializing [`Pagination`]
fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Skip/limit pagination parameters for list queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of leading items to skip
    #[serde(default)]
    pub skip: usize,

    /// Maximum number of items to return
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Create pagination parameters, clamping the limit to the allowed range
    pub fn new(skip: usize, limit: usize) -> Self {
        Self {
            skip,
            limit: limit.clamp(MIN_LIMIT, MAX_LIMIT),
        }
    }

    /// Validate and sanitize the parameters
    pub fn validate(mut self) -> Self {
        self.limit = self.limit.clamp(MIN_LIMIT, MAX_LIMIT);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_clamped() {
        assert_eq!(Pagination::new(0, 0).limit, MIN_LIMIT);
        assert_eq!(Pagination::new(0, 500).limit, MAX_LIMIT);
        assert_eq!(Pagination::new(10, 25).skip, 10);
    }

    #[test]
    fn test_default() {
        let p = Pagination::default();
        assert_eq!(p.skip, 0);
        assert_eq!(p.limit, DEFAULT_LIMIT);
    }
}
