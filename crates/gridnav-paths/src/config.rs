//! Search configuration.
//!
//! ```
//! use gridnav_paths::{Heuristic, SearchConfig};
//!
//! let config = SearchConfig::default()
//!     .with_heuristic(Heuristic::Zero)
//!     .with_max_expansions(10_000);
//! assert_eq!(config.max_expansions(), Some(10_000));
//! ```

use crate::heuristic::Heuristic;

/// Settings for an [`AStar`](crate::AStar) search.
///
/// The default uses [`Heuristic::Diagonal`] and no expansion budget, which
/// always returns a shortest path when one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    heuristic: Heuristic,
    max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            heuristic: Heuristic::Diagonal,
            max_expansions: None,
        }
    }

    /// Sets the heuristic.
    #[must_use]
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Stops a search with
    /// [`SearchError::BudgetExhausted`](crate::SearchError::BudgetExhausted)
    /// once `limit` cells have been expanded without reaching the start.
    #[must_use]
    pub const fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Removes the expansion budget.
    #[must_use]
    pub const fn without_budget(mut self) -> Self {
        self.max_expansions = None;
        self
    }

    /// The heuristic in use.
    #[must_use]
    pub const fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// The expansion budget, if any.
    #[must_use]
    pub const fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let c: SearchConfig = serde_json::from_str(r#"{"max_expansions":64}"#).unwrap();
        assert_eq!(c.heuristic(), Heuristic::Diagonal);
        assert_eq!(c.max_expansions(), Some(64));

        let json = serde_json::to_string(&SearchConfig::new().with_heuristic(Heuristic::Zero)).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.heuristic(), Heuristic::Zero);
    }
}
