//! Merge statistics.

use serde::{Deserialize, Serialize};

/// Record counts reported after a merge run.
///
/// `original == total + merged` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStats {
    /// Records in the merged output.
    pub total: usize,
    /// Records folded into an earlier record with the same identity.
    pub merged: usize,
    /// Records received by the engine.
    pub original: usize,
}

impl MergeStats {
    pub fn new(original: usize, total: usize) -> Self {
        Self {
            total,
            merged: original.saturating_sub(total),
            original,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_is_difference() {
        let stats = MergeStats::new(5, 3);
        assert_eq!(stats.merged, 2);
        assert_eq!(stats.original, stats.total + stats.merged);
    }
}
