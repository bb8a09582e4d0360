//! Pattern scores for single-cell evaluation
//!
//! Each direction through a candidate cell is classified by its contiguous
//! count and blocked ends and mapped to one of these weights.

/// Pattern scores used by the heuristic evaluator
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row
    pub const WIN: u32 = 1_000_000;

    /// Open four: _OOOO_
    pub const LIVE_4: u32 = 50_000;
    /// Four with one blocked end: XOOOO_
    pub const DEAD_4: u32 = 5_000;

    /// Open three: _OOO_ (same weight as a dead four)
    pub const LIVE_3: u32 = 5_000;
    /// Three with one blocked end
    pub const DEAD_3: u32 = 1_000;

    pub const LIVE_2: u32 = 500;
    pub const DEAD_2: u32 = 100;

    /// A lone stone with at least one open end
    pub const ONE: u32 = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::WIN > PatternScore::LIVE_4);
        assert!(PatternScore::LIVE_4 > PatternScore::DEAD_4);
        assert_eq!(PatternScore::DEAD_4, PatternScore::LIVE_3);
        assert!(PatternScore::LIVE_3 > PatternScore::DEAD_3);
        assert!(PatternScore::DEAD_3 > PatternScore::LIVE_2);
        assert!(PatternScore::LIVE_2 > PatternScore::DEAD_2);
        assert!(PatternScore::DEAD_2 > PatternScore::ONE);
    }

    #[test]
    fn test_win_dominates_all_directions() {
        // Four directions of the best non-winning shape still trail a five
        assert!(PatternScore::WIN > 4 * PatternScore::LIVE_4);
    }
}
