//! Pattern tiers and their weights
//!
//! A pattern is what a single axis through a candidate cell would look like
//! after placing a stone there: its run length and whether both run ends are
//! closed off.

/// Pattern scores for evaluation.
///
/// Every weight is a multiple of 10, which keeps the 4/5 defence weighting
/// in [`crate::engine`] exact in integer arithmetic.
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row - immediate win
    pub const FIVE: i32 = 100_000;
    /// Four with at least one open end
    pub const FOUR: i32 = 10_000;
    /// Four closed off at both ends
    pub const BLOCKED_FOUR: i32 = 5_000;
    pub const THREE: i32 = 1_000;
    pub const BLOCKED_THREE: i32 = 500;
    pub const TWO: i32 = 100;
    pub const BLOCKED_TWO: i32 = 50;
    /// Lone stone, no blocked variant
    pub const ONE: i32 = 10;
}

/// Line tier for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Five,
    Four,
    BlockedFour,
    Three,
    BlockedThree,
    Two,
    BlockedTwo,
    One,
}

impl Pattern {
    /// Classify a run of `length` stones. `blocked` means both ends are
    /// closed; a run closed on one side only still counts as open.
    pub fn classify(length: u32, blocked: bool) -> Pattern {
        match (length, blocked) {
            (5.., _) => Pattern::Five,
            (4, false) => Pattern::Four,
            (4, true) => Pattern::BlockedFour,
            (3, false) => Pattern::Three,
            (3, true) => Pattern::BlockedThree,
            (2, false) => Pattern::Two,
            (2, true) => Pattern::BlockedTwo,
            _ => Pattern::One,
        }
    }

    #[inline]
    pub fn score(self) -> i32 {
        match self {
            Pattern::Five => PatternScore::FIVE,
            Pattern::Four => PatternScore::FOUR,
            Pattern::BlockedFour => PatternScore::BLOCKED_FOUR,
            Pattern::Three => PatternScore::THREE,
            Pattern::BlockedThree => PatternScore::BLOCKED_THREE,
            Pattern::Two => PatternScore::TWO,
            Pattern::BlockedTwo => PatternScore::BLOCKED_TWO,
            Pattern::One => PatternScore::ONE,
        }
    }
}
