//! Progress ranks
//!
//! A rank is reached once the player's score is at least the given percentage
//! of the maximum score for the puzzle, rounded up to whole points.

use std::fmt;

/// Rank ladder from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Beginner,
    GoodStart,
    MovingUp,
    Good,
    Solid,
    Nice,
    Great,
    Amazing,
    Genius,
    QueenBee,
}

impl Rank {
    /// All ranks, lowest first
    pub const ALL: [Self; 10] = [
        Self::Beginner,
        Self::GoodStart,
        Self::MovingUp,
        Self::Good,
        Self::Solid,
        Self::Nice,
        Self::Great,
        Self::Amazing,
        Self::Genius,
        Self::QueenBee,
    ];

    /// Percentage of the maximum score needed to reach this rank
    #[must_use]
    pub const fn threshold_percent(self) -> u32 {
        match self {
            Self::Beginner => 0,
            Self::GoodStart => 2,
            Self::MovingUp => 5,
            Self::Good => 8,
            Self::Solid => 15,
            Self::Nice => 25,
            Self::Great => 40,
            Self::Amazing => 50,
            Self::Genius => 70,
            Self::QueenBee => 100,
        }
    }

    /// Points needed to reach this rank in a puzzle worth `max_score`
    #[must_use]
    pub const fn points_needed(self, max_score: u32) -> u32 {
        (max_score as u64 * self.threshold_percent() as u64).div_ceil(100) as u32
    }

    /// Highest rank reached with `score` out of `max_score`
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::solver::Rank;
    ///
    /// assert_eq!(Rank::for_score(0, 100), Rank::Beginner);
    /// assert_eq!(Rank::for_score(40, 100), Rank::Great);
    /// assert_eq!(Rank::for_score(100, 100), Rank::QueenBee);
    /// ```
    #[must_use]
    pub fn for_score(score: u32, max_score: u32) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|rank| score >= rank.points_needed(max_score))
            .unwrap_or(Self::Beginner)
    }

    /// The next rank up, if any
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self as usize + 1).copied()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::GoodStart => "Good Start",
            Self::MovingUp => "Moving Up",
            Self::Good => "Good",
            Self::Solid => "Solid",
            Self::Nice => "Nice",
            Self::Great => "Great",
            Self::Amazing => "Amazing",
            Self::Genius => "Genius",
            Self::QueenBee => "Queen Bee",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
