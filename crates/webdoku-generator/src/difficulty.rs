//! Difficulty tiers and their clue-count targets.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DisplayDerive, Error};
use serde::{Deserialize, Serialize};

/// A named difficulty tier for generated puzzles.
///
/// Each tier maps to a fixed number of clues left in the puzzle. The mapping
/// is a configuration lookup, not a computed value: fewer clues means a
/// sparser, harder puzzle.
///
/// # Examples
///
/// ```
/// use webdoku_generator::Difficulty;
///
/// assert_eq!(Difficulty::Easy.clue_count(), 40);
/// assert_eq!(Difficulty::Expert.clue_count(), 22);
/// assert_eq!("medium".parse(), Ok(Difficulty::Medium));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 40 clues.
    Easy,
    /// 32 clues.
    Medium,
    /// 26 clues.
    Hard,
    /// 22 clues.
    Expert,
}

impl Difficulty {
    /// Array containing all tiers from easiest to hardest.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Returns the number of clues a puzzle of this tier retains.
    ///
    /// Every tier's count lies within the generatable range 17-81, so
    /// generation by tier cannot hit a configuration error.
    #[must_use]
    pub const fn clue_count(self) -> u8 {
        match self {
            Self::Easy => 40,
            Self::Medium => 32,
            Self::Hard => 26,
            Self::Expert => 22,
        }
    }

    /// Returns the lowercase tier name used by the web layer.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error from parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, DisplayDerive, Error)]
#[display("unknown difficulty {name:?}, expected easy, medium, hard, or expert")]
pub struct ParseDifficultyError {
    /// The unrecognized name.
    pub name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, ParseDifficultyError> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "expert" => Ok(Self::Expert),
            _ => Err(ParseDifficultyError { name: s.to_owned() }),
        }
    }
}
