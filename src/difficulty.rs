use crate::GridDimension;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// `(height, width, mines)`
    pub const fn preset(self) -> (u32, u32, u32) {
        match self {
            Difficulty::Easy => (9, 9, 10),
            Difficulty::Medium => (16, 16, 40),
            Difficulty::Hard => (16, 30, 99),
        }
    }

    pub const fn dimensions(self) -> GridDimension {
        let (height, width, _) = self.preset();
        GridDimension::new_unchecked(height, width)
    }

    pub const fn mine_count(self) -> u32 {
        self.preset().2
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty {0:?}, expected easy, medium or hard")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" => Ok(Difficulty::Easy),
            "medium" | "m" => Ok(Difficulty::Medium),
            "hard" | "h" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(Difficulty::Easy.preset(), (9, 9, 10));
        assert_eq!(Difficulty::Medium.preset(), (16, 16, 40));
        assert_eq!(Difficulty::Hard.preset(), (16, 30, 99));

        for difficulty in Difficulty::ALL {
            let dims = difficulty.dimensions();
            assert!(difficulty.mine_count() < dims.total_cells());
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("Easy".parse(), Ok(Difficulty::Easy));
        assert_eq!(" m ".parse(), Ok(Difficulty::Medium));
        assert_eq!("HARD".parse(), Ok(Difficulty::Hard));
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse(), Ok(difficulty));
        }
    }
}
