use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// The three preset boards, selecting one starts a fresh game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Normal, Self::Hard];

    pub const fn config(self) -> GameConfig {
        use Difficulty::*;
        match self {
            Easy => GameConfig::new_unchecked((9, 9), 10),
            Normal => GameConfig::new_unchecked((16, 16), 40),
            Hard => GameConfig::new_unchecked((30, 16), 99),
        }
    }

    pub const fn width(self) -> Coord {
        self.config().width()
    }

    pub const fn height(self) -> Coord {
        self.config().height()
    }

    pub const fn mines(self) -> CellCount {
        self.config().mines()
    }

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Normal => "normal",
            Hard => "hard",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GameError::InvalidDifficulty(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_classic_boards() {
        assert_eq!(Difficulty::Easy.config().size(), (9, 9));
        assert_eq!(Difficulty::Easy.mines(), 10);
        assert_eq!(Difficulty::Normal.config().size(), (16, 16));
        assert_eq!(Difficulty::Normal.mines(), 40);
        assert_eq!((Difficulty::Hard.width(), Difficulty::Hard.height()), (30, 16));
        assert_eq!(Difficulty::Hard.mines(), 99);
    }

    #[test]
    fn presets_pass_validation() {
        for difficulty in Difficulty::ALL {
            let config = difficulty.config();
            assert_eq!(GameConfig::new(config.size(), config.mines()), Ok(config));
        }
    }

    #[test]
    fn parse_and_display_round_trip_names() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" normal ".parse::<Difficulty>(), Ok(Difficulty::Normal));
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(
            "insane".parse::<Difficulty>(),
            Err(GameError::InvalidDifficulty("insane".into()))
        );
    }
}
