use serde::{Deserialize, Serialize};

pub use difficulty::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use reveal::*;
pub use session::*;
pub use status::*;
pub use types::*;

mod difficulty;
mod error;
mod generator;
mod grid;
mod reveal;
mod session;
mod status;
mod types;

/// Board dimensions and mine count, validated when constructed or deserialized.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    size: Pos,
    mines: CellCount,
}

#[derive(Deserialize)]
struct RawGameConfig {
    size: Pos,
    mines: CellCount,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.size, raw.mines)
    }
}

impl GameConfig {
    pub(crate) const fn new_unchecked(size: Pos, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Rejects boards with no cells and mine counts that would leave no safe cell.
    pub fn new(size: Pos, mines: CellCount) -> Result<Self> {
        let cells = area(size.0, size.1);
        if cells == 0 || mines >= cells {
            return Err(GameError::InvalidMineCount { mines, cells });
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn size(&self) -> Pos {
        self.size
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

/// Outcome of cycling the mark on a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    /// Whether the visible board needs to be repainted
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Outcome of revealing a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// Safe reveal, carries how many cells were opened (more than one after a flood-fill)
    Revealed(CellCount),
    HitMine,
}

impl RevealOutcome {
    /// Whether the visible board needs to be repainted
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed(_) => true,
            HitMine => true,
        }
    }
}
