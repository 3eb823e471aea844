use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// Only starting a new game goes back to InProgress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Derives the next status from the visible board after an action.
    ///
    /// An exploded mine means the game is lost. Otherwise the game is won as soon as the cells left closed (hidden,
    /// flagged or questioned) are exactly as many as the mines, whether the flags are right or not.
    pub fn evaluate(self, visible: &VisibleBoard, mines: CellCount) -> Self {
        if self.is_finished() {
            return self;
        }

        let mut closed = 0;
        for cell in visible.grid().cells() {
            match cell.state() {
                CellState::MineExploded => return Self::Lost,
                state if state.is_closed() => closed += 1,
                _ => {}
            }
        }

        if closed == mines {
            Self::Won
        } else {
            Self::InProgress
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}
