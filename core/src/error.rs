use thiserror::Error;

use crate::{CellCount, Pos};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates {0:?} are outside the board")]
    OutOfBounds(Pos),
    #[error("Cannot place {mines} mines in {cells} available cells")]
    InvalidMineCount { mines: CellCount, cells: CellCount },
    #[error("Unknown difficulty {0:?}, expected easy, normal or hard")]
    InvalidDifficulty(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
