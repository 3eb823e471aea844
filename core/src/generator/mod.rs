use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait MineLayoutGenerator {
    fn generate(self, config: GameConfig) -> Result<HiddenBoard>;
}

/// Which cells around the first click are kept free of mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafeZone {
    /// The whole row and the whole column through the clicked cell.
    Cross,
    /// Only the clicked cell.
    Cell,
}

impl SafeZone {
    pub const fn contains(self, center: Pos, pos: Pos) -> bool {
        match self {
            Self::Cross => pos.0 == center.0 || pos.1 == center.1,
            Self::Cell => pos.0 == center.0 && pos.1 == center.1,
        }
    }
}

impl Default for SafeZone {
    fn default() -> Self {
        Self::Cross
    }
}

/// Ground truth for one game: every cell is either `Mine` or `Revealed(count)`.
///
/// There is no way to mutate it once built, the visible board only ever copies from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HiddenBoard {
    grid: CellGrid,
    mine_count: CellCount,
}

impl HiddenBoard {
    /// Builds a board with mines exactly at `mines`, mostly useful for tests and replaying known layouts.
    pub fn from_mines(size: Pos, mines: &[Pos]) -> Result<Self> {
        let mut grid = fill_board(size.0, size.1);
        for &pos in mines {
            let pos = grid.validate(pos)?;
            grid.set_state(pos, CellState::Mine);
        }
        compute_adjacency(&mut grid);
        Ok(Self::from_grid(grid))
    }

    fn from_grid(grid: CellGrid) -> Self {
        let mine_count = grid.count(|state| state == CellState::Mine);
        Self { grid, mine_count }
    }

    pub fn size(&self) -> Pos {
        self.grid.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn is_mine(&self, pos: Pos) -> bool {
        self.grid.state(pos) == CellState::Mine
    }

    pub fn state(&self, pos: Pos) -> CellState {
        self.grid.state(pos)
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Mine positions, row by row.
    pub fn mines(&self) -> impl Iterator<Item = Pos> {
        self.grid.positions().filter(move |&pos| self.is_mine(pos))
    }
}

/// Fresh all-`Hidden` grid.
pub fn fill_board(width: Coord, height: Coord) -> CellGrid {
    CellGrid::fill(width, height)
}

/// Marks `mine_count` random cells as `Mine`, never inside `safe_zone` around `exclude` and never twice on the same
/// cell.
///
/// Fails instead of sampling forever when there are not enough eligible cells.
pub fn place_mines<R: Rng + ?Sized>(
    board: &mut CellGrid,
    mine_count: CellCount,
    exclude: Pos,
    safe_zone: SafeZone,
    rng: &mut R,
) -> Result<()> {
    let exclude = board.validate(exclude)?;
    let eligible = board
        .positions()
        .filter(|&pos| board.state(pos) != CellState::Mine && !safe_zone.contains(exclude, pos))
        .count() as CellCount;
    if eligible < mine_count {
        log::warn!(
            "Cannot place {} mines, only {} cells are outside the {:?} safe zone at {:?}",
            mine_count,
            eligible,
            safe_zone,
            exclude
        );
        return Err(GameError::InvalidMineCount {
            mines: mine_count,
            cells: eligible,
        });
    }

    let (width, height) = board.size();
    let mut placed = 0;
    let mut rejected = 0u32;
    while placed < mine_count {
        let pos = (rng.random_range(0..width), rng.random_range(0..height));
        if board.state(pos) == CellState::Mine || safe_zone.contains(exclude, pos) {
            rejected += 1;
            continue;
        }
        board.set_state(pos, CellState::Mine);
        placed += 1;
    }
    log::trace!("Placed {} mines, {} samples rejected", placed, rejected);
    Ok(())
}

/// Turns every non-mine cell into `Revealed(n)` where `n` is the number of mines around it.
pub fn compute_adjacency(board: &mut CellGrid) {
    for pos in board.positions() {
        if board.state(pos) == CellState::Mine {
            continue;
        }
        let count = board
            .neighbors(pos)
            .filter(|&neighbor| board.state(neighbor) == CellState::Mine)
            .count();
        // at most 8 neighbors
        board.set_state(pos, CellState::Revealed(count as u8));
    }
}
