use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;
use crate::types::ToNdIndex;

/// Everything a cell can show, on either board.
///
/// The hidden board only ever holds `Mine` and `Revealed(count)`. The visible board starts fully `Hidden`, gets
/// `Flagged`/`Questioned` marks from the player, copies `Revealed(count)` from the hidden board and uses the remaining
/// variants once a mine goes off.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Flagged,
    Questioned,
    Revealed(u8),
    Mine,
    MineExploded,
    MineWrong,
}

impl CellState {
    /// Not opened yet, possibly carrying a player mark
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged | Self::Questioned)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Revealed(count) => Some(count),
            _ => None,
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pos: Pos,
    state: CellState,
}

impl Cell {
    pub const fn new(pos: Pos) -> Self {
        Self {
            pos,
            state: CellState::Hidden,
        }
    }

    pub const fn pos(&self) -> Pos {
        self.pos
    }

    pub const fn x(&self) -> Coord {
        self.pos.0
    }

    pub const fn y(&self) -> Coord {
        self.pos.1
    }

    pub const fn state(&self) -> CellState {
        self.state
    }
}

/// Fixed-size rectangle of cells indexed by `(x, y)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellGrid {
    cells: Array2<Cell>,
}

impl CellGrid {
    /// New grid with every cell `Hidden`, each cell knowing its own position.
    pub fn fill(width: Coord, height: Coord) -> Self {
        let cells = Array2::from_shape_fn((width as usize, height as usize), |(x, y)| {
            Cell::new((x as Coord, y as Coord))
        });
        Self { cells }
    }

    pub fn size(&self) -> Pos {
        let (width, height) = self.cells.dim();
        // built from `Coord` dimensions in `fill`
        (width as Coord, height as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (width, height) = self.size();
        area(width, height)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        let (width, height) = self.size();
        pos.0 < width && pos.1 < height
    }

    pub fn validate(&self, pos: Pos) -> Result<Pos> {
        if self.contains(pos) {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds(pos))
        }
    }

    pub fn cell(&self, pos: Pos) -> &Cell {
        &self.cells[pos.to_nd_index()]
    }

    pub fn state(&self, pos: Pos) -> CellState {
        self.cells[pos.to_nd_index()].state
    }

    pub(crate) fn set_state(&mut self, pos: Pos, state: CellState) {
        self.cells[pos.to_nd_index()].state = state;
    }

    /// All positions, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let (width, height) = self.size();
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.positions().map(move |pos| self.cell(pos))
    }

    pub fn neighbors(&self, pos: Pos) -> Neighbors {
        Neighbors::new(pos, self.size())
    }

    pub fn count(&self, predicate: impl Fn(CellState) -> bool) -> CellCount {
        let count = self.cells.iter().filter(|cell| predicate(cell.state)).count();
        // never more than `total_cells`, which fits
        count as CellCount
    }
}

impl Index<Pos> for CellGrid {
    type Output = Cell;

    fn index(&self, pos: Pos) -> &Self::Output {
        self.cell(pos)
    }
}
