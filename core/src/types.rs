/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Board position `(x, y)`, `x` is the column and `y` the row.
pub type Pos = (Coord, Coord);

pub(crate) trait ToNdIndex {
    fn to_nd_index(self) -> [usize; 2];
}

impl ToNdIndex for Pos {
    fn to_nd_index(self) -> [usize; 2] {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a `width × height` board.
pub const fn area(width: Coord, height: Coord) -> CellCount {
    (width as CellCount).saturating_mul(height as CellCount)
}

/// Walks the 3×3 block around `center` in reading order, skipping the center itself and anything past the board
/// edge.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Pos,
    size: Pos,
    step: u8,
}

impl Neighbors {
    const CENTER_STEP: u8 = 4;
    const LAST_STEP: u8 = 9;

    pub(crate) fn new(center: Pos, size: Pos) -> Self {
        Self {
            center,
            size,
            step: 0,
        }
    }

    fn offset(axis: Coord, delta: u8, limit: Coord) -> Option<Coord> {
        // delta is 0, 1 or 2 standing for -1, 0 and +1
        let moved = (axis as u16 + delta as u16).checked_sub(1)?;
        (moved < limit as u16).then_some(moved as Coord)
    }
}

impl Iterator for Neighbors {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.step < Self::LAST_STEP {
            let step = self.step;
            self.step += 1;
            if step == Self::CENTER_STEP {
                continue;
            }
            let x = Self::offset(self.center.0, step % 3, self.size.0);
            let y = Self::offset(self.center.1, step / 3, self.size.1);
            if let (Some(x), Some(y)) = (x, y) {
                return Some((x, y));
            }
        }
        None
    }
}
