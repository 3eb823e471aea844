use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::*;
use crate::types::ToNdIndex;

/// What the player sees. Mutated by every action, painted by the UI through a shared reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisibleBoard {
    grid: CellGrid,
}

impl VisibleBoard {
    pub fn new(width: Coord, height: Coord) -> Self {
        Self {
            grid: fill_board(width, height),
        }
    }

    pub fn size(&self) -> Pos {
        self.grid.size()
    }

    pub fn validate(&self, pos: Pos) -> Result<Pos> {
        self.grid.validate(pos)
    }

    pub fn state(&self, pos: Pos) -> CellState {
        self.grid.state(pos)
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Cells still closed, marked or not
    pub fn closed_count(&self) -> CellCount {
        self.grid.count(CellState::is_closed)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.grid.count(|state| state == CellState::Flagged)
    }

    /// Left click: open a cell, flood-filling from empty ones.
    ///
    /// Flagged and already opened cells are left alone.
    pub fn reveal(&mut self, hidden: &HiddenBoard, pos: Pos) -> Result<RevealOutcome> {
        use CellState::*;

        let pos = self.grid.validate(pos)?;
        debug_assert_eq!(hidden.size(), self.size(), "boards must line up");

        match self.grid.state(pos) {
            Hidden | Questioned => {}
            Flagged => {
                log::debug!("Ignoring reveal of flagged cell at {:?}", pos);
                return Ok(RevealOutcome::NoChange);
            }
            _ => return Ok(RevealOutcome::NoChange),
        }

        Ok(match hidden.state(pos) {
            Mine => {
                log::debug!("Mine hit at {:?}", pos);
                self.explode(hidden, pos);
                RevealOutcome::HitMine
            }
            Revealed(0) => RevealOutcome::Revealed(self.flood(hidden, pos)),
            truth => {
                log::debug!("Open cell at {:?}: {:?}", pos, truth);
                self.grid.set_state(pos, truth);
                RevealOutcome::Revealed(1)
            }
        })
    }

    /// Right click: `Hidden → Flagged → Questioned → Hidden`, anything else is left alone.
    pub fn cycle_mark(&mut self, pos: Pos) -> Result<MarkOutcome> {
        use CellState::*;

        let pos = self.grid.validate(pos)?;
        let next = match self.grid.state(pos) {
            Hidden => Flagged,
            Flagged => Questioned,
            Questioned => Hidden,
            _ => return Ok(MarkOutcome::NoChange),
        };
        self.grid.set_state(pos, next);
        Ok(MarkOutcome::Changed)
    }

    /// Opens the empty cell at `origin` and everything reachable from it through other empty cells, plus the numbered
    /// cells bordering that region. Marks inside the region are cleared.
    fn flood(&mut self, hidden: &HiddenBoard, origin: Pos) -> CellCount {
        let mut queued: Array2<bool> = Array2::default(self.size().to_nd_index());
        let mut to_visit = VecDeque::from([origin]);
        queued[origin.to_nd_index()] = true;
        let mut opened = 0;

        while let Some(pos) = to_visit.pop_front() {
            let truth = hidden.state(pos);
            self.grid.set_state(pos, truth);
            opened += 1;
            log::trace!("Flood opened cell at {:?}: {:?}", pos, truth);

            if truth != CellState::Revealed(0) {
                continue;
            }

            for next in self.grid.neighbors(pos) {
                if queued[next.to_nd_index()] {
                    continue;
                }
                queued[next.to_nd_index()] = true;
                if hidden.is_mine(next) || self.grid.state(next).is_revealed() {
                    continue;
                }
                to_visit.push_back(next);
            }
        }

        log::debug!("Flood-fill from {:?} opened {} cells", origin, opened);
        opened
    }

    /// Game over: shows every mine and every flag that was not on one.
    fn explode(&mut self, hidden: &HiddenBoard, origin: Pos) {
        use CellState::*;

        self.grid.set_state(origin, MineExploded);
        for pos in hidden.grid().positions() {
            if pos == origin {
                continue;
            }
            match (self.grid.state(pos), hidden.is_mine(pos)) {
                (_, true) => self.grid.set_state(pos, Mine),
                (Flagged, false) => self.grid.set_state(pos, MineWrong),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(size: Pos, mines: &[Pos]) -> (HiddenBoard, VisibleBoard) {
        let hidden = HiddenBoard::from_mines(size, mines).unwrap();
        let visible = VisibleBoard::new(size.0, size.1);
        (hidden, visible)
    }

    #[test]
    fn reveal_numbered_cell_opens_only_that_cell() {
        let (hidden, mut visible) = setup((3, 3), &[(0, 0)]);

        let outcome = visible.reveal(&hidden, (1, 1)).unwrap();

        assert_eq!(outcome, RevealOutcome::Revealed(1));
        assert_eq!(visible.state((1, 1)), CellState::Revealed(1));
        assert_eq!(visible.closed_count(), 8);
    }

    #[test]
    fn reveal_flood_fill_opens_zero_region_and_border() {
        let (hidden, mut visible) = setup((5, 5), &[(4, 4)]);

        let outcome = visible.reveal(&hidden, (0, 0)).unwrap();

        assert_eq!(outcome, RevealOutcome::Revealed(24));
        assert_eq!(visible.state((0, 0)), CellState::Revealed(0));
        assert_eq!(visible.state((3, 3)), CellState::Revealed(1));
        assert_eq!(visible.state((4, 3)), CellState::Revealed(1));
        assert_eq!(visible.state((4, 4)), CellState::Hidden);
        assert_eq!(visible.closed_count(), 1);
    }

    #[test]
    fn flood_fill_stops_at_numbered_cells() {
        // a wall of mines down column 2 splits the board
        let (hidden, mut visible) = setup((5, 3), &[(2, 0), (2, 1), (2, 2)]);

        let outcome = visible.reveal(&hidden, (0, 1)).unwrap();

        assert_eq!(outcome, RevealOutcome::Revealed(6));
        for y in 0..3 {
            assert_eq!(visible.state((0, y)), CellState::Revealed(0));
            assert!(visible.state((1, y)).adjacent_mines().unwrap() >= 2);
            assert_eq!(visible.state((3, y)), CellState::Hidden);
            assert_eq!(visible.state((4, y)), CellState::Hidden);
        }
    }

    #[test]
    fn flood_fill_matches_connected_region_on_random_board() {
        let hidden = RandomGenerator::new(11, (8, 8), SafeZone::Cross)
            .generate(Difficulty::Normal.config())
            .unwrap();
        let start = hidden
            .grid()
            .positions()
            .find(|&pos| hidden.state(pos) == CellState::Revealed(0))
            .unwrap();
        let mut visible = VisibleBoard::new(16, 16);

        visible.reveal(&hidden, start).unwrap();

        // independent check: grow the zero region and its border one ring at a time
        let mut expected = vec![start];
        let mut i = 0;
        while i < expected.len() {
            let pos = expected[i];
            i += 1;
            if hidden.state(pos) != CellState::Revealed(0) {
                continue;
            }
            for next in hidden.grid().neighbors(pos) {
                if !hidden.is_mine(next) && !expected.contains(&next) {
                    expected.push(next);
                }
            }
        }
        for pos in hidden.grid().positions() {
            assert_eq!(
                visible.state(pos).is_revealed(),
                expected.contains(&pos),
                "mismatch at {:?}",
                pos
            );
        }
    }

    #[test]
    fn flood_fill_clears_marks_in_region() {
        let (hidden, mut visible) = setup((5, 5), &[(4, 4)]);
        visible.cycle_mark((2, 2)).unwrap();
        visible.cycle_mark((0, 4)).unwrap();
        visible.cycle_mark((0, 4)).unwrap();

        visible.reveal(&hidden, (0, 0)).unwrap();

        assert_eq!(visible.state((2, 2)), CellState::Revealed(0));
        assert_eq!(visible.state((0, 4)), CellState::Revealed(0));
    }

    #[test]
    fn reveal_ignores_flagged_and_opened_cells() {
        let (hidden, mut visible) = setup((3, 3), &[(0, 0)]);
        visible.cycle_mark((0, 0)).unwrap();

        assert_eq!(visible.reveal(&hidden, (0, 0)), Ok(RevealOutcome::NoChange));
        assert_eq!(visible.state((0, 0)), CellState::Flagged);

        visible.reveal(&hidden, (2, 2)).unwrap();
        assert_eq!(visible.reveal(&hidden, (2, 2)), Ok(RevealOutcome::NoChange));
    }

    #[test]
    fn reveal_opens_questioned_cell() {
        let (hidden, mut visible) = setup((3, 3), &[(0, 0)]);
        visible.cycle_mark((1, 0)).unwrap();
        visible.cycle_mark((1, 0)).unwrap();
        assert_eq!(visible.state((1, 0)), CellState::Questioned);

        visible.reveal(&hidden, (1, 0)).unwrap();

        assert_eq!(visible.state((1, 0)), CellState::Revealed(1));
    }

    #[test]
    fn hitting_mine_shows_mines_and_wrong_flags() {
        let (hidden, mut visible) = setup((3, 3), &[(0, 0), (2, 2), (2, 0)]);
        visible.cycle_mark((1, 1)).unwrap();
        visible.cycle_mark((2, 2)).unwrap();
        visible.cycle_mark((0, 2)).unwrap();
        visible.cycle_mark((0, 2)).unwrap();

        let outcome = visible.reveal(&hidden, (0, 0)).unwrap();

        assert_eq!(outcome, RevealOutcome::HitMine);
        assert_eq!(visible.state((0, 0)), CellState::MineExploded);
        assert_eq!(visible.state((2, 0)), CellState::Mine);
        assert_eq!(visible.state((2, 2)), CellState::Mine);
        assert_eq!(visible.state((1, 1)), CellState::MineWrong);
        assert_eq!(visible.state((0, 2)), CellState::Questioned);
        assert_eq!(visible.state((1, 0)), CellState::Hidden);
    }

    #[test]
    fn cycle_mark_returns_after_three_clicks() {
        let mut visible = VisibleBoard::new(2, 2);

        visible.cycle_mark((1, 0)).unwrap();
        assert_eq!(visible.state((1, 0)), CellState::Flagged);
        assert_eq!(visible.flagged_count(), 1);
        visible.cycle_mark((1, 0)).unwrap();
        assert_eq!(visible.state((1, 0)), CellState::Questioned);
        assert_eq!(visible.flagged_count(), 0);
        visible.cycle_mark((1, 0)).unwrap();
        assert_eq!(visible.state((1, 0)), CellState::Hidden);
    }

    #[test]
    fn cycle_mark_ignores_opened_cells() {
        let (hidden, mut visible) = setup((3, 3), &[(0, 0)]);
        visible.reveal(&hidden, (1, 1)).unwrap();

        assert_eq!(visible.cycle_mark((1, 1)), Ok(MarkOutcome::NoChange));
        assert_eq!(visible.state((1, 1)), CellState::Revealed(1));
    }

    #[test]
    fn out_of_bounds_actions_do_not_mutate() {
        let (hidden, mut visible) = setup((3, 3), &[(0, 0)]);
        let before = visible.clone();

        assert_eq!(
            visible.reveal(&hidden, (3, 1)),
            Err(GameError::OutOfBounds((3, 1)))
        );
        assert_eq!(visible.cycle_mark((0, 7)), Err(GameError::OutOfBounds((0, 7))));
        assert_eq!(visible, before);
    }
}
