use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::*;

/// One player's game from the first click to the last, and every restart after that.
///
/// The mine layout is only generated on the first reveal so that it can be kept away from the clicked cell.
#[derive(Clone, Debug)]
pub struct GameSession {
    difficulty: Difficulty,
    visible: VisibleBoard,
    hidden: Option<HiddenBoard>,
    status: GameStatus,
    safe_zone: SafeZone,
    rng: SmallRng,
    /// Whether the last action changed the visible board
    updated: bool,
}

impl GameSession {
    /// New session seeded from OS entropy
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_seed(difficulty, rand::random())
    }

    /// New session whose layouts are fully determined by `seed` and the clicks made
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            visible: VisibleBoard::new(difficulty.width(), difficulty.height()),
            hidden: None,
            status: Default::default(),
            safe_zone: Default::default(),
            rng: SmallRng::seed_from_u64(seed),
            updated: true,
        }
    }

    pub fn with_safe_zone(mut self, safe_zone: SafeZone) -> Self {
        self.safe_zone = safe_zone;
        self
    }

    /// Discards both boards and starts over at `difficulty`.
    pub fn start_new_game(&mut self, difficulty: Difficulty) {
        log::debug!("Starting {} game", difficulty);
        self.difficulty = difficulty;
        self.visible = VisibleBoard::new(difficulty.width(), difficulty.height());
        self.hidden = None;
        self.status = GameStatus::InProgress;
        self.updated = true;
    }

    /// Restarts at the current difficulty
    pub fn new_game(&mut self) {
        self.start_new_game(self.difficulty);
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.start_new_game(difficulty);
    }

    /// Primary click at `(x, y)`
    pub fn handle_reveal(&mut self, x: Coord, y: Coord) -> Result<GameStatus> {
        let pos = self.visible.validate((x, y))?;
        if self.status.is_finished() {
            log::debug!("Game already ended, ignoring reveal at {:?}", pos);
            self.updated = false;
            return Ok(self.status);
        }

        if self.hidden.is_none() {
            let board = self.generate(pos)?;
            self.hidden = Some(board);
            self.status = GameStatus::InProgress;
        }
        if let Some(hidden) = &self.hidden {
            let outcome = self.visible.reveal(hidden, pos)?;
            log::debug!("Reveal at {:?}: {:?}", pos, outcome);
            self.updated = outcome.has_update();
        }

        Ok(self.refresh_status())
    }

    /// Secondary click at `(x, y)`, does nothing until the first reveal.
    pub fn handle_flag_cycle(&mut self, x: Coord, y: Coord) -> Result<GameStatus> {
        let pos = self.visible.validate((x, y))?;
        if self.hidden.is_none() || self.status.is_finished() {
            log::debug!("Ignoring mark at {:?}", pos);
            self.updated = false;
            return Ok(self.status);
        }

        let outcome = self.visible.cycle_mark(pos)?;
        log::debug!("Mark at {:?}: {:?}", pos, outcome);
        self.updated = outcome.has_update();
        Ok(self.refresh_status())
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Read-only view for painting
    pub fn visible(&self) -> &VisibleBoard {
        &self.visible
    }

    /// Ground truth, `None` until the first reveal. Meant for tooling and tests, not for painting.
    pub fn hidden(&self) -> Option<&HiddenBoard> {
        self.hidden.as_ref()
    }

    /// Whether the last action changed the visible board, so the UI can skip repainting.
    /// Out-of-bounds actions leave it untouched.
    pub fn has_update(&self) -> bool {
        self.updated
    }

    pub fn is_generated(&self) -> bool {
        self.hidden.is_some()
    }

    pub fn safe_zone(&self) -> SafeZone {
        self.safe_zone
    }

    /// How many mines have not been flagged yet, negative when over-flagged
    pub fn mines_left(&self) -> isize {
        (self.difficulty.mines() as isize) - (self.visible.flagged_count() as isize)
    }

    fn generate(&mut self, first_click: Pos) -> Result<HiddenBoard> {
        let seed = self.rng.random();
        RandomGenerator::new(seed, first_click, self.safe_zone).generate(self.difficulty.config())
    }

    fn refresh_status(&mut self) -> GameStatus {
        let previous = self.status;
        self.status = previous.evaluate(&self.visible, self.difficulty.mines());
        if self.status != previous {
            log::debug!("Game {:?} -> {:?}", previous, self.status);
        }
        self.status
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Default::default())
    }
}
