use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Purely random layout, reproducible from `seed`, with a mine-free zone around the first click.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomGenerator {
    seed: u64,
    exclude: Pos,
    safe_zone: SafeZone,
}

impl RandomGenerator {
    pub fn new(seed: u64, exclude: Pos, safe_zone: SafeZone) -> Self {
        Self {
            seed,
            exclude,
            safe_zone,
        }
    }
}

impl MineLayoutGenerator for RandomGenerator {
    fn generate(self, config: GameConfig) -> Result<HiddenBoard> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut grid = fill_board(config.width(), config.height());
        place_mines(
            &mut grid,
            config.mines(),
            self.exclude,
            self.safe_zone,
            &mut rng,
        )?;
        compute_adjacency(&mut grid);

        let board = HiddenBoard::from_grid(grid);
        log::debug!(
            "Generated {:?} board with {} mines, seed {}, safe {:?} at {:?}",
            board.size(),
            board.mine_count(),
            self.seed,
            self.safe_zone,
            self.exclude
        );
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        let config = Difficulty::Hard.config();
        let first = RandomGenerator::new(42, (10, 5), SafeZone::Cross).generate(config);
        let second = RandomGenerator::new(42, (10, 5), SafeZone::Cross).generate(config);

        assert_eq!(first, second);
    }

    #[test]
    fn generates_every_preset() {
        for difficulty in Difficulty::ALL {
            let config = difficulty.config();
            let start = (config.width() - 1, 0);
            let board = RandomGenerator::new(7, start, SafeZone::Cross)
                .generate(config)
                .unwrap();

            assert_eq!(board.size(), config.size());
            assert_eq!(board.mine_count(), config.mines());
            assert!(board.mines().all(|(x, y)| x != start.0 && y != start.1));
            assert!(
                board
                    .grid()
                    .cells()
                    .all(|cell| cell.state() == CellState::Mine || cell.state().is_revealed())
            );
        }
    }
}
