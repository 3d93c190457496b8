use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Uniform placement by rejection sampling: draw positions at random and
/// discard duplicates until the requested number of distinct cells is mined.
///
/// There is no exclusion zone around the first reveal, so the opening click
/// can lose the game.
#[derive(Clone, Debug)]
pub struct RandomPlacer {
    rng: SmallRng,
}

impl RandomPlacer {
    /// The caller supplies the entropy; the engine itself never touches an
    /// OS randomness source.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MinePlacer for RandomPlacer {
    fn place(&mut self, config: &BoardConfig) -> MineGrid {
        let total = config.total_cells();
        let mut requested = config.mines;
        if requested >= total {
            // the trait has no error channel; a validated BoardConfig never
            // gets here
            log::warn!(
                "requested {} mines but the grid only fits {}, capping",
                requested,
                total
            );
            requested = total.saturating_sub(1);
        }

        let mut mask: Array2<bool> = Array2::default(config.size().grid_index());
        let mut placed: CellCount = 0;
        let mut draws: u64 = 0;

        while placed < requested {
            let pos = (
                self.rng.random_range(0..config.width),
                self.rng.random_range(0..config.height),
            );
            draws += 1;

            let cell = &mut mask[pos.grid_index()];
            if *cell {
                continue;
            }
            *cell = true;
            placed += 1;
        }
        log::debug!("placed {} mines in {} draws", placed, draws);

        MineGrid::from_mask(mask)
    }
}
