use serde::{Deserialize, Serialize};

use super::*;

/// Replays a fixed layout on every draw, for deterministic games and tests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresetPlacer {
    grid: MineGrid,
}

impl PresetPlacer {
    pub fn new(grid: MineGrid) -> Self {
        Self { grid }
    }
}

impl MinePlacer for PresetPlacer {
    fn place(&mut self, _config: &BoardConfig) -> MineGrid {
        self.grid.clone()
    }
}
