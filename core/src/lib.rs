#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use placer::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod placer;
mod types;

/// Fixed per-game parameters. Changing any of them means constructing a new
/// [`Board`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    /// Rejects degenerate configurations instead of clamping them: zero
    /// dimensions and `mines >= width * height` never reach a running game.
    /// A board with zero mines is valid.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::ZeroSize);
        }
        if mines >= area(width, height) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self {
            width,
            height,
            mines,
        })
    }

    pub const fn size(&self) -> Pos {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.width, self.height)
    }
}

/// Mine mask for a single game. Drawn once per game by a [`MinePlacer`] and
/// never mutated afterwards; the [`Board`] only reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineGrid {
    mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineGrid {
    pub fn from_mask(mask: Array2<bool>) -> Self {
        let mine_count = mask
            .iter()
            .filter(|&&mined| mined)
            .count()
            .try_into()
            .unwrap();
        Self { mask, mine_count }
    }

    /// Grid with mines at exactly the given positions. Deterministic replay
    /// and test surface.
    pub fn from_mine_positions(size: Pos, mines: &[Pos]) -> Result<Self> {
        let mut mask: Array2<bool> = Array2::default(size.grid_index());

        for &pos in mines {
            if pos.0 >= size.0 || pos.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mask[pos.grid_index()] = true;
        }

        Ok(Self::from_mask(mask))
    }

    pub fn size(&self) -> Pos {
        let dim = self.mask.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn check_pos(&self, pos: Pos) -> Result<Pos> {
        let (width, height) = self.size();
        if pos.0 < width && pos.1 < height {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn total_cells(&self) -> CellCount {
        self.mask.len().try_into().unwrap()
    }

    pub fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn mine_at(&self, pos: Pos) -> bool {
        self[pos]
    }

    /// Mines in the Moore neighborhood of `pos`, the count a revealed cell
    /// displays.
    pub fn neighbor_mines(&self, pos: Pos) -> u8 {
        moore_neighbors(pos, self.size())
            .filter(|&neighbor| self[neighbor])
            .count()
            .try_into()
            .unwrap()
    }
}

impl Index<Pos> for MineGrid {
    type Output = bool;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.mask[pos.grid_index()]
    }
}
