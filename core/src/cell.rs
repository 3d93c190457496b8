use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
///
/// Mine cells never reach `Revealed`: their only terminal states are
/// `Exploded` and `MineShown`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    /// Pointer button held down over the cell; reverts to `Hidden` on cancel.
    Armed,
    Flagged,
    /// Permanently opened, carries the adjacent mine count `0..=8`.
    Revealed(u8),
    /// The one mine that ended the game.
    Exploded,
    /// Every other mine, shown once the game is lost.
    MineShown,
}

impl CellState {
    /// Whether the cell still renders as an unopened button.
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Hidden | Self::Armed | Self::Flagged)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}
