use alloc::collections::{BTreeSet, VecDeque};
use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Result of `press`, `cancel` and `toggle_flag`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Result of `release`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Exploded,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// The board engine: mine layout, per-cell state, and game outcome.
///
/// The input/render collaborator drives it through the command methods and
/// reads back through the queries; the engine never calls out. All commands
/// take grid coordinates, `0 <= x < width`, `0 <= y < height`, and return
/// [`GameError::OutOfBounds`] for anything else.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board<P> {
    config: BoardConfig,
    placer: P,
    mines: MineGrid,
    cells: Array2<CellState>,
    revealed: Saturating<CellCount>,
    flagged: Saturating<CellCount>,
    status: GameStatus,
    exploded: Option<Pos>,
}

impl<P: MinePlacer> Board<P> {
    /// Draws the first mine layout through `placer`; the placer is kept so
    /// [`Board::reset`] can draw the next one.
    pub fn new(config: BoardConfig, mut placer: P) -> Result<Self> {
        let mines = placer.place(&config);
        if mines.size() != config.size() {
            return Err(GameError::LayoutMismatch);
        }

        Ok(Self {
            config,
            placer,
            cells: Array2::default(mines.size().grid_index()),
            mines,
            revealed: Saturating(0),
            flagged: Saturating(0),
            status: GameStatus::InProgress,
            exploded: None,
        })
    }

    /// Discards the game in place: fresh layout, every cell hidden, status
    /// back to `InProgress`. Callable at any point of a game.
    pub fn reset(&mut self) {
        let mines = self.placer.place(&self.config);
        debug_assert_eq!(mines.size(), self.config.size());

        self.mines = mines;
        self.cells.fill(CellState::Hidden);
        self.revealed = Saturating(0);
        self.flagged = Saturating(0);
        self.status = GameStatus::InProgress;
        self.exploded = None;
        log::debug!("board reset, {} mines redrawn", self.mines.mine_count());
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn size(&self) -> Pos {
        self.mines.size()
    }

    pub fn width(&self) -> Coord {
        self.config.width
    }

    pub fn height(&self) -> Coord {
        self.config.height
    }

    pub fn total_mines(&self) -> CellCount {
        self.mines.mine_count()
    }

    /// Mines not yet flagged; negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.mines.mine_count() as isize) - (self.flagged.0 as isize)
    }

    /// The mine that ended the game, while the game is lost.
    pub fn exploded_at(&self) -> Option<Pos> {
        self.exploded
    }

    /// Whether a mine sits at `pos`. Replay and post-game tooling surface;
    /// live rendering should only need [`Board::cell_state`].
    pub fn mine_at(&self, pos: Pos) -> bool {
        self.mines.mine_at(pos)
    }

    /// Read-only render query.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is outside the grid. Coordinate mapping is the
    /// collaborator's contract, so a bad query is a programmer error, not a
    /// runtime condition.
    pub fn cell_state(&self, pos: Pos) -> CellState {
        self.cells[pos.grid_index()]
    }

    /// Button-down: arms a hidden cell so it renders pushed in. Anything
    /// else, including flagged cells, ignores the press.
    pub fn press(&mut self, pos: Pos) -> Result<MarkOutcome> {
        let pos = self.mines.check_pos(pos)?;

        if self.status.is_over() {
            return Ok(MarkOutcome::NoChange);
        }

        Ok(match self.cells[pos.grid_index()] {
            CellState::Hidden => {
                self.cells[pos.grid_index()] = CellState::Armed;
                MarkOutcome::Changed
            }
            _ => MarkOutcome::NoChange,
        })
    }

    /// Pointer left the cell while the button is held: disarms it.
    /// Idempotent, no-op on every state but `Armed`.
    pub fn cancel(&mut self, pos: Pos) -> Result<MarkOutcome> {
        let pos = self.mines.check_pos(pos)?;

        Ok(match self.cells[pos.grid_index()] {
            CellState::Armed => {
                self.cells[pos.grid_index()] = CellState::Hidden;
                MarkOutcome::Changed
            }
            _ => MarkOutcome::NoChange,
        })
    }

    pub fn toggle_flag(&mut self, pos: Pos) -> Result<MarkOutcome> {
        let pos = self.mines.check_pos(pos)?;

        if self.status.is_over() {
            return Ok(MarkOutcome::NoChange);
        }

        Ok(match self.cells[pos.grid_index()] {
            CellState::Hidden => {
                self.cells[pos.grid_index()] = CellState::Flagged;
                self.flagged += 1;
                MarkOutcome::Changed
            }
            CellState::Flagged => {
                self.cells[pos.grid_index()] = CellState::Hidden;
                self.flagged -= 1;
                MarkOutcome::Changed
            }
            _ => MarkOutcome::NoChange,
        })
    }

    /// Button-up: reveals the cell the press armed. Only an `Armed` cell
    /// reveals, so a press cancelled mid-drag releases as a no-op.
    pub fn release(&mut self, pos: Pos) -> Result<RevealOutcome> {
        let pos = self.mines.check_pos(pos)?;

        if self.status.is_over() || self.cells[pos.grid_index()] != CellState::Armed {
            return Ok(RevealOutcome::NoChange);
        }
        self.cells[pos.grid_index()] = CellState::Hidden;

        if self.mines.mine_at(pos) {
            return Ok(self.explode(pos));
        }

        self.flood_reveal(pos);

        Ok(if self.revealed == Saturating(self.mines.safe_cells()) {
            self.status = GameStatus::Won;
            log::debug!("all {} safe cells revealed, game won", self.revealed.0);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        })
    }

    fn explode(&mut self, pos: Pos) -> RevealOutcome {
        self.cells[pos.grid_index()] = CellState::Exploded;
        self.exploded = Some(pos);
        self.status = GameStatus::Lost;
        self.show_remaining_mines(pos);
        log::debug!("mine hit at {:?}, game lost", pos);
        RevealOutcome::Exploded
    }

    /// Flips every mine except the exploded one face up. Flags on safe cells
    /// survive the flip; flags on mines are replaced by the mine.
    fn show_remaining_mines(&mut self, exploded: Pos) {
        let (width, height) = self.size();
        for x in 0..width {
            for y in 0..height {
                let pos = (x, y);
                if pos != exploded && self.mines.mine_at(pos) {
                    self.cells[pos.grid_index()] = CellState::MineShown;
                }
            }
        }
    }

    /// Worklist reveal: opens `start`, then keeps expanding through
    /// zero-count cells. Numbered cells form the region boundary and flagged
    /// cells are never opened, so each cell is visited at most once and the
    /// loop is bounded by the grid size. A stale armed cell in the region
    /// opens like a hidden one.
    fn flood_reveal(&mut self, start: Pos) {
        let mut visited = BTreeSet::from([start]);
        let mut worklist = VecDeque::from([start]);

        while let Some(pos) = worklist.pop_front() {
            if !self.opens_in_flood(pos) {
                continue;
            }

            let count = self.mines.neighbor_mines(pos);
            self.cells[pos.grid_index()] = CellState::Revealed(count);
            self.revealed += 1;
            log::trace!("revealed {:?}, {} adjacent mines", pos, count);

            if count == 0 {
                worklist.extend(
                    moore_neighbors(pos, self.mines.size())
                        .filter(|&next| self.opens_in_flood(next))
                        .filter(|&next| visited.insert(next)),
                );
            }
        }
    }

    fn opens_in_flood(&self, pos: Pos) -> bool {
        matches!(
            self.cells[pos.grid_index()],
            CellState::Hidden | CellState::Armed
        )
    }
}

impl Board<PresetPlacer> {
    /// Board that replays the same layout on every reset. Test and replay
    /// surface; live games go through [`Board::new`] with a seeded
    /// [`RandomPlacer`].
    pub fn with_layout(mines: MineGrid) -> Self {
        let (width, height) = mines.size();
        Self {
            config: BoardConfig {
                width,
                height,
                mines: mines.mine_count(),
            },
            placer: PresetPlacer::new(mines.clone()),
            cells: Array2::default(mines.size().grid_index()),
            mines,
            revealed: Saturating(0),
            flagged: Saturating(0),
            status: GameStatus::InProgress,
            exploded: None,
        }
    }
}
