use crate::{
    reveal::{reveal_cascade, reveal_single},
    Cell, CellState, Difficulty, FixedPlacer, GameError, GameStatistics, GridDimension,
    InvalidMove, MinePlacer, Minefield, Position, RandomPlacer, Result, Timer,
};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed(u32),
    HitMine,
    Won,
}

/// What a player may see of a cell. Mines and wrong flags show only once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Exploded,
    Mine,
    MisplacedFlag,
}

/// Win/loss tally across the resets of one [`Game`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionRecord {
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub best_win: Option<Duration>,
}

impl SessionRecord {
    fn record(&mut self, status: GameStatus, elapsed: Duration) {
        self.played += 1;
        match status {
            GameStatus::Won => {
                self.won += 1;
                self.best_win = Some(self.best_win.map_or(elapsed, |best| best.min(elapsed)));
            }
            GameStatus::Lost => self.lost += 1,
            GameStatus::NotStarted | GameStatus::InProgress => {}
        }
    }
}

#[derive(Debug)]
pub struct Game {
    dimensions: GridDimension,
    mine_count: u32,
    minefield: Minefield,
    statistics: GameStatistics,
    status: GameStatus,
    timer: Timer,
    first_reveal: bool,
    placer: Box<dyn MinePlacer>,
    triggered_mine: Option<Position>,
    record: SessionRecord,
}

impl Game {
    /// Random placement. Fails unless at least one cell stays safe.
    pub fn new(dimensions: GridDimension, mine_count: u32) -> Result<Self> {
        Self::with_placer(dimensions, mine_count, RandomPlacer::new())
    }

    /// Random placement from a fixed seed, for reproducible games.
    pub fn seeded(dimensions: GridDimension, mine_count: u32, seed: u64) -> Result<Self> {
        Self::with_placer(dimensions, mine_count, RandomPlacer::seeded(seed))
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::from_parts(
            difficulty.dimensions(),
            difficulty.mine_count(),
            Box::new(RandomPlacer::new()),
        )
    }

    pub fn with_placer(
        dimensions: GridDimension,
        mine_count: u32,
        placer: impl MinePlacer + 'static,
    ) -> Result<Self> {
        let cells = dimensions.total_cells();
        if mine_count >= cells {
            return Err(GameError::TooManyMines {
                mines: mine_count,
                cells,
            });
        }
        Ok(Self::from_parts(dimensions, mine_count, Box::new(placer)))
    }

    /// Game over a predetermined layout. The first reveal is not protected.
    pub fn with_layout(dimensions: GridDimension, layout: FixedPlacer) -> Result<Self> {
        layout.validate(dimensions)?;
        let mine_count = layout.mines().len() as u32;
        Self::with_placer(dimensions, mine_count, layout)
    }

    /// Parses an ASCII layout, see [`FixedPlacer::parse`].
    pub fn from_layout<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let (dimensions, layout) = FixedPlacer::parse(rows)?;
        Self::with_layout(dimensions, layout)
    }

    fn from_parts(dimensions: GridDimension, mine_count: u32, placer: Box<dyn MinePlacer>) -> Self {
        Self {
            dimensions,
            mine_count,
            minefield: Minefield::new(dimensions, mine_count),
            statistics: GameStatistics::new(mine_count, dimensions.total_cells()),
            status: GameStatus::NotStarted,
            timer: Timer::new(),
            first_reveal: true,
            placer,
            triggered_mine: None,
            record: SessionRecord::default(),
        }
    }

    pub fn reveal(&mut self, pos: Position) -> Result<RevealOutcome> {
        self.dimensions.validate(pos)?;

        if self.first_reveal {
            self.start(pos)?;
        }

        if self.status.is_finished() {
            return Err(InvalidMove::GameOver.into());
        }

        let cell = self.minefield.get_cell(pos)?;
        if cell.is_flagged() {
            return Err(InvalidMove::CellFlagged.into());
        }

        if cell.is_mined() {
            if !reveal_single(&mut self.minefield, pos)? {
                return Ok(RevealOutcome::NoChange);
            }
            self.statistics.increment_revealed(1);
            self.triggered_mine = Some(pos);
            self.finish(GameStatus::Lost);
            return Ok(RevealOutcome::HitMine);
        }

        let revealed = reveal_cascade(&mut self.minefield, pos);
        self.statistics.increment_revealed(revealed);

        if self.statistics.is_game_won() {
            self.finish(GameStatus::Won);
            Ok(RevealOutcome::Won)
        } else if revealed == 0 {
            Ok(RevealOutcome::NoChange)
        } else {
            Ok(RevealOutcome::Revealed(revealed))
        }
    }

    /// Toggles the flag on a hidden cell and returns the new flag state.
    pub fn flag(&mut self, pos: Position) -> Result<bool> {
        self.dimensions.validate(pos)?;

        if self.first_reveal {
            return Err(InvalidMove::FirstMoveMustReveal.into());
        }
        if self.status.is_finished() {
            return Err(InvalidMove::GameOver.into());
        }

        let cell = self.minefield.get_cell_mut(pos)?;
        if cell.is_revealed() {
            return Err(InvalidMove::CellRevealed.into());
        }

        cell.toggle_flag();
        let flagged = cell.is_flagged();
        if flagged {
            self.statistics.increment_flags();
        } else {
            self.statistics.decrement_flags();
        }
        Ok(flagged)
    }

    pub fn reset(&mut self) {
        self.minefield = Minefield::new(self.dimensions, self.mine_count);
        self.statistics.reset();
        self.status = GameStatus::NotStarted;
        self.timer.reset();
        self.first_reveal = true;
        self.triggered_mine = None;
        debug!("game reset");
    }

    fn start(&mut self, first: Position) -> Result<()> {
        let mut minefield = Minefield::new(self.dimensions, self.mine_count);
        self.placer.place(&mut minefield, first)?;

        let placed = minefield.placed_mines();
        if placed != self.mine_count {
            return Err(GameError::PlacementMismatch {
                expected: self.mine_count,
                placed,
            });
        }

        self.minefield = minefield;
        self.status = GameStatus::InProgress;
        self.timer.start();
        self.first_reveal = false;
        debug!(first = %first, mines = self.mine_count, "game started");
        Ok(())
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        self.timer.stop();
        self.record.record(status, self.timer.elapsed());
        debug!(
            status = ?status,
            revealed = self.statistics.revealed_cells(),
            elapsed_ms = self.timer.elapsed_millis() as u64,
            "game finished"
        );
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn dimensions(&self) -> GridDimension {
        self.dimensions
    }

    pub fn mine_count(&self) -> u32 {
        self.mine_count
    }

    pub fn statistics(&self) -> &GameStatistics {
        &self.statistics
    }

    pub fn revealed_count(&self) -> u32 {
        self.statistics.revealed_cells()
    }

    pub fn flags_placed(&self) -> u32 {
        self.statistics.flags_placed()
    }

    pub fn mines_left(&self) -> i64 {
        self.statistics.mines_left()
    }

    pub fn unrevealed_count(&self) -> u32 {
        self.statistics.unrevealed_count()
    }

    pub fn safe_cells(&self) -> u32 {
        self.statistics.safe_cells()
    }

    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    pub fn elapsed_millis(&self) -> u128 {
        self.timer.elapsed_millis()
    }

    pub fn minefield(&self) -> &Minefield {
        &self.minefield
    }

    pub fn cell(&self, pos: Position) -> Result<&Cell> {
        self.minefield.get_cell(pos)
    }

    pub fn is_revealed(&self, pos: Position) -> Result<bool> {
        Ok(self.cell(pos)?.is_revealed())
    }

    pub fn is_flagged(&self, pos: Position) -> Result<bool> {
        Ok(self.cell(pos)?.is_flagged())
    }

    /// Meant for display once the game is over.
    pub fn is_mined(&self, pos: Position) -> Result<bool> {
        Ok(self.cell(pos)?.is_mined())
    }

    /// Adjacent mine count of a revealed cell.
    pub fn adjacent_mines(&self, pos: Position) -> Result<u8> {
        if !self.cell(pos)?.is_revealed() {
            return Err(InvalidMove::CellHidden.into());
        }
        self.minefield.count_adjacent_mines(pos)
    }

    pub fn cell_view(&self, pos: Position) -> Result<CellView> {
        let cell = self.cell(pos)?;
        let finished = self.status.is_finished();

        Ok(match cell.state() {
            CellState::Exploded => CellView::Exploded,
            CellState::Revealed => CellView::Revealed(self.adjacent_mines(pos)?),
            CellState::Flagged if finished && !cell.is_mined() => CellView::MisplacedFlag,
            CellState::Flagged => CellView::Flagged,
            CellState::Hidden if finished && cell.is_mined() => CellView::Mine,
            CellState::Hidden => CellView::Hidden,
        })
    }

    pub fn triggered_mine(&self) -> Option<Position> {
        self.triggered_mine
    }

    pub fn record(&self) -> SessionRecord {
        self.record
    }
}
