use crate::{Cell, GridDimension, Position, Result};
use ndarray::Array2;
use rand::Rng;
use tracing::{debug, warn};

/// Owns every cell of one grid. Mines start unplaced and are placed once, on
/// the first reveal, never on the excluded position.
#[derive(Debug, Clone)]
pub struct Minefield {
    dimensions: GridDimension,
    mine_count: u32,
    cells: Array2<Cell>,
}

impl Minefield {
    pub fn new(dimensions: GridDimension, mine_count: u32) -> Self {
        let shape = (dimensions.height() as usize, dimensions.width() as usize);
        Self {
            dimensions,
            mine_count,
            cells: Array2::default(shape),
        }
    }

    pub fn dimensions(&self) -> GridDimension {
        self.dimensions
    }

    pub fn mine_count(&self) -> u32 {
        self.mine_count
    }

    /// Places `mine_count` mines using the thread-local RNG.
    ///
    /// `mine_count` must be smaller than the number of cells, otherwise no
    /// placement exists and this never returns.
    pub fn initialize_grid(&mut self, first_position: Position) -> Result<()> {
        self.initialize_grid_with(first_position, &mut rand::thread_rng())
    }

    /// Places `mine_count` mines by rejection sampling uniformly random
    /// positions, skipping `first_position` and cells that are already mined.
    pub fn initialize_grid_with<R: Rng>(
        &mut self,
        first_position: Position,
        rng: &mut R,
    ) -> Result<()> {
        self.dimensions.validate(first_position)?;

        if self.mine_count >= self.dimensions.total_cells() {
            warn!(
                mines = self.mine_count,
                cells = self.dimensions.total_cells(),
                "mine count leaves no safe cell, placement cannot terminate"
            );
        }

        let mut mines_placed = 0;
        while mines_placed < self.mine_count {
            let row = rng.gen_range(0..self.dimensions.height()) as i32;
            let col = rng.gen_range(0..self.dimensions.width()) as i32;
            let pos = Position::new(row, col);

            if pos == first_position {
                continue;
            }

            let cell = &mut self.cells[self.dimensions.index(pos)];
            if !cell.is_mined() {
                cell.arm();
                mines_placed += 1;
            }
        }

        debug!(
            mines = mines_placed,
            excluded = %first_position,
            "placed mines"
        );
        Ok(())
    }

    /// Arms a single cell. Used by fixed layouts; returns whether the cell was newly mined.
    pub fn place_mine(&mut self, pos: Position) -> Result<bool> {
        let cell = self.get_cell_mut(pos)?;
        if cell.is_mined() {
            return Ok(false);
        }
        cell.arm();
        Ok(true)
    }

    pub fn is_valid(&self, pos: Position) -> bool {
        self.dimensions.is_valid(pos)
    }

    pub fn get_cell(&self, pos: Position) -> Result<&Cell> {
        self.dimensions.validate(pos)?;
        Ok(&self.cells[self.dimensions.index(pos)])
    }

    pub fn get_cell_mut(&mut self, pos: Position) -> Result<&mut Cell> {
        self.dimensions.validate(pos)?;
        Ok(&mut self.cells[self.dimensions.index(pos)])
    }

    pub fn count_adjacent_mines(&self, pos: Position) -> Result<u8> {
        self.dimensions.validate(pos)?;
        Ok(self
            .dimensions
            .neighbors(pos)
            .filter(|p| self.cells[self.dimensions.index(*p)].is_mined())
            .count() as u8)
    }

    /// Number of mined cells actually present in the grid.
    pub fn placed_mines(&self) -> u32 {
        self.cells.iter().filter(|cell| cell.is_mined()).count() as u32
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.dimensions
            .positions()
            .map(move |pos| (pos, &self.cells[self.dimensions.index(pos)]))
    }
}

/// Fields compare equal on dimensions and mine placement; cell states are ignored.
impl PartialEq for Minefield {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions == other.dimensions
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| a.is_mined() == b.is_mined())
    }
}

impl Eq for Minefield {}
