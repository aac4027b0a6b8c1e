use crate::{GameError, GridDimension, Minefield, Position, Result};
use rand::{rngs::StdRng, SeedableRng};
use std::fmt::Debug;

/// Strategy that arms a freshly created minefield on the first reveal.
pub trait MinePlacer: Debug {
    fn place(&mut self, field: &mut Minefield, first: Position) -> Result<()>;
}

/// Uniformly random placement that never mines the first revealed cell.
#[derive(Debug, Clone)]
pub struct RandomPlacer {
    rng: StdRng,
}

impl RandomPlacer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlacer {
    fn default() -> Self {
        Self::new()
    }
}

impl MinePlacer for RandomPlacer {
    fn place(&mut self, field: &mut Minefield, first: Position) -> Result<()> {
        field.initialize_grid_with(first, &mut self.rng)
    }
}

/// Predetermined layout, placed verbatim regardless of where the first reveal lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPlacer {
    mines: Vec<Position>,
}

impl FixedPlacer {
    pub fn new(mines: impl IntoIterator<Item = Position>) -> Self {
        let mut mines: Vec<_> = mines.into_iter().collect();
        mines.sort();
        mines.dedup();
        Self { mines }
    }

    /// Reads one string per row, `*` for a mine and `.` for a safe cell.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<(GridDimension, Self)> {
        let height = rows.len() as u32;
        let width = rows
            .first()
            .map(|row| row.as_ref().chars().count() as u32)
            .unwrap_or(0);

        let mut mines = Vec::new();
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() as u32 != width {
                return Err(GameError::InvalidLayout);
            }
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '*' => mines.push(Position::new(row as i32, col as i32)),
                    '.' => {}
                    _ => return Err(GameError::InvalidLayout),
                }
            }
        }

        Ok((GridDimension::new(height, width)?, Self::new(mines)))
    }

    pub fn mines(&self) -> &[Position] {
        &self.mines
    }

    /// Checks every mine against `dimensions`.
    pub fn validate(&self, dimensions: GridDimension) -> Result<()> {
        self.mines
            .iter()
            .try_for_each(|&pos| dimensions.validate(pos))
    }
}

impl MinePlacer for FixedPlacer {
    fn place(&mut self, field: &mut Minefield, first: Position) -> Result<()> {
        field.dimensions().validate(first)?;
        for &pos in &self.mines {
            field.place_mine(pos)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_placement_is_reproducible() {
        let dims = GridDimension::new(9, 9).unwrap();
        let first = Position::new(4, 4);

        let mut a = Minefield::new(dims, 10);
        let mut b = Minefield::new(dims, 10);
        RandomPlacer::seeded(42).place(&mut a, first).unwrap();
        RandomPlacer::seeded(42).place(&mut b, first).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.placed_mines(), 10);
        assert!(!a.get_cell(first).unwrap().is_mined());
    }

    #[test]
    fn test_parse_layout() {
        let (dims, placer) = FixedPlacer::parse(&["..*", "...", "*.."]).unwrap();

        assert_eq!(dims, GridDimension::new(3, 3).unwrap());
        assert_eq!(
            placer.mines(),
            &[Position::new(0, 2), Position::new(2, 0)]
        );
    }

    #[test]
    fn test_parse_rejects_ragged_and_unknown() {
        assert_eq!(
            FixedPlacer::parse(&["..", "..."]),
            Err(GameError::InvalidLayout)
        );
        assert_eq!(FixedPlacer::parse(&[".x"]), Err(GameError::InvalidLayout));
        assert!(matches!(
            FixedPlacer::parse::<&str>(&[]),
            Err(GameError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_fixed_placement_ignores_first_click() {
        let dims = GridDimension::new(2, 2).unwrap();
        let mut placer = FixedPlacer::new([Position::new(0, 0), Position::new(0, 0)]);
        let mut field = Minefield::new(dims, 1);

        placer.place(&mut field, Position::new(0, 0)).unwrap();

        assert_eq!(field.placed_mines(), 1);
        assert!(field.get_cell(Position::new(0, 0)).unwrap().is_mined());
    }

    #[test]
    fn test_validate_against_dimensions() {
        let placer = FixedPlacer::new([Position::new(2, 0)]);

        assert!(placer.validate(GridDimension::new(3, 1).unwrap()).is_ok());
        assert!(placer.validate(GridDimension::new(2, 1).unwrap()).is_err());
    }
}
