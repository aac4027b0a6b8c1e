use crate::{GameError, Position, Result};
use itertools::iproduct;

/// Fixed extent of a rectangular grid. Both sides are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimension {
    height: u32,
    width: u32,
}

impl GridDimension {
    pub fn new(height: u32, width: u32) -> Result<Self> {
        if height == 0
            || width == 0
            || i32::try_from(height.max(width)).is_err()
            || height.checked_mul(width).is_none()
        {
            return Err(GameError::InvalidDimensions { height, width });
        }
        Ok(Self { height, width })
    }

    pub(crate) const fn new_unchecked(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn total_cells(&self) -> u32 {
        self.height * self.width
    }

    pub fn is_valid(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as u32) < self.height
            && (pos.col as u32) < self.width
    }

    pub fn validate(&self, pos: Position) -> Result<()> {
        if self.is_valid(pos) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                position: pos,
                max: self.max_position(),
            })
        }
    }

    /// Bottom-right corner, the inclusive upper bound of valid positions.
    pub fn max_position(&self) -> Position {
        Position::new(self.height as i32 - 1, self.width as i32 - 1)
    }

    /// All valid positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        iproduct!(0..self.height as i32, 0..self.width as i32)
            .map(|(row, col)| Position::new(row, col))
    }

    /// Neighbors of `pos` that lie inside the grid.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.neighbors()
            .into_iter()
            .filter(move |p| self.is_valid(*p))
    }

    pub(crate) fn index(&self, pos: Position) -> (usize, usize) {
        (pos.row as usize, pos.col as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_extent() {
        assert_eq!(
            GridDimension::new(0, 5),
            Err(GameError::InvalidDimensions {
                height: 0,
                width: 5
            })
        );
        assert!(GridDimension::new(5, 0).is_err());
        assert!(GridDimension::new(1, 1).is_ok());
    }

    #[test]
    fn test_is_valid() {
        let dims = GridDimension::new(3, 4).unwrap();

        assert!(dims.is_valid(Position::new(0, 0)));
        assert!(dims.is_valid(Position::new(2, 3)));
        assert!(!dims.is_valid(Position::new(3, 0)));
        assert!(!dims.is_valid(Position::new(0, 4)));
        assert!(!dims.is_valid(Position::new(-1, 0)));
        assert!(!dims.is_valid(Position::new(0, -1)));
    }

    #[test]
    fn test_validate_reports_range() {
        let dims = GridDimension::new(3, 4).unwrap();

        assert_eq!(dims.validate(Position::new(1, 1)), Ok(()));
        assert_eq!(
            dims.validate(Position::new(5, 1)),
            Err(GameError::OutOfBounds {
                position: Position::new(5, 1),
                max: Position::new(2, 3),
            })
        );
    }

    #[test]
    fn test_positions_row_major() {
        let dims = GridDimension::new(2, 3).unwrap();
        let positions: Vec<_> = dims.positions().collect();

        assert_eq!(positions.len(), 6);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[1], Position::new(0, 1));
        assert_eq!(positions[3], Position::new(1, 0));
        assert_eq!(dims.total_cells(), 6);
    }

    #[test]
    fn test_corner_has_three_valid_neighbors() {
        let dims = GridDimension::new(3, 3).unwrap();

        assert_eq!(dims.neighbors(Position::new(0, 0)).count(), 3);
        assert_eq!(dims.neighbors(Position::new(0, 1)).count(), 5);
        assert_eq!(dims.neighbors(Position::new(1, 1)).count(), 8);
    }
}
