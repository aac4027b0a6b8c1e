//! Single-cell and flood-fill reveal over a [`Minefield`].

use crate::{Minefield, Position, Result};
use tracing::trace;

/// Reveals one cell. Returns `true` when the cell changed, mined or not;
/// revealed and flagged cells are left alone.
pub fn reveal_single(field: &mut Minefield, pos: Position) -> Result<bool> {
    let cell = field.get_cell_mut(pos)?;
    if cell.is_revealed() || cell.is_flagged() {
        return Ok(false);
    }
    cell.reveal();
    Ok(true)
}

/// Whether `pos` may be opened by a cascade: in bounds, hidden and unmined.
pub fn can_cascade(field: &Minefield, pos: Position) -> bool {
    field
        .get_cell(pos)
        .map(|cell| !cell.is_revealed() && !cell.is_flagged() && !cell.is_mined())
        .unwrap_or(false)
}

/// Opens `start` and, while the opened cells have no adjacent mines, the
/// connected safe region around it. Numbered cells bound the region.
///
/// Returns the number of cells revealed. Uses an explicit worklist; a cell's
/// own revealed state marks it visited.
pub fn reveal_cascade(field: &mut Minefield, start: Position) -> u32 {
    if !can_cascade(field, start) {
        return 0;
    }

    let dimensions = field.dimensions();
    let mut revealed = 0;
    let mut pending = vec![start];

    while let Some(pos) = pending.pop() {
        if !can_cascade(field, pos) {
            continue;
        }
        if !matches!(reveal_single(field, pos), Ok(true)) {
            continue;
        }
        revealed += 1;

        if matches!(field.count_adjacent_mines(pos), Ok(0)) {
            pending.extend(
                dimensions
                    .neighbors(pos)
                    .filter(|&neighbor| can_cascade(field, neighbor)),
            );
        }
    }

    trace!(start = %start, revealed, "cascade finished");
    revealed
}
