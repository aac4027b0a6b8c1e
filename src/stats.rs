/// Per-game counters. Validation is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatistics {
    total_mines: u32,
    total_cells: u32,
    revealed_cells: u32,
    flags_placed: u32,
}

impl GameStatistics {
    pub fn new(total_mines: u32, total_cells: u32) -> Self {
        Self {
            total_mines,
            total_cells,
            revealed_cells: 0,
            flags_placed: 0,
        }
    }

    pub fn increment_revealed(&mut self, n: u32) {
        self.revealed_cells += n;
    }

    pub fn increment_flags(&mut self) {
        self.flags_placed += 1;
    }

    pub fn decrement_flags(&mut self) {
        self.flags_placed = self.flags_placed.saturating_sub(1);
    }

    /// Zeroes the running counters; totals are kept.
    pub fn reset(&mut self) {
        self.revealed_cells = 0;
        self.flags_placed = 0;
    }

    pub fn total_mines(&self) -> u32 {
        self.total_mines
    }

    pub fn total_cells(&self) -> u32 {
        self.total_cells
    }

    pub fn revealed_cells(&self) -> u32 {
        self.revealed_cells
    }

    pub fn flags_placed(&self) -> u32 {
        self.flags_placed
    }

    /// May go negative when more flags than mines are placed.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.total_mines) - i64::from(self.flags_placed)
    }

    pub fn unrevealed_count(&self) -> u32 {
        self.total_cells - self.revealed_cells
    }

    pub fn safe_cells(&self) -> u32 {
        self.total_cells - self.total_mines
    }

    pub fn is_game_won(&self) -> bool {
        self.unrevealed_count() == self.total_mines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_counts() {
        let mut stats = GameStatistics::new(10, 81);
        stats.increment_revealed(20);
        stats.increment_flags();
        stats.increment_flags();

        assert_eq!(stats.unrevealed_count(), 61);
        assert_eq!(stats.mines_left(), 8);
        assert_eq!(stats.safe_cells(), 71);
        assert!(!stats.is_game_won());
    }

    #[test]
    fn test_win_when_only_mines_remain() {
        let mut stats = GameStatistics::new(1, 9);
        stats.increment_revealed(7);
        assert!(!stats.is_game_won());

        stats.increment_revealed(1);
        assert!(stats.is_game_won());
    }

    #[test]
    fn test_mines_left_can_go_negative() {
        let mut stats = GameStatistics::new(1, 9);
        stats.increment_flags();
        stats.increment_flags();

        assert_eq!(stats.mines_left(), -1);
    }

    #[test]
    fn test_reset_keeps_totals() {
        let mut stats = GameStatistics::new(3, 16);
        stats.increment_revealed(5);
        stats.increment_flags();
        stats.decrement_flags();
        stats.decrement_flags();
        stats.reset();

        assert_eq!(stats, GameStatistics::new(3, 16));
    }
}
