#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Hidden,
    Flagged,
    Revealed,
    Exploded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEvent {
    ToggleFlag,
    Reveal { is_mined: bool },
}

impl CellState {
    /// Applies `event` and returns the resulting state. Terminal states absorb every event.
    pub const fn transition(self, event: CellEvent) -> CellState {
        use CellEvent::*;
        use CellState::*;

        match (self, event) {
            (Hidden, ToggleFlag) => Flagged,
            (Hidden, Reveal { is_mined: true }) => Exploded,
            (Hidden, Reveal { is_mined: false }) => Revealed,
            (Flagged, ToggleFlag) => Hidden,
            (Flagged, Reveal { .. }) => Flagged,
            (Revealed, _) => Revealed,
            (Exploded, _) => Exploded,
        }
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed | Self::Exploded)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    state: CellState,
    is_mined: bool,
}

impl Cell {
    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn is_mined(&self) -> bool {
        self.is_mined
    }

    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    pub fn is_flagged(&self) -> bool {
        self.state.is_flagged()
    }

    pub fn toggle_flag(&mut self) {
        self.state = self.state.transition(CellEvent::ToggleFlag);
    }

    pub fn reveal(&mut self) {
        self.state = self.state.transition(CellEvent::Reveal {
            is_mined: self.is_mined,
        });
    }

    pub(crate) fn arm(&mut self) {
        self.is_mined = true;
    }
}
