//! A single cell of the board.

use life_core::{Position, Status, Transition};

/// One board position and its evaluate/commit state.
///
/// A cell does not know its grid. Neighbor counts are supplied by
/// [`Grid`](crate::Grid), which addresses cells by [`Position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    status: Status,
    position: Position,
    pending_change: bool,
    changed: bool,
}

impl Cell {
    pub fn new(position: Position, status: Status) -> Self {
        Self {
            status,
            position,
            pending_change: false,
            changed: false,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_alive(&self) -> bool {
        self.status.is_alive()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn x(&self) -> usize {
        self.position.x
    }

    pub fn y(&self) -> usize {
        self.position.y
    }

    /// Set by [`evaluate`](Self::evaluate) when the next commit will flip the status
    pub fn pending_change(&self) -> bool {
        self.pending_change
    }

    /// True iff the most recent commit flipped the status
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Decide the next status from the number of live in-bounds neighbors.
    ///
    /// Clears both flags first, then sets `pending_change` for a birth or
    /// a death. The current status is left untouched.
    pub fn evaluate(&mut self, alive_neighbors: u8) -> Transition {
        self.pending_change = false;
        self.changed = false;

        let transition = self.status.transition(alive_neighbors);
        self.pending_change = transition.changes_status();
        transition
    }

    /// Apply the decision of the last evaluate.
    ///
    /// Calling this twice without an evaluate in between flips the status
    /// twice; callers own that ordering.
    pub fn commit(&mut self) {
        if self.pending_change {
            self.status = self.status.flip();
            self.changed = true;
        }
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}
