//! Core type definitions for the automaton.

use std::fmt;

/// Committed state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Alive,
    Dead,
}

impl Status {
    pub fn is_alive(&self) -> bool {
        matches!(self, Status::Alive)
    }

    /// Alive -> Dead, Dead -> Alive
    pub fn flip(&self) -> Self {
        match self {
            Status::Alive => Status::Dead,
            Status::Dead => Status::Alive,
        }
    }

    /// Classify what the B3/S23 rule does to a cell in this state with
    /// `alive_neighbors` live cells around it.
    pub fn transition(&self, alive_neighbors: u8) -> Transition {
        match (self, alive_neighbors) {
            (Status::Dead, 3) => Transition::Birth,
            (Status::Alive, 2) | (Status::Alive, 3) => Transition::Survival,
            (Status::Alive, n) if n <= 1 => Transition::Underpopulation,
            (Status::Alive, _) => Transition::Overcrowding,
            (Status::Dead, _) => Transition::StaysDead,
        }
    }

    /// Status in the next generation
    pub fn next(&self, alive_neighbors: u8) -> Self {
        if self.transition(alive_neighbors).changes_status() {
            self.flip()
        } else {
            *self
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Alive => write!(f, "alive"),
            Status::Dead => write!(f, "dead"),
        }
    }
}

/// Outcome of applying the rule to one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Dead cell with exactly three live neighbors
    Birth,
    /// Live cell with two or three live neighbors
    Survival,
    /// Live cell with at most one live neighbor
    Underpopulation,
    /// Live cell with four or more live neighbors
    Overcrowding,
    StaysDead,
}

impl Transition {
    pub fn changes_status(&self) -> bool {
        matches!(
            self,
            Transition::Birth | Transition::Underpopulation | Transition::Overcrowding
        )
    }
}

/// 2D position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step one cell in `direction`, or `None` if that leaves
    /// `[0, width) x [0, height)`. Edges are hard; nothing wraps.
    pub fn neighbor(&self, direction: Direction, width: usize, height: usize) -> Option<Self> {
        let (dx, dy) = direction.to_delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < width && y < height).then_some(Self { x, y })
    }

    /// All in-bounds Moore neighbors
    pub fn neighbors(&self, width: usize, height: usize) -> impl Iterator<Item = Position> + '_ {
        Direction::all()
            .into_iter()
            .filter_map(move |d| self.neighbor(d, width, height))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the eight Moore neighborhood offsets. North is +y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub fn to_delta(&self) -> (isize, isize) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    pub fn all() -> [Direction; 8] {
        [
            Direction::North,
            Direction::NorthEast,
            Direction::East,
            Direction::SouthEast,
            Direction::South,
            Direction::SouthWest,
            Direction::West,
            Direction::NorthWest,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_flip() {
        assert_eq!(Status::Alive.flip(), Status::Dead);
        assert_eq!(Status::Dead.flip(), Status::Alive);
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(Status::Dead.transition(3), Transition::Birth);
        assert_eq!(Status::Dead.transition(2), Transition::StaysDead);
        assert_eq!(Status::Dead.transition(4), Transition::StaysDead);
        assert_eq!(Status::Alive.transition(0), Transition::Underpopulation);
        assert_eq!(Status::Alive.transition(1), Transition::Underpopulation);
        assert_eq!(Status::Alive.transition(2), Transition::Survival);
        assert_eq!(Status::Alive.transition(3), Transition::Survival);
        assert_eq!(Status::Alive.transition(4), Transition::Overcrowding);
        assert_eq!(Status::Alive.transition(8), Transition::Overcrowding);
    }

    #[test]
    fn test_next_status() {
        assert_eq!(Status::Dead.next(3), Status::Alive);
        assert_eq!(Status::Alive.next(2), Status::Alive);
        assert_eq!(Status::Alive.next(5), Status::Dead);
        assert_eq!(Status::Dead.next(0), Status::Dead);
    }

    #[test]
    fn test_neighbor_hard_edges() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.neighbor(Direction::West, 2, 2), None);
        assert_eq!(origin.neighbor(Direction::South, 2, 2), None);
        assert_eq!(
            origin.neighbor(Direction::NorthEast, 2, 2),
            Some(Position::new(1, 1))
        );

        let corner = Position::new(1, 1);
        assert_eq!(corner.neighbor(Direction::East, 2, 2), None);
        assert_eq!(corner.neighbor(Direction::North, 2, 2), None);
    }

    #[test]
    fn test_origin_has_three_neighbors() {
        let mut found: Vec<_> = Position::new(0, 0).neighbors(2, 2).collect();
        found.sort();
        assert_eq!(
            found,
            vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn test_interior_has_eight_neighbors() {
        assert_eq!(Position::new(5, 5).neighbors(10, 10).count(), 8);
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::North.to_delta(), (0, 1));
        assert_eq!(Direction::South.to_delta(), (0, -1));
        assert_eq!(Direction::East.to_delta(), (1, 0));
        assert_eq!(Direction::West.to_delta(), (-1, 0));
    }
}
