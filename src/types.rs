//! Shared value types: grid positions, actions, and the side to move

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A grid coordinate (row, column) on the 9×9 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Pos { row, col }
    }

    /// Manhattan distance to another position.
    pub fn distance(self, other: Pos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The cell halfway between two positions that are two steps apart
    /// along a line. Used to locate the jumped sheep of a capture.
    pub fn midpoint(self, other: Pos) -> Pos {
        Pos {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A move from one cell to another.
///
/// Actions are produced by move generation and consumed by
/// [`Board::apply`](crate::board::Board::apply); they are never validated
/// against the board on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub from: Pos,
    pub to: Pos,
}

impl Action {
    pub const fn new(from: Pos, to: Pos) -> Self {
        Action { from, to }
    }

    /// Whether this action spans two cells in one coordinate, which for a
    /// fox move means a jump capture.
    pub fn is_jump(self) -> bool {
        self.from.row.abs_diff(self.to.row) == 2 || self.from.col.abs_diff(self.to.col) == 2
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A side of the game: the single capturing fox, or the sheep flock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Sheep,
    Fox,
}

impl Side {
    /// Get the opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::Sheep => Side::Fox,
            Side::Fox => Side::Sheep,
        }
    }

    /// The fox maximizes the shared evaluation scalar; the sheep minimize it.
    pub fn is_maximizing(self) -> bool {
        self == Side::Fox
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Sheep => write!(f, "sheep"),
            Side::Fox => write!(f, "fox"),
        }
    }
}

impl FromStr for Side {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fox" => Ok(Side::Fox),
            "sheep" | "sheeps" => Ok(Side::Sheep),
            _ => Err(crate::Error::ParseSide {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_of_a_jump_is_the_jumped_cell() {
        let action = Action::new(Pos::new(3, 4), Pos::new(3, 6));
        assert!(action.is_jump());
        assert_eq!(action.from.midpoint(action.to), Pos::new(3, 5));

        let vertical = Action::new(Pos::new(5, 2), Pos::new(3, 2));
        assert!(vertical.is_jump());
        assert_eq!(vertical.from.midpoint(vertical.to), Pos::new(4, 2));
    }

    #[test]
    fn simple_moves_are_not_jumps() {
        let action = Action::new(Pos::new(3, 4), Pos::new(3, 5));
        assert!(!action.is_jump());
    }

    #[test]
    fn side_parsing_and_opponent() {
        assert_eq!("fox".parse::<Side>().unwrap(), Side::Fox);
        assert_eq!("Sheep".parse::<Side>().unwrap(), Side::Sheep);
        assert!("wolf".parse::<Side>().is_err());
        assert_eq!(Side::Fox.opponent(), Side::Sheep);
        assert!(Side::Fox.is_maximizing());
        assert!(!Side::Sheep.is_maximizing());
    }
}
