// Core value types shared by the board contract, the search and the agent

use serde::{Deserialize, Serialize};

/// A move: the destination cell and whether it pushes the opponent's token
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub push: bool,
}

impl Move {
    pub fn new(row: usize, col: usize, push: bool) -> Self {
        Move { row, col, push }
    }

    pub fn target(&self) -> Coord {
        Coord { row: self.row, col: self.col }
    }
}

/// Cell coordinate on the board, row-major from the top-left corner
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Euclidean distance to another cell
    pub fn distance_to(&self, other: &Coord) -> f64 {
        let dr = self.row as f64 - other.row as f64;
        let dc = self.col as f64 - other.col as f64;
        (dr * dr + dc * dc).sqrt()
    }
}

/// The two token owners
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn other(&self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Which side of the current state a query is about: the player to move or the one waiting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Active,
    Inactive,
}

impl Side {
    pub fn flip(&self) -> Side {
        match self {
            Side::Active => Side::Inactive,
            Side::Inactive => Side::Active,
        }
    }
}

/// The eight queen directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Returns all possible directions
    pub fn all() -> [Direction; 8] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
            Direction::UpLeft,
            Direction::UpRight,
            Direction::DownLeft,
            Direction::DownRight,
        ]
    }

    /// Row and column offsets of a single step
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Calculates the next coordinate in this direction, or None when it leaves the board
    pub fn step(&self, from: Coord, height: usize, width: usize) -> Option<Coord> {
        let (dr, dc) = self.delta();
        let row = from.row.checked_add_signed(dr)?;
        let col = from.col.checked_add_signed(dc)?;
        if row >= height || col >= width {
            return None;
        }
        Some(Coord { row, col })
    }

    /// Direction of travel from one cell towards another on a shared row, column or diagonal
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        let dr = (to.row as isize - from.row as isize).signum();
        let dc = (to.col as isize - from.col as isize).signum();
        Direction::all()
            .into_iter()
            .find(|dir| dir.delta() == (dr, dc))
    }
}
