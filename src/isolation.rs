// Reference Isolation board with queen moves and pushes
//
// Rules:
// - A player whose token is not on the board yet may place it on any open cell.
// - Otherwise the token slides like a chess queen over open cells. If the ray
//   reaches the opponent's token, landing on it is a push move.
// - Every move blocks the cell the mover leaves. A push shoves the opponent one
//   cell further along the same direction; if that cell is off the board or not
//   open, the opponent is pushed off and the game ends immediately.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::GameBoard;
use crate::error::BoardError;
use crate::grid::Grid;
use crate::types::{Coord, Direction, Move, PlayerId, Side};

/// Content of a single board cell
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Cell {
    Open,
    Blocked,
    Queen(PlayerId),
}

impl Cell {
    fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' => Some(Cell::Open),
            'X' | '#' => Some(Cell::Blocked),
            '1' => Some(Cell::Queen(PlayerId::One)),
            '2' => Some(Cell::Queen(PlayerId::Two)),
            _ => None,
        }
    }

    fn symbol(&self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Blocked => 'X',
            Cell::Queen(PlayerId::One) => '1',
            Cell::Queen(PlayerId::Two) => '2',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Complete Isolation game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsolationBoard {
    grid: Grid<Cell>,
    positions: [Option<Coord>; 2],
    eliminated: Option<PlayerId>,
    active: PlayerId,
    move_count: usize,
}

impl IsolationBoard {
    /// Empty board; player one moves first
    pub fn new(height: usize, width: usize) -> Self {
        IsolationBoard {
            grid: Grid::filled(height, width, Cell::Open),
            positions: [None, None],
            eliminated: None,
            active: PlayerId::One,
            move_count: 0,
        }
    }

    /// Parses a board from text rows (`.` open, `X` blocked, `1`/`2` tokens).
    /// The ply counter is inferred as blocked cells plus tokens on the board,
    /// which holds for any position reached by play.
    pub fn from_rows(rows: &[&str], active: PlayerId) -> Result<Self, BoardError> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        if rows.is_empty() || width == 0 {
            return Err(BoardError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len());
        let mut positions = [None, None];
        let mut move_count = 0;

        for (r, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(BoardError::RaggedRow {
                    row: r,
                    found,
                    expected: width,
                });
            }

            let mut row = Vec::with_capacity(width);
            for (c, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(BoardError::UnknownCell {
                    symbol,
                    row: r,
                    col: c,
                })?;
                match cell {
                    Cell::Queen(player) => {
                        if positions[player.index()].is_some() {
                            return Err(BoardError::DuplicateQueen(symbol));
                        }
                        positions[player.index()] = Some(Coord::new(r, c));
                        move_count += 1;
                    }
                    Cell::Blocked => move_count += 1,
                    Cell::Open => {}
                }
                row.push(cell);
            }
            cells.push(row);
        }

        let grid = Grid::from_rows(cells).ok_or(BoardError::Empty)?;

        Ok(IsolationBoard {
            grid,
            positions,
            eliminated: None,
            active,
            move_count,
        })
    }

    /// Overrides the inferred ply counter
    pub fn with_move_count(mut self, move_count: usize) -> Self {
        self.move_count = move_count;
        self
    }

    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    pub fn position(&self, player: PlayerId) -> Option<Coord> {
        self.positions[player.index()]
    }

    /// Winner once the game is decided: a pushed-off player or a player to move
    /// with no legal destination loses
    pub fn winner(&self) -> Option<PlayerId> {
        if let Some(loser) = self.eliminated {
            return Some(loser.other());
        }
        if self.moves_for(self.active).is_empty() {
            return Some(self.active.other());
        }
        None
    }

    fn player_on(&self, side: Side) -> PlayerId {
        match side {
            Side::Active => self.active,
            Side::Inactive => self.active.other(),
        }
    }

    fn moves_for(&self, player: PlayerId) -> Vec<Move> {
        if self.eliminated == Some(player) {
            return Vec::new();
        }

        let Some(from) = self.positions[player.index()] else {
            return self
                .grid
                .iter()
                .filter(|(_, cell)| **cell == Cell::Open)
                .map(|(at, _)| Move::new(at.row, at.col, false))
                .collect();
        };

        let (height, width) = (self.grid.rows(), self.grid.cols());
        let mut moves = Vec::new();

        for dir in Direction::all() {
            let mut cursor = from;
            while let Some(next) = dir.step(cursor, height, width) {
                match self.grid.get(next) {
                    Some(Cell::Open) => {
                        moves.push(Move::new(next.row, next.col, false));
                        cursor = next;
                    }
                    Some(Cell::Queen(owner)) if *owner != player => {
                        moves.push(Move::new(next.row, next.col, true));
                        break;
                    }
                    _ => break,
                }
            }
        }

        moves
    }
}

impl GameBoard for IsolationBoard {
    type Cell = Cell;

    fn legal_moves_for(&self, side: Side) -> Vec<Move> {
        self.moves_for(self.player_on(side))
    }

    fn forecast_move(&self, mv: Move) -> (Self, bool) {
        let mut next = self.clone();
        let mover = self.active;
        let opponent = mover.other();
        let target = mv.target();
        let origin = self.positions[mover.index()];
        let mut terminal = false;

        if let Some(from) = origin {
            next.grid.set(from, Cell::Blocked);
        }

        if let (true, Some(from)) = (mv.push, origin) {
            let landing = Direction::between(from, target)
                .and_then(|dir| dir.step(target, self.grid.rows(), self.grid.cols()));

            match landing {
                Some(at) if next.grid.get(at) == Some(&Cell::Open) => {
                    next.grid.set(at, Cell::Queen(opponent));
                    next.positions[opponent.index()] = Some(at);
                }
                _ => {
                    next.positions[opponent.index()] = None;
                    next.eliminated = Some(opponent);
                    terminal = true;
                }
            }
        }

        next.grid.set(target, Cell::Queen(mover));
        next.positions[mover.index()] = Some(target);
        next.active = opponent;
        next.move_count += 1;

        (next, terminal)
    }

    fn grid(&self) -> Grid<Cell> {
        self.grid.clone()
    }

    fn is_spot_open(&self, row: usize, col: usize) -> bool {
        self.grid.get(Coord::new(row, col)) == Some(&Cell::Open)
    }

    fn height(&self) -> usize {
        self.grid.rows()
    }

    fn width(&self) -> usize {
        self.grid.cols()
    }

    fn move_count(&self) -> usize {
        self.move_count
    }

    fn position_of(&self, side: Side) -> Option<Coord> {
        self.positions[self.player_on(side).index()]
    }
}

impl fmt::Display for IsolationBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
