// The board contract the search core consumes
//
// The decision engine never looks inside a game state; everything it needs is
// expressed through `GameBoard`. Implementations must be pure: `forecast_move`
// returns an independent child and leaves `self` untouched.

use std::fmt::Debug;
use std::hash::Hash;

use crate::grid::Grid;
use crate::types::{Coord, Move, Side};

/// Game state as seen by the search
pub trait GameBoard: Clone {
    /// Cell type of the raw board matrix used for symmetry comparison
    type Cell: Clone + Eq + Hash + Debug;

    /// Legal destinations for the given side of the current state
    fn legal_moves_for(&self, side: Side) -> Vec<Move>;

    /// Applies a move for the active player, returning the child state and
    /// whether the move ended the game on the spot
    fn forecast_move(&self, mv: Move) -> (Self, bool);

    /// Raw board matrix
    fn grid(&self) -> Grid<Self::Cell>;

    fn is_spot_open(&self, row: usize, col: usize) -> bool;

    fn height(&self) -> usize;

    fn width(&self) -> usize;

    /// Plies played so far
    fn move_count(&self) -> usize;

    /// Current token position of a side, None while it is not on the board
    fn position_of(&self, side: Side) -> Option<Coord>;

    /// Legal destinations for the player to move
    fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(Side::Active)
    }

    /// Legal destinations for the waiting player, as if it were their turn
    fn opponent_moves(&self) -> Vec<Move> {
        self.legal_moves_for(Side::Inactive)
    }
}

/// A state produced by applying a move, plus its immediate game-over flag
#[derive(Debug, Clone)]
pub struct SearchFrame<B> {
    pub board: B,
    pub terminal: bool,
}

impl<B: GameBoard> SearchFrame<B> {
    /// Root frame for a state nobody has just moved into
    pub fn root(board: B) -> Self {
        SearchFrame {
            board,
            terminal: false,
        }
    }

    /// Child frame after `mv`
    pub fn forecast(&self, mv: Move) -> Self {
        let (board, terminal) = self.board.forecast_move(mv);
        SearchFrame { board, terminal }
    }
}
