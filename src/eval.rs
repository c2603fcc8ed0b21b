// Static evaluation functions
//
// Every evaluator scores a state from the point of view of the maximizing
// player. `maximizing_player_active` tells the evaluator which side of the
// state that player is on: when false, "my" and "opponent" swap.

use serde::{Deserialize, Serialize};

use crate::board::GameBoard;
use crate::config::EvaluationConfig;
use crate::types::{Coord, Move, Side};

/// Heuristic scoring of a non-terminal or time-cut state
pub trait Evaluator {
    fn score<B: GameBoard>(&self, board: &B, maximizing_player_active: bool) -> f64;
}

/// Which built-in heuristic to use
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EvalKind {
    OpenMove,
    Custom,
}

/// Side of the state the maximizing player is on
fn my_side(maximizing_player_active: bool) -> Side {
    if maximizing_player_active {
        Side::Active
    } else {
        Side::Inactive
    }
}

/// Mobility difference: my legal moves minus the opponent's
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenMoveEval;

impl Evaluator for OpenMoveEval {
    fn score<B: GameBoard>(&self, board: &B, maximizing_player_active: bool) -> f64 {
        let me = my_side(maximizing_player_active);
        let my_moves = board.legal_moves_for(me).len() as f64;
        let enemy_moves = board.legal_moves_for(me.flip()).len() as f64;
        my_moves - enemy_moves
    }
}

/// Mobility with positional terms:
///
/// `my_moves - w_opp * enemy_moves - w_center * center_distance
///  + w_proximity * enemy_distance - bump_penalty * [enemy can push]`
#[derive(Debug, Clone, Copy)]
pub struct CustomEval {
    pub opponent_mobility_weight: f64,
    pub center_weight: f64,
    pub proximity_weight: f64,
    pub bump_penalty: f64,
}

impl Default for CustomEval {
    fn default() -> Self {
        CustomEval {
            opponent_mobility_weight: 2.0,
            center_weight: 1.0,
            proximity_weight: 1.0,
            bump_penalty: 5.0,
        }
    }
}

impl CustomEval {
    pub fn from_config(config: &EvaluationConfig) -> Self {
        CustomEval {
            opponent_mobility_weight: config.opponent_mobility_weight,
            center_weight: config.center_weight,
            proximity_weight: config.proximity_weight,
            bump_penalty: config.bump_penalty,
        }
    }

    /// Distance from the geometric center of the board
    fn center_distance<B: GameBoard>(board: &B, at: Coord) -> f64 {
        let center_row = (board.height() as f64 - 1.0) / 2.0;
        let center_col = (board.width() as f64 - 1.0) / 2.0;
        let dr = at.row as f64 - center_row;
        let dc = at.col as f64 - center_col;
        (dr * dr + dc * dc).sqrt()
    }

    fn can_push(moves: &[Move]) -> bool {
        moves.iter().any(|m| m.push)
    }
}

impl Evaluator for CustomEval {
    fn score<B: GameBoard>(&self, board: &B, maximizing_player_active: bool) -> f64 {
        let me = my_side(maximizing_player_active);
        let my_moves = board.legal_moves_for(me);
        let enemy_moves = board.legal_moves_for(me.flip());

        let mut score =
            my_moves.len() as f64 - self.opponent_mobility_weight * enemy_moves.len() as f64;

        // Positional terms only apply once both tokens are on the board
        if let (Some(my_pos), Some(enemy_pos)) = (board.position_of(me), board.position_of(me.flip()))
        {
            score -= self.center_weight * Self::center_distance(board, my_pos);
            score += self.proximity_weight * my_pos.distance_to(&enemy_pos);
        }

        if Self::can_push(&enemy_moves) {
            score -= self.bump_penalty;
        }

        score
    }
}

/// Built-in heuristic chosen by configuration
#[derive(Debug, Clone, Copy)]
pub enum Heuristic {
    OpenMove(OpenMoveEval),
    Custom(CustomEval),
}

impl Heuristic {
    pub fn from_config(config: &EvaluationConfig) -> Self {
        match config.kind {
            EvalKind::OpenMove => Heuristic::OpenMove(OpenMoveEval),
            EvalKind::Custom => Heuristic::Custom(CustomEval::from_config(config)),
        }
    }
}

impl Evaluator for Heuristic {
    fn score<B: GameBoard>(&self, board: &B, maximizing_player_active: bool) -> f64 {
        match self {
            Heuristic::OpenMove(eval) => eval.score(board, maximizing_player_active),
            Heuristic::Custom(eval) => eval.score(board, maximizing_player_active),
        }
    }
}
