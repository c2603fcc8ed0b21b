// Opening-move shortcuts for the first two plies
//
// The first two placements are symmetric and well understood, so searching
// them wastes the clock. Two rules are available and neither is implied:
// a fixed near-corner rule and a uniform random pick from a seedable source.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::board::GameBoard;
use crate::config::OpeningConfig;
use crate::types::Move;

/// Plies handled by the opening rules
pub const OPENING_PLIES: usize = 2;

/// How the first two plies are chosen
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OpeningPolicy {
    /// No shortcut; the opening is searched like any other position
    Search,
    /// Near-corner cell (1, 1), or the mirrored (h-2, w-2) when taken
    Fixed,
    /// Uniformly random legal move
    Random,
}

pub struct OpeningBook {
    policy: OpeningPolicy,
    rng: StdRng,
}

impl OpeningBook {
    pub fn new(policy: OpeningPolicy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        OpeningBook { policy, rng }
    }

    pub fn from_config(config: &OpeningConfig) -> Self {
        Self::new(config.policy, config.seed)
    }

    pub fn policy(&self) -> OpeningPolicy {
        self.policy
    }

    /// Opening move for the current ply, or None when the position should be searched
    pub fn choose<B: GameBoard>(&mut self, board: &B, legal_moves: &[Move]) -> Option<Move> {
        if board.move_count() >= OPENING_PLIES {
            return None;
        }

        let chosen = match self.policy {
            OpeningPolicy::Search => None,
            OpeningPolicy::Fixed => Self::fixed_move(board)
                .filter(|mv| legal_moves.contains(mv)),
            OpeningPolicy::Random => legal_moves.choose(&mut self.rng).copied(),
        };

        debug!(
            "Opening ply {} ({:?}): {:?}",
            board.move_count(),
            self.policy,
            chosen
        );
        chosen
    }

    fn fixed_move<B: GameBoard>(board: &B) -> Option<Move> {
        let near = Move::new(1, 1, false);
        match board.move_count() {
            0 => Some(near),
            1 if board.is_spot_open(near.row, near.col) => Some(near),
            1 => {
                let mirrored_row = board.height().checked_sub(2)?;
                let mirrored_col = board.width().checked_sub(2)?;
                Some(Move::new(mirrored_row, mirrored_col, false))
            }
            _ => None,
        }
    }
}
