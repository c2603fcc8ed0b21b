// Public entry point of the Isolation agent
//
// Trivial positions are answered directly; everything else is handed to the
// search engine under the caller's clock.

use log::info;

use crate::board::GameBoard;
use crate::config::{Config, TimingConfig};
use crate::eval::{Evaluator, Heuristic};
use crate::opening::OpeningBook;
use crate::search::{SearchEngine, SearchOutcome};
use crate::time::{TimeGovernor, TimeSource};
use crate::types::Move;

/// Isolation agent with a fixed search configuration
pub struct Agent<E = Heuristic> {
    engine: SearchEngine<E>,
    opening: OpeningBook,
    timing: TimingConfig,
}

impl Agent<Heuristic> {
    /// Creates an agent using the evaluation function named in the configuration
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the agent's lifetime
    pub fn new(config: Config) -> Self {
        let evaluator = Heuristic::from_config(&config.evaluation);
        Self::with_evaluator(config, evaluator)
    }
}

impl<E: Evaluator> Agent<E> {
    /// Creates an agent with a caller-supplied evaluation function
    pub fn with_evaluator(config: Config, evaluator: E) -> Self {
        Agent {
            engine: SearchEngine::new(evaluator, config.search.mode, config.search.max_depth),
            opening: OpeningBook::from_config(&config.opening),
            timing: config.timing,
        }
    }

    pub fn engine(&self) -> &SearchEngine<E> {
        &self.engine
    }

    /// Chooses the next move, or None when there is no legal move (a loss)
    ///
    /// # Arguments
    /// * `board` - Current game state, with this agent as the active player
    /// * `legal_moves` - Legal moves for this agent in `board`
    /// * `time_left` - Probe reporting the milliseconds remaining for this move
    pub fn get_move<B: GameBoard>(
        &mut self,
        board: &B,
        legal_moves: &[Move],
        time_left: &dyn TimeSource,
    ) -> Option<Move> {
        match legal_moves {
            [] => {
                info!("Ply {}: no legal moves", board.move_count());
                None
            }
            [only] => {
                info!("Ply {}: single legal move {:?}", board.move_count(), only);
                Some(*only)
            }
            _ => {
                if let Some(mv) = self.opening.choose(board, legal_moves) {
                    info!("Ply {}: opening move {:?}", board.move_count(), mv);
                    return Some(mv);
                }
                self.search(board, legal_moves, time_left).best_move
            }
        }
    }

    /// Runs the configured search without any shortcut, returning the full outcome
    pub fn search<B: GameBoard>(
        &self,
        board: &B,
        legal_moves: &[Move],
        time_left: &dyn TimeSource,
    ) -> SearchOutcome {
        let governor = TimeGovernor::new(time_left, &self.timing);
        info!(
            "Ply {}: searching {} moves ({}ms left)",
            board.move_count(),
            legal_moves.len(),
            governor.remaining_ms()
        );
        self.engine.search(board, legal_moves, &governor)
    }
}
