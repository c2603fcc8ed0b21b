//! Iterative-deepening minimax and alpha-beta search
//!
//! Both modes share one recursive layer function parameterized by whether the
//! layer maximizes or minimizes. Alpha-beta mode threads a `Bounds` window
//! through it; minimax mode passes none.
//!
//! # Layer cutoffs
//!
//! Checked in this order at every layer below the root:
//!
//! 1. the player to act has no legal move: the layer's loss sentinel
//!    (`-inf` on a max layer, `+inf` on a min layer), exact
//! 2. the move into this state ended the game: same sentinel, exact
//! 3. depth exhausted: static evaluation, exact for this depth
//! 4. time exhausted: static evaluation, marked incomplete
//!
//! A layer is complete only if every child it explored was complete. The
//! iterative-deepening driver adopts an iteration's result only when the
//! whole iteration completed, so a time-truncated depth never overwrites the
//! last finished one.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::{GameBoard, SearchFrame};
use crate::eval::Evaluator;
use crate::ordering::order_moves;
use crate::symmetry::SymmetryTable;
use crate::time::TimeGovernor;
use crate::types::Move;

/// Search algorithm
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Minimax,
    AlphaBeta,
}

/// Alpha-beta window, scoped to one root-move branch at one depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub alpha: f64,
    pub beta: f64,
}

impl Bounds {
    pub fn full() -> Self {
        Bounds {
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
        }
    }
}

/// Work counters for one decision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub evaluations: u64,
    pub cutoffs: u64,
    pub symmetry_skips: u64,
    pub time_cutoffs: u64,
}

/// Result of a single fixed-depth pass over the root moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    pub best_move: Option<Move>,
    pub value: f64,
    pub completed: bool,
    /// Whether any branch was cut by the depth limit rather than resolved
    pub reached_horizon: bool,
}

/// Final answer of an iterative-deepening search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    pub best_move: Option<Move>,
    pub value: f64,
    /// Deepest fully completed depth; 0 when no iteration finished
    pub completed_depth: u8,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// True when the value comes from a completed iteration
    pub fn is_exact(&self) -> bool {
        self.completed_depth > 0
    }
}

/// Value of one layer
#[derive(Debug, Clone, Copy)]
struct Layer {
    value: f64,
    completed: bool,
    reached_horizon: bool,
}

impl Layer {
    fn resolved(value: f64) -> Self {
        Layer {
            value,
            completed: true,
            reached_horizon: false,
        }
    }
}

/// Depth-limited game-tree search; holds only configuration between calls
#[derive(Debug, Clone)]
pub struct SearchEngine<E> {
    evaluator: E,
    mode: SearchMode,
    max_depth: u8,
}

impl<E: Evaluator> SearchEngine<E> {
    pub fn new(evaluator: E, mode: SearchMode, max_depth: u8) -> Self {
        SearchEngine {
            evaluator,
            mode,
            max_depth,
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Iterative deepening from depth 1 until time runs short, `max_depth` is
    /// reached, the result is proven, or the whole tree has been resolved.
    ///
    /// Returns the best move of the deepest completed iteration. If none
    /// completed, the first ordered legal move is returned with a heuristic
    /// value and `completed_depth == 0`.
    pub fn search<B: GameBoard>(
        &self,
        board: &B,
        legal_moves: &[Move],
        governor: &TimeGovernor,
    ) -> SearchOutcome {
        let mut stats = SearchStats::default();
        let ordered = order_moves(legal_moves.to_vec());

        let mut outcome = SearchOutcome {
            best_move: ordered.first().copied(),
            value: self.evaluator.score(board, true),
            completed_depth: 0,
            stats,
        };

        if ordered.is_empty() {
            return outcome;
        }

        let mut depth = 0;
        while depth < self.max_depth && governor.allows_iteration() {
            depth += 1;

            let root = self.search_root(board, &ordered, depth, governor, &mut stats);

            if !root.completed {
                debug!(
                    "Depth {} abandoned: time ran out ({} nodes so far)",
                    depth, stats.nodes
                );
                continue;
            }

            outcome.best_move = root.best_move;
            outcome.value = root.value;
            outcome.completed_depth = depth;
            debug!(
                "Depth {} complete: best {:?} value {} ({} nodes, {} cutoffs, {} symmetry skips)",
                depth, root.best_move, root.value, stats.nodes, stats.cutoffs, stats.symmetry_skips
            );

            if root.value.is_infinite() {
                debug!("Stopping search: outcome proven at depth {}", depth);
                break;
            }
            if !root.reached_horizon {
                debug!("Stopping search: game tree exhausted at depth {}", depth);
                break;
            }
        }

        outcome.stats = stats;

        if outcome.completed_depth == 0 {
            info!(
                "No depth completed, falling back to first ordered move {:?}",
                outcome.best_move
            );
        }

        info!(
            "{:?} search chose {:?} (value: {}, depth: {}, nodes: {})",
            self.mode, outcome.best_move, outcome.value, outcome.completed_depth, stats.nodes
        );

        outcome
    }

    /// Runs a single pass at a fixed depth over the root moves, without deepening
    pub fn search_depth<B: GameBoard>(
        &self,
        board: &B,
        legal_moves: &[Move],
        depth: u8,
        governor: &TimeGovernor,
    ) -> (RootResult, SearchStats) {
        let mut stats = SearchStats::default();
        let ordered = order_moves(legal_moves.to_vec());
        let root = self.search_root(board, &ordered, depth.max(1), governor, &mut stats);
        (root, stats)
    }

    fn search_root<B: GameBoard>(
        &self,
        board: &B,
        ordered: &[Move],
        depth: u8,
        governor: &TimeGovernor,
        stats: &mut SearchStats,
    ) -> RootResult {
        let alpha_beta = self.mode == SearchMode::AlphaBeta;
        let mut bounds = alpha_beta.then(Bounds::full);
        let mut symmetry = alpha_beta.then(SymmetryTable::<B::Cell>::new);

        let root = SearchFrame::root(board.clone());
        let mut result = RootResult {
            best_move: None,
            value: f64::NEG_INFINITY,
            completed: true,
            reached_horizon: false,
        };

        for &mv in ordered {
            let child = root.forecast(mv);

            if let Some(table) = symmetry.as_mut() {
                let grid = child.board.grid();
                if table.contains(&grid) {
                    stats.symmetry_skips += 1;
                    continue;
                }
                table.record(&grid);
            }

            let layer = self.layer(&child, depth - 1, false, bounds, governor, stats);
            result.completed &= layer.completed;
            result.reached_horizon |= layer.reached_horizon;

            if result.best_move.is_none() || layer.value > result.value {
                result.best_move = Some(mv);
                result.value = layer.value;
                if let Some(window) = bounds.as_mut() {
                    window.alpha = window.alpha.max(layer.value);
                }
            }
        }

        result
    }

    fn layer<B: GameBoard>(
        &self,
        frame: &SearchFrame<B>,
        depth: u8,
        maximizing: bool,
        mut bounds: Option<Bounds>,
        governor: &TimeGovernor,
        stats: &mut SearchStats,
    ) -> Layer {
        stats.nodes += 1;

        // The player to act here loses: -inf on a max layer, +inf on a min layer
        let loss = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        let moves = frame.board.legal_moves();
        if moves.is_empty() || frame.terminal {
            return Layer::resolved(loss);
        }

        if depth == 0 {
            stats.evaluations += 1;
            return Layer {
                value: self.evaluator.score(&frame.board, maximizing),
                completed: true,
                reached_horizon: true,
            };
        }

        if governor.is_exhausted() {
            stats.evaluations += 1;
            stats.time_cutoffs += 1;
            return Layer {
                value: self.evaluator.score(&frame.board, maximizing),
                completed: false,
                reached_horizon: true,
            };
        }

        let mut best = loss;
        let mut completed = true;
        let mut reached_horizon = false;

        for mv in order_moves(moves) {
            let child = frame.forecast(mv);
            let reply = self.layer(&child, depth - 1, !maximizing, bounds, governor, stats);
            completed &= reply.completed;
            reached_horizon |= reply.reached_horizon;

            let improves = if maximizing {
                reply.value > best
            } else {
                reply.value < best
            };
            if !improves {
                continue;
            }
            best = reply.value;

            if let Some(window) = bounds.as_mut() {
                let cut = if maximizing {
                    best > window.beta
                } else {
                    best < window.alpha
                };
                if cut {
                    stats.cutoffs += 1;
                    return Layer {
                        value: best,
                        completed,
                        reached_horizon,
                    };
                }
                if maximizing {
                    window.alpha = window.alpha.max(best);
                } else {
                    window.beta = window.beta.min(best);
                }
            }
        }

        Layer {
            value: best,
            completed,
            reached_horizon,
        }
    }
}
