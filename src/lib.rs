// Library exports for the Isolation agent
// The board contract, the decision engine and the agent entry point

pub mod agent;
pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod grid;
pub mod isolation;
pub mod opening;
pub mod ordering;
pub mod search;
pub mod symmetry;
pub mod time;
pub mod types;

pub use agent::Agent;
pub use board::{GameBoard, SearchFrame};
pub use config::Config;
pub use eval::{CustomEval, Evaluator, Heuristic, OpenMoveEval};
pub use search::{SearchEngine, SearchMode, SearchOutcome};
pub use time::{Deadline, SteppedClock, TimeGovernor, TimeSource};
pub use types::{Coord, Move, PlayerId, Side};
