//! Puzzle engine: draw, scoring, feasibility, and the session state machine
//!
//! Everything here is synchronous and side-effect-free: operations take a
//! seed or a rack and return values, in time bounded by the fixed rack size.

pub mod draw;
pub mod feasibility;
pub mod scoring;
pub mod session;

pub use draw::{Rack, deal, shuffle_in_place};
pub use feasibility::{is_feasible, letter_counts};
pub use scoring::{ScoreBreakdown, breakdown, score_word};
pub use session::{BestWord, PuzzleSession, Rejection, SessionState, Submission};
