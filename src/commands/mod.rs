//! Command implementations

pub mod board;
pub mod deal;
pub mod share;
pub mod shuffle;
pub mod submit;

pub use board::{BoardResult, show_board};
pub use deal::{DealResult, deal_rack};
pub use share::{share, share_text};
pub use shuffle::{ShuffleResult, shuffle_rack};
pub use submit::{SubmitConfig, SubmitResult, submit_word};
