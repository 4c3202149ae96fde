//! Common types re-exported for convenience.

pub use crate::board::peg::Peg;
pub use crate::board::peg_stack::{Disk, PegStack};
pub use crate::board::{Board, Snapshot};
pub use crate::game::controller::{GameError, MoveOutcome, Phase, PuzzleController};
pub use crate::game::r#loop::{GameConfig, GameLoop};
