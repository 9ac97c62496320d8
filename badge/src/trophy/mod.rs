//! Trophy classification and assembly.

mod assemble;
mod classify;
mod rank;

pub use assemble::{assemble, Trophy, TrophySet};
pub use classify::{classify, Classification};
pub use rank::{Category, Rank};
