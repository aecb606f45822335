//! Game rules for Halma (move generation, win detection)

pub mod moves;
pub mod win;

pub use moves::{is_valid_square, valid_moves};
pub use win::winner;
