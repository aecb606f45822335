//! GUI module for the Halma game

pub mod app;
pub mod board_view;
pub mod game_state;
pub mod theme;

pub use app::HalmaApp;
pub use board_view::BoardView;
pub use game_state::{GameMode, GameState};
