//! Search algorithms for the Halma AI

pub mod minimax;

pub use minimax::{SearchResult, Searcher};
