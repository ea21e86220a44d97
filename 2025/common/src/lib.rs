//! Helpers shared between the 2025 day crates.

pub mod grid;

pub use grid::Grid;
