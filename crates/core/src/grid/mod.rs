//! Terrain grid and its cells

pub mod cell;
pub mod terrain_grid;

// Re-export main types
pub use cell::*;
pub use terrain_grid::*;
