//! Spatial data structures and grid graph construction
//!
//! This module contains spatial-related functionality including:
//! - Coordinates and cardinal directions
//! - Sorted tile storage with neighbour links
//! - Random region generation

/// Grid coordinates and direction stepping
pub mod coordinate;
/// Seeded random regions for benchmarks and tests
pub mod generation;
/// Tile storage, linking and greedy seeding
pub mod tiles;

pub use coordinate::{Coordinate, Direction};
pub use tiles::{Tile, TileId, TileSet};
