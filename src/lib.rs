//! Perfect domino tilings of grid regions
//!
//! A region is a finite set of unit cells on the unsigned 32-bit grid. The
//! crate decides whether the region can be covered exactly by 1x2 dominoes
//! by growing a maximum matching of its 4-neighbour grid graph with
//! breadth-first augmenting paths, and reports one tiling when it exists.

#![forbid(unsafe_code)]

/// Matching engine: augmenting path search, augmentation and the outer loop
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Coordinates, tile storage and grid graph construction
pub mod spatial;

pub use algorithm::{MatchingConfig, MatchingEngine, SearchPolicy};
pub use io::error::{Result, TilingError};
pub use io::report::{Domino, TilingOutcome};
pub use spatial::{Coordinate, TileSet};

/// Decide whether the given cells admit a perfect domino tiling
///
/// Convenience wrapper around [`TileSet::build`] and [`MatchingEngine`] with
/// the default configuration.
///
/// # Errors
///
/// Returns an error if a coordinate is given twice or the engine runs out
/// of memory
pub fn tile(coordinates: Vec<Coordinate>) -> Result<TilingOutcome> {
    let tiles = TileSet::build(coordinates)?;
    MatchingEngine::new(tiles, MatchingConfig::default())?.run()
}
