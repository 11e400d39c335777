//! Flipping a matching along an augmenting path

use crate::algorithm::search::AugmentingPath;
use crate::spatial::TileSet;

/// Swap matched and unmatched edges along `path`
///
/// Tiles at even offsets are paired with the tile that follows them; the
/// old matching edges in between are overwritten in the process. The
/// matching grows by exactly one pair. Returns the number of pairs written.
pub fn augment(tiles: &mut TileSet, path: &AugmentingPath) -> usize {
    let mut written = 0;
    for (first, second) in path.flipped_pairs() {
        tiles.pair(first, second);
        written += 1;
    }
    written
}
