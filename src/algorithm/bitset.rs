use crate::spatial::TileId;
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size set of tiles, one bit per tile id
///
/// Tracks starts that were proven to admit no augmenting path. Provides O(1)
/// membership testing without touching the tiles themselves.
#[derive(Clone, Debug)]
pub struct TileFlags {
    bits: BitVec,
}

impl TileFlags {
    /// Create a set with no tile flagged
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
        }
    }

    /// Flag a tile
    ///
    /// Ids outside the set are ignored.
    pub fn insert(&mut self, tile: TileId) {
        if tile.index() < self.bits.len() {
            self.bits.set(tile.index(), true);
        }
    }

    /// Test whether a tile is flagged
    pub fn contains(&self, tile: TileId) -> bool {
        self.bits.get(tile.index()).as_deref() == Some(&true)
    }

    /// Test if no tile is flagged
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count flagged tiles
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of tiles the set can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// All flagged tile ids in ascending order
    pub fn to_vec(&self) -> Vec<TileId> {
        self.bits.iter_ones().map(TileId::new).collect()
    }
}

impl fmt::Display for TileFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileFlags({} of {} tiles)", self.count(), self.capacity())
    }
}
