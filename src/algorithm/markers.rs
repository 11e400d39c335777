//! Search-local predecessor markers with guaranteed cleanup
//!
//! A breadth-first search records, for every tile it reaches, the tile it
//! was reached from. Those markers double as the visited set, so a marker
//! left behind by one search would hide tiles from the next. All writes go
//! through a [`MarkerScope`], which erases exactly the markers it wrote when
//! it is dropped, on success, on early return and on error alike.

use crate::algorithm::buffer::{TryPush, try_with_capacity};
use crate::io::configuration::{INITIAL_MARKER_LOG_CAPACITY, INITIAL_PATH_CAPACITY};
use crate::io::error::Result;
use crate::spatial::TileId;

/// Predecessor slot per tile plus a log of the slots currently written
#[derive(Debug)]
pub struct SearchMarkers {
    predecessors: Vec<Option<TileId>>,
    written: Vec<TileId>,
}

impl SearchMarkers {
    /// Allocate an empty marker table for `tile_count` tiles
    ///
    /// # Errors
    ///
    /// Returns `ResourceExhausted` if the table cannot be allocated
    pub fn new(tile_count: usize) -> Result<Self> {
        let mut predecessors = try_with_capacity(tile_count, "search marker table")?;
        predecessors.resize(tile_count, None);

        Ok(Self {
            predecessors,
            written: try_with_capacity(INITIAL_MARKER_LOG_CAPACITY, "search marker log")?,
        })
    }

    /// Open a scope for one search; its markers vanish when it is dropped
    pub fn scope(&mut self) -> MarkerScope<'_> {
        MarkerScope { markers: self }
    }

    /// Tile a marked tile was reached from
    pub fn predecessor(&self, tile: TileId) -> Option<TileId> {
        self.predecessors.get(tile.index()).copied().flatten()
    }

    /// Whether a tile currently carries a marker
    pub fn is_marked(&self, tile: TileId) -> bool {
        self.predecessor(tile).is_some()
    }

    /// Whether no tile carries a marker
    pub fn is_clear(&self) -> bool {
        self.written.is_empty() && self.predecessors.iter().all(Option::is_none)
    }
}

/// Write access to [`SearchMarkers`] for the duration of one search
#[derive(Debug)]
pub struct MarkerScope<'a> {
    markers: &'a mut SearchMarkers,
}

impl MarkerScope<'_> {
    /// Record that `tile` was reached from `predecessor`
    ///
    /// A search root is marked with itself as predecessor.
    ///
    /// # Errors
    ///
    /// Returns `ResourceExhausted` if the marker log cannot grow
    pub fn mark(&mut self, tile: TileId, predecessor: TileId) -> Result<()> {
        // Log first: a failed push must not leave an unlogged marker behind
        self.markers.written.try_push(tile, "search marker log")?;
        if let Some(slot) = self.markers.predecessors.get_mut(tile.index()) {
            *slot = Some(predecessor);
        }
        Ok(())
    }

    /// Tile a marked tile was reached from
    pub fn predecessor(&self, tile: TileId) -> Option<TileId> {
        self.markers.predecessor(tile)
    }

    /// Whether a tile was reached in this search
    pub fn is_marked(&self, tile: TileId) -> bool {
        self.markers.is_marked(tile)
    }

    /// Number of markers written so far
    pub fn written(&self) -> usize {
        self.markers.written.len()
    }

    /// Follow predecessors from `end` back to the root `start`
    ///
    /// Returns the tiles in `end -> start` order. The walk stops at the root
    /// (the tile that is its own predecessor) and never takes more steps
    /// than there are markers.
    ///
    /// # Errors
    ///
    /// Returns `ResourceExhausted` if the path buffer cannot grow
    pub fn trace_back(&self, end: TileId, start: TileId) -> Result<Vec<TileId>> {
        let mut path = try_with_capacity(INITIAL_PATH_CAPACITY, "augmenting path")?;
        path.try_push(end, "augmenting path")?;

        let mut current = end;
        for _ in 0..self.written() {
            if current == start {
                break;
            }
            let Some(previous) = self.predecessor(current) else {
                break;
            };
            current = previous;
            path.try_push(current, "augmenting path")?;
        }

        Ok(path)
    }
}

impl Drop for MarkerScope<'_> {
    fn drop(&mut self) {
        let SearchMarkers {
            predecessors,
            written,
        } = &mut *self.markers;

        for tile in written.drain(..) {
            if let Some(slot) = predecessors.get_mut(tile.index()) {
                *slot = None;
            }
        }
    }
}
