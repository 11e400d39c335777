//! Breadth-first search for augmenting paths
//!
//! The search grows an alternating tree from one unmatched start tile.
//! Outer tiles (the start and every tile entered through a matching edge)
//! are expanded over their grid edges; a reached tile that is matched hands
//! the search on to its partner, a reached tile that is unmatched ends it.
//! Breadth-first order makes the first path found a shortest one.

use crate::algorithm::bitset::TileFlags;
use crate::algorithm::buffer::TryPush;
use crate::algorithm::markers::SearchMarkers;
use crate::io::error::Result;
use crate::spatial::{TileId, TileSet};
use std::collections::VecDeque;

/// Alternating path between two unmatched tiles, stored start to end
///
/// Consecutive tiles are grid neighbours. Edges at even offsets are outside
/// the matching, edges at odd offsets inside it, so the length is even.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    tiles: Vec<TileId>,
}

impl AugmentingPath {
    /// Tiles along the path from the start to the end
    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }

    /// Number of tiles on the path
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the path holds no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Unmatched tile the search started from
    pub fn start(&self) -> Option<TileId> {
        self.tiles.first().copied()
    }

    /// Unmatched tile the search ended at
    pub fn end(&self) -> Option<TileId> {
        self.tiles.last().copied()
    }

    /// Pairs that form the matching once the path is flipped
    pub fn flipped_pairs(&self) -> impl Iterator<Item = (TileId, TileId)> + '_ {
        self.tiles.chunks_exact(2).filter_map(|pair| match pair {
            [first, second] => Some((*first, *second)),
            _ => None,
        })
    }
}

/// Result of one search from one start tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// An augmenting path was found
    Found(AugmentingPath),
    /// No augmenting path starts at this tile under the current matching
    Exhausted,
}

/// First tile at or after `from` that can start a search
///
/// A start must be unmatched and not be known to be exhausted.
pub fn find_start(tiles: &TileSet, exhausted: &TileFlags, from: usize) -> Option<TileId> {
    tiles
        .iter()
        .skip(from)
        .find(|(id, tile)| !tile.is_matched() && !exhausted.contains(*id))
        .map(|(id, _)| id)
}

/// Search an augmenting path from `start`
///
/// `queue` is a reusable buffer; its previous contents are discarded. Every
/// marker written here is erased before this function returns, whatever the
/// outcome.
///
/// # Errors
///
/// Returns `ResourceExhausted` if the queue, marker log or path buffer
/// cannot grow. No marker survives the error either.
pub fn search_augmenting_path(
    tiles: &TileSet,
    start: TileId,
    markers: &mut SearchMarkers,
    queue: &mut VecDeque<TileId>,
) -> Result<SearchResult> {
    queue.clear();
    let mut scope = markers.scope();

    scope.mark(start, start)?;
    queue.try_push(start, "search queue")?;

    let mut end = None;
    'search: while let Some(outer) = queue.pop_front() {
        let Some(tile) = tiles.tile(outer) else {
            continue;
        };

        for neighbor in tile.neighbors() {
            if scope.is_marked(neighbor) {
                continue;
            }
            scope.mark(neighbor, outer)?;

            match tiles.partner(neighbor) {
                None => {
                    end = Some(neighbor);
                    break 'search;
                }
                Some(partner) => {
                    if !scope.is_marked(partner) {
                        scope.mark(partner, neighbor)?;
                        queue.try_push(partner, "search queue")?;
                    }
                }
            }
        }
    }

    let Some(end) = end else {
        log::trace!("no augmenting path from {start:?} after {} markers", scope.written());
        return Ok(SearchResult::Exhausted);
    };

    let mut reversed = scope.trace_back(end, start)?;
    reversed.reverse();
    log::trace!(
        "augmenting path of {} tiles from {start:?} to {end:?}, {} markers",
        reversed.len(),
        scope.written()
    );

    Ok(SearchResult::Found(AugmentingPath { tiles: reversed }))
}
