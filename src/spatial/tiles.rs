//! Tile storage and grid graph construction
//!
//! Tiles live in one contiguous vector sorted by `(x, y)`. Neighbour and
//! matching relations are indices into that vector, so the container never
//! has to be re-linked after it is built.

use crate::io::error::{Result, TilingError};
use crate::spatial::coordinate::{Coordinate, Direction};

/// Index of a tile inside its [`TileSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(usize);

impl TileId {
    /// Wrap a raw container index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw container index
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A unit cell with its grid links and current matching partner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    position: Coordinate,
    north: Option<TileId>,
    east: Option<TileId>,
    south: Option<TileId>,
    west: Option<TileId>,
    matched_with: Option<TileId>,
}

impl Tile {
    const fn unlinked(position: Coordinate) -> Self {
        Self {
            position,
            north: None,
            east: None,
            south: None,
            west: None,
            matched_with: None,
        }
    }

    /// Grid coordinate of the tile
    pub const fn position(&self) -> Coordinate {
        self.position
    }

    /// Tile sharing the edge in the given direction
    pub const fn neighbor(&self, direction: Direction) -> Option<TileId> {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Existing neighbours in search order (north, south, east, west)
    pub fn neighbors(&self) -> impl Iterator<Item = TileId> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.neighbor(direction))
    }

    /// Partner in the current matching
    pub const fn matched_with(&self) -> Option<TileId> {
        self.matched_with
    }

    /// Whether the tile is covered by the current matching
    pub const fn is_matched(&self) -> bool {
        self.matched_with.is_some()
    }

    const fn link_slot(&mut self, direction: Direction) -> &mut Option<TileId> {
        match direction {
            Direction::North => &mut self.north,
            Direction::East => &mut self.east,
            Direction::South => &mut self.south,
            Direction::West => &mut self.west,
        }
    }
}

/// Sorted, linked collection of all tiles of one region
///
/// Cardinality and coordinates are fixed after [`TileSet::build`]; only the
/// matching changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// Sort the coordinates, reject duplicates and link grid neighbours
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::DuplicateTile`] if a coordinate occurs twice.
    pub fn build(mut coordinates: Vec<Coordinate>) -> Result<Self> {
        coordinates.sort_unstable();

        if let Some(pair) = coordinates.windows(2).find(|pair| pair.first() == pair.last()) {
            if let Some(&coordinate) = pair.first() {
                return Err(TilingError::DuplicateTile { coordinate });
            }
        }

        let mut tile_set = Self {
            tiles: coordinates.into_iter().map(Tile::unlinked).collect(),
        };
        tile_set.link();
        Ok(tile_set)
    }

    // North is always the next tile in sorted order if it exists; east is
    // searched in the suffix. South and west are written as inverses only.
    fn link(&mut self) {
        for index in 0..self.tiles.len() {
            let Some(position) = self.tiles.get(index).map(Tile::position) else {
                continue;
            };
            let current = TileId(index);

            if let Some(north) = position.step(Direction::North) {
                let next = TileId(index + 1);
                if self.position(next) == Some(north) {
                    self.connect(current, next, Direction::North);
                }
            }

            if let Some(east) = position.step(Direction::East) {
                if let Some(found) = self.find_from(index + 1, east) {
                    self.connect(current, found, Direction::East);
                }
            }
        }
    }

    fn connect(&mut self, from: TileId, to: TileId, direction: Direction) {
        if let Some(tile) = self.tiles.get_mut(from.0) {
            *tile.link_slot(direction) = Some(to);
        }
        if let Some(tile) = self.tiles.get_mut(to.0) {
            *tile.link_slot(direction.opposite()) = Some(from);
        }
    }

    fn find_from(&self, start: usize, coordinate: Coordinate) -> Option<TileId> {
        self.tiles
            .get(start..)?
            .binary_search_by_key(&coordinate, Tile::position)
            .ok()
            .map(|offset| TileId(start + offset))
    }

    /// Locate the tile at a coordinate
    pub fn find(&self, coordinate: Coordinate) -> Option<TileId> {
        self.find_from(0, coordinate)
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the region has no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile behind an id
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0)
    }

    /// Coordinate of a tile
    pub fn position(&self, id: TileId) -> Option<Coordinate> {
        self.tile(id).map(Tile::position)
    }

    /// Neighbour of a tile in one direction
    pub fn neighbor(&self, id: TileId, direction: Direction) -> Option<TileId> {
        self.tile(id).and_then(|tile| tile.neighbor(direction))
    }

    /// Matching partner of a tile
    pub fn partner(&self, id: TileId) -> Option<TileId> {
        self.tile(id).and_then(Tile::matched_with)
    }

    /// All tiles in sorted order together with their ids
    pub fn iter(&self) -> impl Iterator<Item = (TileId, &Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (TileId(index), tile))
    }

    /// Number of tiles covered by the matching
    pub fn matched_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_matched()).count()
    }

    /// Ids of tiles not covered by the matching
    pub fn unmatched(&self) -> Vec<TileId> {
        self.iter()
            .filter(|(_, tile)| !tile.is_matched())
            .map(|(id, _)| id)
            .collect()
    }

    /// Matched pairs, each reported once from its lower id
    pub fn matched_pairs(&self) -> impl Iterator<Item = (TileId, TileId)> + '_ {
        self.iter().filter_map(|(id, tile)| {
            tile.matched_with()
                .filter(|&partner| partner > id)
                .map(|partner| (id, partner))
        })
    }

    /// Make `first` and `second` partners of each other
    ///
    /// Any previous partner is left to the caller; augmenting paths overwrite
    /// every stale link on the way.
    pub(crate) fn pair(&mut self, first: TileId, second: TileId) {
        if let Some(tile) = self.tiles.get_mut(first.0) {
            tile.matched_with = Some(second);
        }
        if let Some(tile) = self.tiles.get_mut(second.0) {
            tile.matched_with = Some(first);
        }
    }

    /// Greedily pair every free tile with its first free north or east neighbour
    ///
    /// Any matching is a valid starting point for augmentation; this one
    /// usually covers most of a region in a single linear pass.
    /// Returns the number of pairs formed.
    pub fn seed_greedy(&mut self) -> usize {
        let mut pairs = 0;
        for index in 0..self.tiles.len() {
            let current = TileId(index);
            let Some(tile) = self.tile(current) else {
                continue;
            };
            if tile.is_matched() {
                continue;
            }

            let candidate = [Direction::North, Direction::East]
                .into_iter()
                .filter_map(|direction| tile.neighbor(direction))
                .find(|&neighbor| self.partner(neighbor).is_none());

            if let Some(neighbor) = candidate {
                self.pair(current, neighbor);
                pairs += 1;
            }
        }
        pairs
    }

    /// Check that the matching is symmetric and only uses grid edges
    pub fn is_matching_valid(&self) -> bool {
        self.iter().all(|(id, tile)| match tile.matched_with() {
            None => true,
            Some(partner) => {
                self.partner(partner) == Some(id)
                    && partner != id
                    && tile.neighbors().any(|neighbor| neighbor == partner)
            }
        })
    }
}
