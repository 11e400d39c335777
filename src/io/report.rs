//! Final tiling outcome and its line-oriented text format

use crate::io::configuration::NO_TILING_SENTINEL;
use crate::io::error::{Result, TilingError};
use crate::spatial::{Coordinate, TileSet};
use std::fmt;
use std::io::Write;

/// Two edge-adjacent tiles covered by one domino
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Domino {
    /// Tile that comes first in `(x, y)` order
    pub first: Coordinate,
    /// The other tile
    pub second: Coordinate,
}

impl Domino {
    /// Whether both halves share an edge
    pub const fn is_adjacent(&self) -> bool {
        self.first.is_adjacent(self.second)
    }
}

impl fmt::Display for Domino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.first, self.second)
    }
}

/// What a completed run reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TilingOutcome {
    /// No tiles were given
    Empty,
    /// At least one tile cannot be covered by any perfect tiling
    NoTiling,
    /// A perfect tiling, ordered by the first tile of each domino
    Tiling(Vec<Domino>),
}

impl TilingOutcome {
    /// Read the outcome off a finished matching
    pub fn from_tile_set(tiles: &TileSet) -> Self {
        if tiles.is_empty() {
            return Self::Empty;
        }
        if tiles.matched_count() != tiles.len() {
            return Self::NoTiling;
        }

        let dominoes = tiles
            .matched_pairs()
            .filter_map(|(first, second)| {
                Some(Domino {
                    first: tiles.position(first)?,
                    second: tiles.position(second)?,
                })
            })
            .collect();
        Self::Tiling(dominoes)
    }

    /// Whether a perfect tiling was found
    pub const fn is_tiling(&self) -> bool {
        matches!(self, Self::Tiling(_))
    }

    /// Dominoes of the tiling; empty unless a tiling was found
    pub fn dominoes(&self) -> &[Domino] {
        match self {
            Self::Tiling(dominoes) => dominoes,
            Self::Empty | Self::NoTiling => &[],
        }
    }
}

/// Write an outcome in the line-oriented output format
///
/// Nothing for [`TilingOutcome::Empty`], the `None` line for
/// [`TilingOutcome::NoTiling`], and one `x1 y1;x2 y2` line per domino
/// otherwise.
///
/// # Errors
///
/// Returns [`TilingError::Output`] if the writer fails
pub fn write_outcome<W: Write>(writer: &mut W, outcome: &TilingOutcome) -> Result<()> {
    let written = match outcome {
        TilingOutcome::Empty => Ok(()),
        TilingOutcome::NoTiling => writeln!(writer, "{NO_TILING_SENTINEL}"),
        TilingOutcome::Tiling(dominoes) => dominoes
            .iter()
            .try_for_each(|domino| writeln!(writer, "{domino}")),
    };

    written
        .and_then(|()| writer.flush())
        .map_err(|source| TilingError::Output { source })
}
