//! PNG rendering of a matched region
//!
//! Every tile becomes a square cell. Cells of the same domino share a fill
//! colour and are outlined together; unmatched tiles are drawn grey. North
//! (larger `y`) points up.

use crate::io::configuration::{MAX_CELL_SIZE, MAX_RENDER_PIXELS};
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::spatial::{Coordinate, TileSet};
use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

const EMPTY: u32 = 0;
const UNMATCHED: u32 = u32::MAX;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 0]);
const OUTLINE: Rgba<u8> = Rgba([32, 32, 32, 255]);
const UNMATCHED_FILL: Rgba<u8> = Rgba([160, 160, 160, 255]);
const PALETTE: [Rgba<u8>; 6] = [
    Rgba([230, 97, 92, 255]),
    Rgba([93, 165, 218, 255]),
    Rgba([250, 200, 88, 255]),
    Rgba([96, 189, 104, 255]),
    Rgba([178, 118, 178, 255]),
    Rgba([241, 145, 66, 255]),
];

/// Smallest axis-aligned rectangle containing every tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Lower-left corner
    pub min: Coordinate,
    /// Upper-right corner
    pub max: Coordinate,
}

impl Bounds {
    /// Bounds of a region, `None` if it has no tiles
    pub fn of(tiles: &TileSet) -> Option<Self> {
        let mut positions = tiles.iter().map(|(_, tile)| tile.position());
        let first = positions.next()?;
        Some(positions.fold(
            Self {
                min: first,
                max: first,
            },
            |bounds, position| Self {
                min: Coordinate::new(bounds.min.x.min(position.x), bounds.min.y.min(position.y)),
                max: Coordinate::new(bounds.max.x.max(position.x), bounds.max.y.max(position.y)),
            },
        ))
    }

    /// Number of columns covered
    pub const fn width(&self) -> u64 {
        (self.max.x - self.min.x) as u64 + 1
    }

    /// Number of rows covered
    pub const fn height(&self) -> u64 {
        (self.max.y - self.min.y) as u64 + 1
    }
}

/// Label every cell of the bounding box
///
/// `0` marks cells outside the region, `u32::MAX` unmatched tiles, and
/// `k + 1` the two cells of the `k`-th domino. Rows are indexed top-down.
///
/// # Errors
///
/// Returns an error if the bounding box exceeds the render size limit
pub fn label_grid(tiles: &TileSet) -> Result<Array2<u32>> {
    let Some(bounds) = Bounds::of(tiles) else {
        return Ok(Array2::zeros((0, 0)));
    };

    let cells = bounds.width().saturating_mul(bounds.height());
    if cells > MAX_RENDER_PIXELS {
        return Err(invalid_parameter(
            "render",
            &format!("{}x{}", bounds.width(), bounds.height()),
            &"region too large to render",
        ));
    }

    let mut labels = Array2::from_elem((bounds.height() as usize, bounds.width() as usize), EMPTY);
    let cell_of = |position: Coordinate| {
        (
            (bounds.max.y - position.y) as usize,
            (position.x - bounds.min.x) as usize,
        )
    };

    for (_, tile) in tiles.iter() {
        if let Some(cell) = labels.get_mut(cell_of(tile.position())) {
            *cell = UNMATCHED;
        }
    }
    for (label, (first, second)) in (1..).zip(tiles.matched_pairs()) {
        for id in [first, second] {
            if let Some(position) = tiles.position(id) {
                if let Some(cell) = labels.get_mut(cell_of(position)) {
                    *cell = label;
                }
            }
        }
    }

    Ok(labels)
}

fn fill(label: u32) -> Rgba<u8> {
    match label {
        EMPTY => BACKGROUND,
        UNMATCHED => UNMATCHED_FILL,
        _ => PALETTE
            .get(label as usize % PALETTE.len())
            .copied()
            .unwrap_or(UNMATCHED_FILL),
    }
}

/// Draw a label grid with `cell_size` pixels per cell
///
/// Cell borders are outlined wherever the label changes, so each domino
/// shows as one rectangle.
pub fn render_labels(labels: &Array2<u32>, cell_size: u32) -> RgbaImage {
    let cell_size = cell_size.max(1);
    let (rows, cols) = labels.dim();
    let label_at = |row: Option<usize>, col: Option<usize>| match (row, col) {
        (Some(row), Some(col)) => labels.get((row, col)).copied().unwrap_or(EMPTY),
        _ => EMPTY,
    };

    let width = (cols as u32).saturating_mul(cell_size);
    let height = (rows as u32).saturating_mul(cell_size);
    ImageBuffer::from_fn(width, height, |px, py| {
        let (col, row) = ((px / cell_size) as usize, (py / cell_size) as usize);
        let (inner_x, inner_y) = (px % cell_size, py % cell_size);
        let label = label_at(Some(row), Some(col));
        if label == EMPTY {
            return BACKGROUND;
        }

        let last = cell_size - 1;
        let on_border = (inner_x == 0 && label_at(Some(row), col.checked_sub(1)) != label)
            || (inner_x == last && label_at(Some(row), Some(col + 1)) != label)
            || (inner_y == 0 && label_at(row.checked_sub(1), Some(col)) != label)
            || (inner_y == last && label_at(Some(row + 1), Some(col)) != label)
            || (label == UNMATCHED
                && (inner_x == 0 || inner_y == 0 || inner_x == last || inner_y == last));

        if on_border { OUTLINE } else { fill(label) }
    })
}

/// Render the current matching of `tiles` to a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` is zero or above [`MAX_CELL_SIZE`]
/// - the rendered image would exceed the size limit
/// - the image cannot be written to `path`
pub fn export_tiling_as_png(tiles: &TileSet, cell_size: u32, path: &Path) -> Result<()> {
    if cell_size == 0 || cell_size > MAX_CELL_SIZE {
        return Err(invalid_parameter(
            "cell-size",
            &cell_size,
            &format!("must be between 1 and {MAX_CELL_SIZE}"),
        ));
    }

    let labels = label_grid(tiles)?;
    let (rows, cols) = labels.dim();
    let pixels = (rows as u64 * cols as u64).saturating_mul(u64::from(cell_size).pow(2));
    if pixels > MAX_RENDER_PIXELS {
        return Err(invalid_parameter(
            "cell-size",
            &cell_size,
            &"rendered image would be too large",
        ));
    }

    render_labels(&labels, cell_size)
        .save(path)
        .map_err(|source| TilingError::ImageExport {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("rendered {cols}x{rows} cells to {}", path.display());
    Ok(())
}
