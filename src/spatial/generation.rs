//! Seeded random region generation for benchmarks and stress tests

use crate::spatial::coordinate::Coordinate;
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

// Placement attempts per requested domino before giving up on a crowded board
const ATTEMPTS_PER_DOMINO: usize = 8;

/// All cells of a `width` x `height` rectangle anchored at the origin
pub fn rectangle(width: u32, height: u32) -> Vec<Coordinate> {
    (0..width)
        .flat_map(|x| (0..height).map(move |y| Coordinate::new(x, y)))
        .collect()
}

/// Convert an occupancy mask (indexed `[y, x]`) into tile coordinates
pub fn mask_to_coordinates(mask: &Array2<bool>) -> Vec<Coordinate> {
    mask.indexed_iter()
        .filter(|(_, occupied)| **occupied)
        .map(|((y, x), _)| Coordinate::new(x as u32, y as u32))
        .collect()
}

/// Deterministic generator of random tile regions
pub struct RegionGenerator {
    rng: StdRng,
}

impl RegionGenerator {
    /// Create a generator with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Occupancy mask where every cell is present with probability `density`
    ///
    /// The density is clamped to `[0, 1]`. The result may or may not admit a
    /// domino tiling.
    pub fn random_mask(&mut self, width: usize, height: usize, density: f64) -> Array2<bool> {
        let density = density.clamp(0.0, 1.0);
        Array2::from_shape_simple_fn((height, width), || self.rng.random_bool(density))
    }

    /// Random region that may or may not admit a domino tiling
    pub fn random_region(&mut self, width: usize, height: usize, density: f64) -> Vec<Coordinate> {
        mask_to_coordinates(&self.random_mask(width, height, density))
    }

    /// Region built from up to `dominoes` non-overlapping random dominoes
    ///
    /// Always admits a perfect tiling, usually many different ones.
    pub fn tileable_region(&mut self, width: usize, height: usize, dominoes: usize) -> Vec<Coordinate> {
        let mut mask = Array2::from_elem((height, width), false);
        if width == 0 || height == 0 {
            return Vec::new();
        }

        let mut placed = 0;
        for _ in 0..dominoes.saturating_mul(ATTEMPTS_PER_DOMINO) {
            if placed == dominoes {
                break;
            }

            let x = self.rng.random_range(0..width);
            let y = self.rng.random_range(0..height);
            let (other_x, other_y) = if self.rng.random_bool(0.5) {
                (x + 1, y)
            } else {
                (x, y + 1)
            };

            let free = |cell: Option<&bool>| cell.is_some_and(|occupied| !*occupied);
            if free(mask.get((y, x))) && free(mask.get((other_y, other_x))) {
                if let Some(cell) = mask.get_mut((y, x)) {
                    *cell = true;
                }
                if let Some(cell) = mask.get_mut((other_y, other_x)) {
                    *cell = true;
                }
                placed += 1;
            }
        }

        mask_to_coordinates(&mask)
    }
}
