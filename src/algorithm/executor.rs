use crate::{
    algorithm::augment::augment,
    algorithm::bitset::TileFlags,
    algorithm::buffer::try_queue_with_capacity,
    algorithm::markers::SearchMarkers,
    algorithm::search::{SearchResult, find_start, search_augmenting_path},
    io::configuration::INITIAL_QUEUE_CAPACITY,
    io::error::Result,
    io::report::TilingOutcome,
    spatial::{TileId, TileSet},
};
use std::collections::VecDeque;

/// How far the engine keeps searching once a start admits no augmenting path
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchPolicy {
    /// Stop at the first exhausted start
    ///
    /// An unmatched tile without an augmenting path stays unmatched in every
    /// maximum matching, so a perfect tiling is already ruled out.
    #[default]
    PerfectOnly,
    /// Keep searching from the remaining starts until the matching is maximum
    Maximum,
}

/// Engine parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchingConfig {
    /// When to stop after an exhausted start
    pub policy: SearchPolicy,
    /// Whether to seed the matching greedily before searching
    pub greedy_seed: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            policy: SearchPolicy::PerfectOnly,
            greedy_seed: true,
        }
    }
}

/// Phase of the search-and-augment loop between two steps
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// More starts remain to be searched
    Searching,
    /// The loop has terminated; the outcome is final
    Exhausted,
}

/// What a single [`MatchingEngine::step`] did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// An augmenting path was found and flipped
    Augmented {
        /// Start tile of the path
        start: TileId,
        /// Number of tiles on the path
        path_length: usize,
    },
    /// The start admits no augmenting path and will not be tried again
    StartExhausted {
        /// The exhausted start tile
        start: TileId,
    },
    /// Nothing left to do
    Finished,
}

/// Counters describing one engine run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchingStats {
    /// Pairs formed by greedy seeding
    pub seeded_pairs: usize,
    /// Searches started
    pub searches: usize,
    /// Successful augmentations
    pub augmentations: usize,
    /// Starts proven to admit no augmenting path
    pub exhausted_starts: usize,
    /// Tiles on the longest augmenting path flipped
    pub longest_path: usize,
}

/// Maximum-matching engine over the grid graph of one region
///
/// Owns its [`TileSet`] for the whole run. Each [`step`](Self::step) picks
/// the next unmatched start, searches an augmenting path from it and flips
/// the path if one exists. The loop ends when no start is left or, under
/// [`SearchPolicy::PerfectOnly`], at the first exhausted start.
pub struct MatchingEngine {
    tiles: TileSet,
    config: MatchingConfig,
    markers: SearchMarkers,
    queue: VecDeque<TileId>,
    exhausted: TileFlags,
    /// Every tile before this index is matched or exhausted
    cursor: usize,
    state: EngineState,
    stats: MatchingStats,
}

impl MatchingEngine {
    /// Prepare a run over a linked tile set
    ///
    /// Empty and odd-sized regions terminate immediately: neither needs a
    /// search to know its outcome.
    ///
    /// # Errors
    ///
    /// Returns `ResourceExhausted` if the search buffers cannot be allocated
    pub fn new(mut tiles: TileSet, config: MatchingConfig) -> Result<Self> {
        let tile_count = tiles.len();
        let mut stats = MatchingStats::default();

        let state = if tile_count == 0 {
            EngineState::Exhausted
        } else if tile_count % 2 == 1 {
            log::info!("{tile_count} tiles: odd count cannot be tiled");
            EngineState::Exhausted
        } else {
            if config.greedy_seed {
                stats.seeded_pairs = tiles.seed_greedy();
                log::debug!(
                    "greedy seeding paired {} of {tile_count} tiles",
                    stats.seeded_pairs * 2
                );
            }
            EngineState::Searching
        };

        Ok(Self {
            markers: SearchMarkers::new(tile_count)?,
            queue: try_queue_with_capacity(INITIAL_QUEUE_CAPACITY, "search queue")?,
            exhausted: TileFlags::new(tile_count),
            tiles,
            config,
            cursor: 0,
            state,
            stats,
        })
    }

    /// Run one search, and one augmentation if the search succeeds
    ///
    /// # Errors
    ///
    /// Returns `ResourceExhausted` if a search buffer cannot grow. The run
    /// cannot be resumed meaningfully afterwards.
    pub fn step(&mut self) -> Result<Step> {
        if self.state == EngineState::Exhausted {
            return Ok(Step::Finished);
        }

        debug_assert!(self.markers.is_clear(), "markers leaked from the previous search");

        let Some(start) = find_start(&self.tiles, &self.exhausted, self.cursor) else {
            log::debug!(
                "matching is maximum: {} of {} tiles matched",
                self.tiles.matched_count(),
                self.tiles.len()
            );
            self.state = EngineState::Exhausted;
            return Ok(Step::Finished);
        };
        // Matched tiles stay matched and exhausted ones stay exhausted
        self.cursor = start.index();
        self.stats.searches += 1;

        match search_augmenting_path(&self.tiles, start, &mut self.markers, &mut self.queue)? {
            SearchResult::Found(path) => {
                augment(&mut self.tiles, &path);
                self.stats.augmentations += 1;
                self.stats.longest_path = self.stats.longest_path.max(path.len());
                Ok(Step::Augmented {
                    start,
                    path_length: path.len(),
                })
            }
            SearchResult::Exhausted => {
                self.exhausted.insert(start);
                self.stats.exhausted_starts += 1;

                if self.config.policy == SearchPolicy::PerfectOnly {
                    if let Some(position) = self.tiles.position(start) {
                        log::info!("tile {position} admits no augmenting path: no perfect tiling");
                    }
                    self.state = EngineState::Exhausted;
                }
                Ok(Step::StartExhausted { start })
            }
        }
    }

    /// Step until the loop terminates
    ///
    /// # Errors
    ///
    /// Propagates the first `ResourceExhausted` error
    pub fn run_to_completion(&mut self) -> Result<()> {
        while self.step()? != Step::Finished {}
        log::debug!("{:?}", self.stats);
        Ok(())
    }

    /// Run to completion and report the outcome
    ///
    /// # Errors
    ///
    /// Propagates the first `ResourceExhausted` error; no partial tiling is
    /// reported in that case
    pub fn run(mut self) -> Result<TilingOutcome> {
        self.run_to_completion()?;
        Ok(self.outcome())
    }

    /// Outcome under the current matching
    ///
    /// Final once the state is [`EngineState::Exhausted`].
    pub fn outcome(&self) -> TilingOutcome {
        TilingOutcome::from_tile_set(&self.tiles)
    }

    /// Current phase of the loop
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// Counters collected so far
    pub const fn stats(&self) -> &MatchingStats {
        &self.stats
    }

    /// Engine parameters
    pub const fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// The tiles and their current matching
    pub const fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    /// Predecessor markers; clear between steps
    pub const fn markers(&self) -> &SearchMarkers {
        &self.markers
    }

    /// Starts proven to admit no augmenting path
    pub const fn exhausted(&self) -> &TileFlags {
        &self.exhausted
    }

    /// Tiles not covered by the current matching
    pub fn unmatched(&self) -> Vec<TileId> {
        self.tiles.unmatched()
    }

    /// Give up the engine and keep the matched tiles
    pub fn into_tiles(self) -> TileSet {
        self.tiles
    }
}
