//! Command-line interface for tiling a region read from a file or stdin

use crate::algorithm::executor::{MatchingConfig, MatchingEngine, SearchPolicy, Step};
use crate::io::configuration::{DEFAULT_CELL_SIZE, STDIN_PATH};
use crate::io::error::{Result, TilingError};
use crate::io::image::export_tiling_as_png;
use crate::io::parser::parse_tiles;
use crate::io::progress::ProgressManager;
use crate::io::report::{TilingOutcome, write_outcome};
use crate::spatial::{Coordinate, TileSet};
use clap::Parser;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "dominotile")]
#[command(
    author,
    version,
    about = "Find a perfect domino tiling of a set of grid cells"
)]
/// Command-line arguments for the tiling tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// File with one `x y` tile per line, or `-` for standard input
    #[arg(value_name = "INPUT", default_value = STDIN_PATH)]
    pub input: PathBuf,

    /// Render the resulting matching as a PNG image
    #[arg(short, long, value_name = "PNG")]
    pub render: Option<PathBuf>,

    /// Edge length of one rendered cell in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Keep searching after the first exhausted tile to find a maximum matching
    #[arg(short, long)]
    pub maximum: bool,

    /// Start from an empty matching instead of a greedy one
    #[arg(short = 'g', long)]
    pub no_greedy: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if input comes from standard input
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == STDIN_PATH
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Engine parameters selected by the flags
    pub const fn matching_config(&self) -> MatchingConfig {
        MatchingConfig {
            policy: if self.maximum {
                SearchPolicy::Maximum
            } else {
                SearchPolicy::PerfectOnly
            },
            greedy_seed: !self.no_greedy,
        }
    }
}

/// Runs parse, build, match and report for one input
pub struct TilingProcessor {
    cli: Cli,
}

impl TilingProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve the input and write the outcome to standard output
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or parsed, contains a
    /// duplicate tile, the engine runs out of memory, or the output or the
    /// rendering cannot be written
    pub fn process(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        self.process_to(&mut writer).map(|_| ())
    }

    /// Solve the input and write the outcome to `writer`
    ///
    /// # Errors
    ///
    /// Same as [`TilingProcessor::process`]
    pub fn process_to<W: Write>(&self, writer: &mut W) -> Result<TilingOutcome> {
        let coordinates = self.read_coordinates()?;
        let tiles = TileSet::build(coordinates)?;
        let tiles = self.solve(tiles)?;

        let outcome = TilingOutcome::from_tile_set(&tiles);
        write_outcome(writer, &outcome)?;

        if let Some(ref render_path) = self.cli.render {
            if tiles.is_empty() {
                log::warn!("nothing to render for an empty region");
            } else {
                export_tiling_as_png(&tiles, self.cli.cell_size, render_path)?;
            }
        }

        Ok(outcome)
    }

    fn read_coordinates(&self) -> Result<Vec<Coordinate>> {
        if self.cli.reads_stdin() {
            let stdin = std::io::stdin();
            return parse_tiles(stdin.lock(), Path::new("<stdin>"));
        }

        let file = File::open(&self.cli.input).map_err(|source| TilingError::FileSystem {
            path: self.cli.input.clone(),
            operation: "open",
            source,
        })?;
        parse_tiles(BufReader::new(file), &self.cli.input)
    }

    fn solve(&self, tiles: TileSet) -> Result<TileSet> {
        let start_time = Instant::now();
        let tile_count = tiles.len();
        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(tile_count)
        } else {
            ProgressManager::hidden()
        };

        let mut engine = MatchingEngine::new(tiles, self.cli.matching_config())?;
        loop {
            let step = engine.step()?;
            if step == Step::Finished {
                break;
            }
            let stats = engine.stats();
            progress.update(2 * (stats.seeded_pairs + stats.augmentations));
        }
        progress.finish();

        let stats = engine.stats();
        log::info!(
            "{tile_count} tiles: {} seeded pairs, {} augmentations, {} searches in {:.2?}",
            stats.seeded_pairs,
            stats.augmentations,
            stats.searches,
            start_time.elapsed()
        );

        if self.cli.maximum {
            let unmatched = engine.unmatched();
            if !unmatched.is_empty() {
                let tiles = engine.tiles();
                for id in &unmatched {
                    if let Some(position) = tiles.position(*id) {
                        log::warn!("tile {position} is not covered by the maximum matching");
                    }
                }
                log::warn!(
                    "maximum matching leaves {} of {tile_count} tiles uncovered",
                    unmatched.len()
                );
            }
        }

        Ok(engine.into_tiles())
    }
}
