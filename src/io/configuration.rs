//! Engine constants and runtime configuration defaults

// Search buffers start small and double on demand
/// Initial capacity of the breadth-first search queue
pub const INITIAL_QUEUE_CAPACITY: usize = 32;
/// Initial capacity of an augmenting path buffer
pub const INITIAL_PATH_CAPACITY: usize = 32;
/// Initial capacity of the log of written search markers
pub const INITIAL_MARKER_LOG_CAPACITY: usize = 32;

// Progress bar display settings
/// Regions smaller than this finish too quickly to warrant a progress bar
pub const PROGRESS_MIN_TILES: usize = 10_000;

// Rendering settings
/// Default edge length of one rendered cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 16;
/// Largest accepted cell edge length in pixels
pub const MAX_CELL_SIZE: u32 = 256;
/// Upper bound on the pixel count of a rendered image
pub const MAX_RENDER_PIXELS: u64 = 1 << 26;

// Input and output conventions
/// Input path that selects standard input
pub const STDIN_PATH: &str = "-";
/// Line written when the region has no perfect tiling
pub const NO_TILING_SENTINEL: &str = "None";
