/// Command-line interface and input processing
pub mod cli;
/// Engine constants and runtime defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG rendering of a matched region
pub mod image;
/// Line-oriented coordinate input
pub mod parser;
/// Progress display for long runs
pub mod progress;
/// Tiling outcome and output format
pub mod report;
