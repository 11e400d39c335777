/// Flipping the matching along an augmenting path
pub mod augment;
/// Compact tile flags for exhausted search starts
pub mod bitset;
/// Fallible amortised growth for search buffers
pub mod buffer;
/// Search-and-augment loop and its configuration
pub mod executor;
/// Scoped predecessor markers for one search
pub mod markers;
/// Breadth-first augmenting path search
pub mod search;

pub use executor::{EngineState, MatchingConfig, MatchingEngine, SearchPolicy, Step};
