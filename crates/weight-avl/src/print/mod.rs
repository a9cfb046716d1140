//! Text renderings of a tree. Both handle an absent root with a fixed marker.

pub mod dump;
pub mod levels;

pub use dump::{dump, EMPTY_DUMP};
pub use levels::{render_levels, EMPTY_LEVELS, MAX_LEVELS};
