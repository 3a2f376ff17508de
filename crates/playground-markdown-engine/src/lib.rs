pub mod classify;
pub mod group;
pub mod io;
pub mod render;
pub mod segment;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use classify::{DEFAULT_MARKER, LineClassifier, is_documentation_line};
pub use group::group_runs;
pub use io::{FileSystem, IoError, OsFileSystem};
pub use render::{
    DEFAULT_CODE_LANGUAGE_TAG, RenderOptions, parse_segments, render_markdown, render_segments,
};
pub use segment::{Segment, to_segments};
