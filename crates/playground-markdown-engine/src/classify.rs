/// Prefix that marks a line as prose in a playground source.
pub const DEFAULT_MARKER: &str = "//:";

/// Decides whether a single source line is documentation or code.
///
/// A line is documentation when it starts with the marker. The check is
/// case-sensitive and leading whitespace is not trimmed, so an indented
/// `  //: note` stays code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClassifier {
    marker: String,
}

impl LineClassifier {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn is_documentation(&self, line: &str) -> bool {
        line.starts_with(self.marker.as_str())
    }

    /// Number of characters removed from the front of a documentation line:
    /// the marker plus one delimiter.
    pub fn strip_width(&self) -> usize {
        self.marker.chars().count() + 1
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

/// Classifies `line` against the default `//:` marker.
pub fn is_documentation_line(line: &str) -> bool {
    line.starts_with(DEFAULT_MARKER)
}
