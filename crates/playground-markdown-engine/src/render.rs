use crate::classify::{DEFAULT_MARKER, LineClassifier};
use crate::group::group_runs;
use crate::segment::{Segment, to_segments};

/// Language tag placed on opening fences by default.
pub const DEFAULT_CODE_LANGUAGE_TAG: &str = "swift";

/// Separator placed between rendered segments.
pub const SEGMENT_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub marker: String,
    pub code_language_tag: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            code_language_tag: DEFAULT_CODE_LANGUAGE_TAG.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn classifier(&self) -> LineClassifier {
        LineClassifier::new(self.marker.as_str())
    }
}

/// Splits playground source into documentation and code segments.
pub fn parse_segments(input: &str, options: &RenderOptions) -> Vec<Segment> {
    let classifier = options.classifier();
    let groups = group_runs(input.lines(), |line| classifier.is_documentation(line));
    to_segments(&groups, &classifier)
}

/// Renders each segment and joins them with a blank line.
pub fn render_segments(segments: &[Segment], code_language_tag: &str) -> String {
    segments
        .iter()
        .map(|segment| segment.render(code_language_tag))
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

/// Converts playground source text into a Markdown document.
pub fn render_markdown(input: &str, options: &RenderOptions) -> String {
    let segments = parse_segments(input, options);
    log::debug!(
        "rendering {} segments ({} code)",
        segments.len(),
        segments.iter().filter(|s| s.is_code()).count()
    );
    render_segments(&segments, &options.code_language_tag)
}
