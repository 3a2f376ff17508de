use crate::classify::LineClassifier;

/// Backtick fence used to open and close code blocks.
pub const FENCE: &str = "```";

/// A contiguous run of source lines converted into renderable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Prose with the marker and one delimiter removed from every line.
    Documentation(String),
    /// Source lines exactly as written.
    Code(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Documentation(text) | Segment::Code(text) => text,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Segment::Code(_))
    }

    /// Renders this segment as Markdown. Code is fenced and tagged with
    /// `code_language_tag`; documentation is emitted unchanged.
    pub fn render(&self, code_language_tag: &str) -> String {
        match self {
            Segment::Documentation(text) => text.clone(),
            Segment::Code(text) => {
                let open = format!("{FENCE}{code_language_tag}");
                [open.as_str(), text.as_str(), FENCE].join("\n")
            }
        }
    }
}

/// Converts grouped lines into segments.
///
/// The kind of each group is taken from its first line. Empty groups are
/// skipped.
pub fn to_segments<S: AsRef<str>>(
    groups: &[Vec<S>],
    classifier: &LineClassifier,
) -> Vec<Segment> {
    groups
        .iter()
        .filter_map(|group| {
            let lines: Vec<&str> = group.iter().map(|line| line.as_ref()).collect();
            let first = lines.first()?;
            if classifier.is_documentation(first) {
                let width = classifier.strip_width();
                let text = lines
                    .iter()
                    .map(|line| strip_prefix_chars(line, width))
                    .collect::<Vec<_>>()
                    .join("\n");
                Some(Segment::Documentation(text))
            } else {
                Some(Segment::Code(lines.join("\n")))
            }
        })
        .collect()
}

/// Drops the first `count` characters of `line`, or all of it when shorter.
pub fn strip_prefix_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}
