use lg_syntax::{Location, Position, RawComment, RawCommentKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommentKind {
    /// `--[[ ... ]]`, regardless of layout.
    Block,
    /// Only whitespace precedes the `--` on its line.
    LineExclusive,
    /// Code precedes the `--` on its line.
    LineTrailing,
}

/// A well-formed comment with its source text, markers included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceComment {
    pub kind: CommentKind,
    pub location: Location,
    pub text: String,
}

impl SourceComment {
    /// The comment body without its markers and one leading space.
    pub fn body(&self) -> &str {
        let text = match self.kind {
            CommentKind::Block => {
                strip_long_brackets(self.text.strip_prefix("--").unwrap_or(&self.text))
            }
            // `---` doc-style markers count as one marker.
            CommentKind::LineExclusive | CommentKind::LineTrailing => {
                self.text.trim_start_matches('-')
            }
        };

        text.strip_prefix(' ').unwrap_or(text)
    }
}

fn strip_long_brackets(text: &str) -> &str {
    let Some(rest) = text.strip_prefix('[') else {
        return text;
    };
    let level = rest.bytes().take_while(|&b| b == b'=').count();
    let Some(rest) = rest[level..].strip_prefix('[') else {
        return text;
    };
    let close = format!("]{}]", "=".repeat(level));
    rest.strip_suffix(close.as_str()).unwrap_or(rest)
}

/// Byte offset of the start of every line; line 0 starts at 0.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { starts }
    }

    fn line_start(&self, line: u32) -> Option<usize> {
        self.starts.get(line as usize).copied()
    }

    fn offset(&self, position: Position) -> Option<usize> {
        self.line_start(position.line)
            .map(|start| start + position.column as usize)
    }
}

/// Classify a line comment by scanning its line from the start.
fn classify_line(line: &[u8]) -> CommentKind {
    for (i, &b) in line.iter().enumerate() {
        if b == b'-' && line.get(i + 1) == Some(&b'-') {
            return CommentKind::LineExclusive;
        }
        if !matches!(b, b'\t' | b' ' | 0x0b | 0x0c) {
            return CommentKind::LineTrailing;
        }
    }
    CommentKind::LineTrailing
}

/// Turn the parser's comment spans into classified, text-bearing records.
///
/// Broken comments and spans falling outside `source` are dropped.
pub fn extract_comments(source: &str, raw: &[RawComment]) -> Vec<SourceComment> {
    let lines = LineIndex::new(source);
    let bytes = source.as_bytes();

    raw.iter()
        .filter_map(|comment| {
            let location = comment.location;

            let kind = match comment.kind {
                RawCommentKind::Broken => return None,
                RawCommentKind::Block => CommentKind::Block,
                RawCommentKind::Line => {
                    let line_start = lines.line_start(location.begin.line)?;
                    classify_line(bytes.get(line_start..)?)
                }
            };

            let start = lines.offset(location.begin)?;
            let end = lines.offset(location.end)?;
            let text = source.get(start..end)?.to_string();

            Some(SourceComment {
                kind,
                location,
                text,
            })
        })
        .collect()
}
