use std::fmt;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::SubtitleError;
use crate::text_utils::prepare_string;

// @module: SRT parsing and rendering

// @const: SRT timestamp regex
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2}),(\d{3}) --> (\d{2}):(\d{2}):(\d{2}),(\d{3})$").unwrap()
});

// @const: Byte order mark some editors prepend to SRT files
const UTF8_BOM: char = '\u{feff}';

// @struct: Subtitle block header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleBlock {
    // @field: Sequence number, kept verbatim
    pub order: String,

    // @field: Time range line, kept verbatim
    pub timemark: String,

    // @field: Number of original lines owned by this block
    pub line_count: usize,
}

impl SubtitleBlock {
    pub fn new(order: impl Into<String>, timemark: impl Into<String>, line_count: usize) -> Self {
        SubtitleBlock {
            order: order.into(),
            timemark: timemark.into(),
            line_count,
        }
    }

    /// Whether the timemark has the canonical `hh:mm:ss,mmm --> hh:mm:ss,mmm` form
    pub fn has_valid_timemark(&self) -> bool {
        TIMESTAMP_REGEX.is_match(&self.timemark)
    }
}

impl fmt::Display for SubtitleBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} [{}] ({} lines)", self.order, self.timemark, self.line_count)
    }
}

/// Group the non-blank lines of an SRT document into blocks
fn group_blocks(content: &str) -> Vec<Vec<&str>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    groups
}

/// Parse an SRT document into its blocks and the flat list of text lines.
///
/// Every text line is normalized. A block with no text contributes a single
/// blank line so it can still be aligned.
pub fn parse_srt(content: &str) -> Result<(Vec<SubtitleBlock>, Vec<String>), SubtitleError> {
    let content = content.trim_start_matches(UTF8_BOM);
    let groups = group_blocks(content);
    if groups.is_empty() {
        return Err(SubtitleError::Empty);
    }

    let mut blocks = Vec::with_capacity(groups.len());
    let mut lines = Vec::new();

    for (index, group) in groups.iter().enumerate() {
        let (order, timemark, text) = match group.as_slice() {
            [order, timemark, text @ ..] => (order.trim(), timemark.trim(), text),
            _ => {
                return Err(SubtitleError::MalformedBlock {
                    block: index,
                    reason: "expected an order line and a timemark line".to_string(),
                });
            }
        };

        let block = SubtitleBlock::new(order, timemark, text.len().max(1));
        if !block.has_valid_timemark() {
            warn!("Block {} has an unexpected timemark: {}", order, timemark);
        }

        if text.is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(text.iter().map(|line| prepare_string(line)));
        }
        blocks.push(block);
    }

    debug!("Parsed {} subtitle blocks with {} lines", blocks.len(), lines.len());
    Ok((blocks, lines))
}

/// Render blocks and their lines back to SRT.
///
/// Missing lines are written as blank lines.
pub fn render_srt<S: AsRef<str>>(blocks: &[SubtitleBlock], lines: &[S]) -> String {
    let mut out = String::new();
    let mut cursor = 0;

    for block in blocks {
        out.push_str(&block.order);
        out.push('\n');
        out.push_str(&block.timemark);
        out.push('\n');
        for offset in 0..block.line_count {
            if let Some(line) = lines.get(cursor + offset) {
                out.push_str(line.as_ref());
            }
            out.push('\n');
        }
        out.push('\n');
        cursor += block.line_count;
    }

    out
}
