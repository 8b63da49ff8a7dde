//! Helpers for handing segments to the import tooling.
//!
//! Segments are stored one per line in a plain text file with no header, and
//! pasted into in-game lists one at a time. Nothing here touches the screen
//! or the clipboard; these are the pure pieces around that process.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Join segments one per line.
pub fn to_lines<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(segment.as_ref());
    }
    out
}

/// Write segments one per line to `writer`.
pub fn write_segments<W: Write, S: AsRef<str>>(writer: &mut W, segments: &[S]) -> io::Result<()> {
    writer.write_all(to_lines(segments).as_bytes())?;
    writer.flush()
}

/// Read segments back from one-per-line text.
///
/// Surrounding whitespace is trimmed and blank lines are skipped.
/// [`Palette::new`](crate::palette::Palette::new) rejects whitespace and
/// control symbols, so trimming never changes a segment.
pub fn from_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Segments still to import after an interrupted session.
///
/// Returns the slice starting at the first segment that contains
/// `last_successful`, so that segment is imported again. An empty marker
/// returns everything; a marker found nowhere returns nothing.
pub fn resume_from<'a, S: AsRef<str>>(segments: &'a [S], last_successful: &str) -> &'a [S] {
    if last_successful.is_empty() {
        return segments;
    }

    match segments
        .iter()
        .position(|s| s.as_ref().contains(last_successful))
    {
        Some(index) => &segments[index..],
        None => {
            tracing::warn!("resume marker not found in any segment");
            &segments[segments.len()..]
        }
    }
}

/// In-game import method, which fixes how many segments fit in one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImportTarget {
    /// Variable importing, 50 segments per list.
    VariableImport,
    /// List Create importing, 64 segments per list.
    #[default]
    ListCreate,
}

impl ImportTarget {
    pub fn list_capacity(self) -> usize {
        match self {
            ImportTarget::VariableImport => 50,
            ImportTarget::ListCreate => 64,
        }
    }
}

/// How many in-game lists an import needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPlan {
    pub segments: usize,
    /// Completely filled lists.
    pub full_lists: usize,
    /// Segments in the last, partially filled list.
    pub remainder: usize,
}

impl ImportPlan {
    pub fn new(segments: usize, target: ImportTarget) -> Self {
        let capacity = target.list_capacity();
        Self {
            segments,
            full_lists: segments / capacity,
            remainder: segments % capacity,
        }
    }

    /// Lists needed including a partially filled one.
    pub fn total_lists(&self) -> usize {
        self.full_lists + usize::from(self.remainder > 0)
    }
}
