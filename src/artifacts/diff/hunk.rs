use crate::artifacts::diff::edit::Edit;
use std::fmt::Display;

/// Unchanged lines kept around each change, as in `diff -U3`.
pub const CONTEXT_LINES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedLine {
    Context(String),
    Removed(String),
    Added(String),
}

impl RenderedLine {
    pub fn text(&self) -> &str {
        match self {
            RenderedLine::Context(text) | RenderedLine::Removed(text) | RenderedLine::Added(text) => {
                text
            }
        }
    }

    pub fn prefix(&self) -> char {
        match self {
            RenderedLine::Context(_) => ' ',
            RenderedLine::Removed(_) => '-',
            RenderedLine::Added(_) => '+',
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, RenderedLine::Context(_))
    }

    /// Whether the line belongs to the original side of the hunk.
    pub fn in_original(&self) -> bool {
        !matches!(self, RenderedLine::Added(_))
    }

    /// Whether the line belongs to the modified side of the hunk.
    pub fn in_modified(&self) -> bool {
        !matches!(self, RenderedLine::Removed(_))
    }
}

impl From<&Edit<'_>> for RenderedLine {
    fn from(edit: &Edit<'_>) -> Self {
        match edit {
            Edit::Equal { value, .. } => RenderedLine::Context(value.to_string()),
            Edit::Delete { value, .. } => RenderedLine::Removed(value.to_string()),
            Edit::Insert { value, .. } => RenderedLine::Added(value.to_string()),
        }
    }
}

impl Display for RenderedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.prefix(), self.text())
    }
}

/// A contiguous block of changes with its surrounding context.
///
/// Starts are 1-based. When a side contributes no lines its start is the
/// number of the line preceding the hunk on that side (0 at the top of the
/// file), following the unified-diff convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    original_start: usize,
    original_count: usize,
    modified_start: usize,
    modified_count: usize,
    lines: Vec<RenderedLine>,
}

impl Hunk {
    /// Builds a hunk over a slice of the edit script.
    ///
    /// Counts come from the lines actually placed in the hunk. Returns `None`
    /// for an empty slice or one without any change.
    pub fn from_edits(edits: &[Edit<'_>]) -> Option<Self> {
        let first = edits.first()?;
        if !edits.iter().any(Edit::is_change) {
            return None;
        }

        let lines = edits.iter().map(RenderedLine::from).collect::<Vec<_>>();
        let original_count = lines.iter().filter(|line| line.in_original()).count();
        let modified_count = lines.iter().filter(|line| line.in_modified()).count();

        Some(Self {
            original_start: start_line(first.a_line(), original_count),
            original_count,
            modified_start: start_line(first.b_line(), modified_count),
            modified_count,
            lines,
        })
    }

    pub fn original_start(&self) -> usize {
        self.original_start
    }

    pub fn original_count(&self) -> usize {
        self.original_count
    }

    pub fn modified_start(&self) -> usize {
        self.modified_start
    }

    pub fn modified_count(&self) -> usize {
        self.modified_count
    }

    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.original_start, self.original_count, self.modified_start, self.modified_count
        )
    }

    pub fn added(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, RenderedLine::Added(_)))
            .count()
    }

    pub fn removed(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, RenderedLine::Removed(_)))
            .count()
    }
}

impl Display for Hunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.header())?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}

fn start_line(cursor: usize, count: usize) -> usize {
    if count == 0 { cursor } else { cursor + 1 }
}

/// Groups an edit script into hunks.
///
/// Scanning skips equal lines until a change shows up, then the hunk takes
/// up to `context` preceding lines. Runs of changes separated by at most
/// `2 * context` equal lines share a hunk; otherwise the hunk is closed after
/// `context` trailing lines and scanning resumes.
pub fn group_hunks(edits: &[Edit<'_>], context: usize) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    let mut offset = 0;

    while offset < edits.len() {
        let Some(first_change) = edits[offset..]
            .iter()
            .position(Edit::is_change)
            .map(|position| offset + position)
        else {
            break;
        };

        let start = first_change.saturating_sub(context).max(offset);
        let mut end = first_change;

        loop {
            while end < edits.len() && edits[end].is_change() {
                end += 1;
            }

            let gap = edits[end..]
                .iter()
                .take_while(|edit| !edit.is_change())
                .count();

            if end + gap < edits.len() && gap <= 2 * context {
                end += gap;
                continue;
            }

            end += gap.min(context);
            break;
        }

        log::trace!("hunk over edits {start}..{end}");
        hunks.extend(Hunk::from_edits(&edits[start..end]));
        offset = end;
    }

    hunks
}
