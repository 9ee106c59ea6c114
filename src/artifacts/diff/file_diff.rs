use crate::artifacts::diff::edit::EditScript;
use crate::artifacts::diff::hunk::{CONTEXT_LINES, Hunk, group_hunks};
use crate::artifacts::diff::line_sequence::LineSequence;
use crate::artifacts::diff::lookahead::{LOOKAHEAD_WINDOW, LookaheadScan};
use crate::artifacts::diff::renderer::{RenderStyle, UnifiedRenderer};
use crate::artifacts::diff::similarity::SimilarityTable;
use clap::ValueEnum;
use derive_new::new;
use std::fmt::Display;
use std::io::Write;

/// How changed lines get told apart from kept ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DiffStrategy {
    /// Backtrace over the full LCS table; finds a minimal edit script.
    #[default]
    Alignment,
    /// Bounded local lookahead; cheaper, but blind to lines moved further
    /// than the lookahead window.
    Lookahead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    pub context_lines: usize,
    pub lookahead_window: usize,
    pub strategy: DiffStrategy,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context_lines: CONTEXT_LINES,
            lookahead_window: LOOKAHEAD_WINDOW,
            strategy: DiffStrategy::default(),
        }
    }
}

impl DiffOptions {
    pub fn with_context_lines(mut self, context_lines: usize) -> Self {
        self.context_lines = context_lines;
        self
    }

    pub fn with_lookahead_window(mut self, lookahead_window: usize) -> Self {
        self.lookahead_window = lookahead_window;
        self
    }

    pub fn with_strategy(mut self, strategy: DiffStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn diff(&self, original: &str, modified: &str, label: &str) -> FileDiff {
        if original == modified {
            log::debug!("{label}: buffers are identical");
            return FileDiff::new(label.to_string(), Vec::new());
        }

        let a = LineSequence::split(original);
        let b = LineSequence::split(modified);

        let edits = match self.strategy {
            DiffStrategy::Alignment => SimilarityTable::build(a.lines(), b.lines()).edit_script(),
            DiffStrategy::Lookahead => {
                LookaheadScan::new(a.lines(), b.lines(), self.lookahead_window).edit_script()
            }
        };
        let hunks = group_hunks(&edits, self.context_lines);

        log::debug!(
            "{label}: {} -> {} lines, {} hunk(s) via {:?}",
            a.lines().len(),
            b.lines().len(),
            hunks.len(),
            self.strategy
        );

        FileDiff::new(label.to_string(), hunks)
    }
}

/// Diffs two buffers with the default options.
pub fn diff_texts(original: &str, modified: &str, label: &str) -> FileDiff {
    DiffOptions::default().diff(original, modified, label)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
}

impl Display for DiffStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plural = |count: usize| if count == 1 { "" } else { "s" };
        write!(
            f,
            "{} insertion{}(+), {} deletion{}(-)",
            self.added,
            plural(self.added),
            self.removed,
            plural(self.removed)
        )
    }
}

/// Outcome of diffing one pair of buffers.
///
/// An empty hunk list means the buffers were identical.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileDiff {
    label: String,
    hunks: Vec<Hunk>,
}

impl FileDiff {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn hunks(&self) -> &[Hunk] {
        &self.hunks
    }

    pub fn is_unchanged(&self) -> bool {
        self.hunks.is_empty()
    }

    pub fn stats(&self) -> DiffStats {
        self.hunks.iter().fold(DiffStats::default(), |stats, hunk| {
            DiffStats::new(stats.added + hunk.added(), stats.removed + hunk.removed())
        })
    }

    pub fn renderer(&self) -> UnifiedRenderer<'_> {
        UnifiedRenderer::new(&self.label, &self.hunks)
    }

    pub fn to_unified_string(&self) -> String {
        self.renderer().to_unified_string()
    }

    pub fn render(&self, writer: &mut dyn Write, style: RenderStyle) -> anyhow::Result<()> {
        self.renderer().render(writer, style)
    }
}

impl Display for FileDiff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_unified_string())
    }
}
