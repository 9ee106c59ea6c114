use crate::artifacts::diff::file_diff::{DiffOptions, FileDiff};
use crate::artifacts::diff::renderer::RenderStyle;
use std::cell::{RefCell, RefMut};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewOptions {
    pub diff: DiffOptions,
    pub plain: bool,
    pub style: RenderStyle,
    pub stat: bool,
}

/// Dry-run previewer writing diffs onto a shared sink.
pub struct Preview {
    writer: RefCell<Box<dyn Write>>,
}

impl Preview {
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self {
            writer: RefCell::new(writer),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    /// Diffs one pair of buffers and writes the preview.
    pub fn show(
        &self,
        original: &str,
        modified: &str,
        label: &str,
        opts: &PreviewOptions,
    ) -> anyhow::Result<FileDiff> {
        let diff = opts.diff.diff(original, modified, label);
        self.show_diff(&diff, opts)?;

        Ok(diff)
    }

    pub fn show_diff(&self, diff: &FileDiff, opts: &PreviewOptions) -> anyhow::Result<()> {
        if opts.plain {
            // the plain string carries its own trailing newline unless it is the notice
            if diff.is_unchanged() {
                writeln!(self.writer(), "{}", diff.to_unified_string())?;
            } else {
                write!(self.writer(), "{}", diff.to_unified_string())?;
            }
        } else {
            diff.render(&mut **self.writer(), opts.style)?;
        }

        if opts.stat && !diff.is_unchanged() {
            writeln!(self.writer(), " {}", diff.stats())?;
        }

        self.writer().flush()?;

        Ok(())
    }
}
