//! Unified-diff rendering
//!
//! Two surfaces share the same logical lines:
//!
//! - a plain string (`--- label`, `+++ label`, `@@ -os,oc +ms,mc @@`, then
//!   lines prefixed with ` `, `-` or `+`), built in one go;
//! - a console rendering written line by line onto any [`Write`] sink, with
//!   optional styling through `colored`.
//!
//! Console output sanitizes terminal control characters first so line text
//! can never drive the terminal.

use crate::artifacts::diff::hunk::{Hunk, RenderedLine};
use colored::Colorize;
use derive_new::new;
use std::borrow::Cow;
use std::io::Write;

const CONTROL_PICTURES: u32 = 0x2400;
const DELETE_PICTURE: char = '\u{2421}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    #[default]
    Plain,
    Styled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    FileHeader,
    HunkHeader,
    Context,
    Removed,
    Added,
    Notice,
}

impl From<&RenderedLine> for Tone {
    fn from(line: &RenderedLine) -> Self {
        match line {
            RenderedLine::Context(_) => Tone::Context,
            RenderedLine::Removed(_) => Tone::Removed,
            RenderedLine::Added(_) => Tone::Added,
        }
    }
}

pub fn no_changes_message(label: &str) -> String {
    format!("No changes would be made to {label}")
}

#[derive(Debug, Clone, Copy, new)]
pub struct UnifiedRenderer<'r> {
    label: &'r str,
    hunks: &'r [Hunk],
}

impl<'r> UnifiedRenderer<'r> {
    pub fn to_unified_string(&self) -> String {
        if self.hunks.is_empty() {
            return no_changes_message(self.label);
        }

        let mut output = format!("--- {}\n+++ {}\n", self.label, self.label);
        for hunk in self.hunks {
            output.push_str(&hunk.to_string());
        }

        output
    }

    /// Writes the diff onto `writer`, one line at a time.
    ///
    /// A failed write aborts the whole render; the sink may hold a partial
    /// rendering afterwards.
    pub fn render(&self, writer: &mut dyn Write, style: RenderStyle) -> anyhow::Result<()> {
        let label = sanitize(self.label);

        if self.hunks.is_empty() {
            emit(writer, style, Tone::Notice, &no_changes_message(&label))?;
            return Ok(());
        }

        emit(writer, style, Tone::FileHeader, &format!("--- {label}"))?;
        emit(writer, style, Tone::FileHeader, &format!("+++ {label}"))?;

        for hunk in self.hunks {
            emit(writer, style, Tone::HunkHeader, &hunk.header())?;
            for line in hunk.lines() {
                let text = format!("{}{}", line.prefix(), sanitize(line.text()));
                emit(writer, style, Tone::from(line), &text)?;
            }
        }

        Ok(())
    }
}

fn emit(writer: &mut dyn Write, style: RenderStyle, tone: Tone, text: &str) -> anyhow::Result<()> {
    if style == RenderStyle::Plain || tone == Tone::Context {
        writeln!(writer, "{text}")?;
        return Ok(());
    }

    let styled = match tone {
        Tone::FileHeader => text.bold(),
        Tone::HunkHeader => text.cyan(),
        Tone::Removed => text.red(),
        Tone::Added => text.green(),
        Tone::Notice => text.yellow(),
        Tone::Context => text.normal(),
    };
    writeln!(writer, "{styled}")?;

    Ok(())
}

fn is_terminal_control(c: char) -> bool {
    c != '\t' && c.is_control()
}

fn control_picture(c: char) -> char {
    match c as u32 {
        code @ 0x00..=0x1f => char::from_u32(CONTROL_PICTURES + code).unwrap_or(char::REPLACEMENT_CHARACTER),
        0x7f => DELETE_PICTURE,
        _ => char::REPLACEMENT_CHARACTER,
    }
}

/// Replaces terminal control characters (tab excepted) with visible glyphs.
///
/// C0 controls map onto the Unicode control pictures block (ESC becomes
/// `␛`, CR becomes `␍`), DEL onto `␡`, and C1 controls onto U+FFFD.
/// Text without control characters is returned as is.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_terminal_control) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.chars()
            .map(|c| {
                if is_terminal_control(c) {
                    control_picture(c)
                } else {
                    c
                }
            })
            .collect(),
    )
}
