/// Lines of a buffer, split on `\n` only.
///
/// No trailing-newline normalization happens: `"a\n"` yields `["a", ""]`
/// and the empty buffer yields `[""]`. Both sides of a diff go through the
/// same split, so a trailing empty element lines up on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSequence<'d> {
    lines: Vec<&'d str>,
}

impl<'d> LineSequence<'d> {
    pub fn split(text: &'d str) -> Self {
        Self {
            lines: text.split('\n').collect(),
        }
    }

    pub fn lines(&self) -> &[&'d str] {
        &self.lines
    }
}
