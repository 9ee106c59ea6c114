use std::fmt::Display;

/// One step of an edit script turning the original lines into the modified ones.
///
/// Every variant records both cursors at the moment the step applies:
/// `a_line` indexes the original sequence and `b_line` the modified one
/// (0-based). For a `Delete` the `b_line` is the modified line the deletion
/// sits in front of, and symmetrically for an `Insert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit<'d> {
    Equal {
        a_line: usize,
        b_line: usize,
        value: &'d str,
    },
    Delete {
        a_line: usize,
        b_line: usize,
        value: &'d str,
    },
    Insert {
        a_line: usize,
        b_line: usize,
        value: &'d str,
    },
}

impl<'d> Edit<'d> {
    pub fn a_line(&self) -> usize {
        match self {
            Edit::Equal { a_line, .. } | Edit::Delete { a_line, .. } | Edit::Insert { a_line, .. } => {
                *a_line
            }
        }
    }

    pub fn b_line(&self) -> usize {
        match self {
            Edit::Equal { b_line, .. } | Edit::Delete { b_line, .. } | Edit::Insert { b_line, .. } => {
                *b_line
            }
        }
    }

    pub fn value(&self) -> &'d str {
        match self {
            Edit::Equal { value, .. } | Edit::Delete { value, .. } | Edit::Insert { value, .. } => {
                value
            }
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, Edit::Equal { .. })
    }

    pub fn as_string(&self) -> String {
        match self {
            Edit::Delete { value, .. } => format!("-{value}"),
            Edit::Insert { value, .. } => format!("+{value}"),
            Edit::Equal { value, .. } => format!(" {value}"),
        }
    }
}

impl Display for Edit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

/// Producer of an edit script over two line slices.
pub trait EditScript<'d> {
    fn edit_script(&self) -> Vec<Edit<'d>>;

    fn format_script(&self) -> String {
        self.edit_script()
            .iter()
            .map(Edit::as_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
