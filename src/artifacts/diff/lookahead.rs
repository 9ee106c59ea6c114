//! Bounded local lookahead classification
//!
//! A cheaper alternative to the table backtrace: walking both sequences in
//! lockstep, a differing original line is deleted unless it shows up again
//! within the next [`LOOKAHEAD_WINDOW`] modified lines, and a differing
//! modified line is inserted unless it shows up within the next
//! [`LOOKAHEAD_WINDOW`] original lines.
//!
//! Lines that move further than the window are reported as an unrelated
//! deletion and insertion, never as a move.

use crate::artifacts::diff::edit::{Edit, EditScript};
use derive_new::new;

/// How many lines ahead a differing line is searched for on the other side.
pub const LOOKAHEAD_WINDOW: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LookaheadScan<'d> {
    original: &'d [&'d str],
    modified: &'d [&'d str],
    window: usize,
}

impl<'d> LookaheadScan<'d> {
    /// Whether `original[i]` shows up within the `window` modified lines after `j`.
    fn reappears_in_modified(&self, i: usize, j: usize) -> bool {
        let line = self.original[i];
        self.modified
            .iter()
            .skip(j + 1)
            .take(self.window)
            .any(|candidate| *candidate == line)
    }

    /// Whether `modified[j]` shows up within the `window` original lines after `i`.
    fn reappears_in_original(&self, i: usize, j: usize) -> bool {
        let line = self.modified[j];
        self.original
            .iter()
            .skip(i + 1)
            .take(self.window)
            .any(|candidate| *candidate == line)
    }

    fn differs_at(&self, i: usize, j: usize) -> bool {
        i < self.original.len() && j < self.modified.len() && self.original[i] != self.modified[j]
    }

    fn delete(&self, i: usize, j: usize) -> Edit<'d> {
        Edit::Delete {
            a_line: i,
            b_line: j,
            value: self.original[i],
        }
    }

    fn insert(&self, i: usize, j: usize) -> Edit<'d> {
        Edit::Insert {
            a_line: i,
            b_line: j,
            value: self.modified[j],
        }
    }
}

impl<'d> EditScript<'d> for LookaheadScan<'d> {
    fn edit_script(&self) -> Vec<Edit<'d>> {
        let (m, n) = (self.original.len(), self.modified.len());
        let (mut i, mut j) = (0, 0);
        let mut edits = Vec::with_capacity(m.max(n));

        loop {
            while i < m && j < n && self.original[i] == self.modified[j] {
                edits.push(Edit::Equal {
                    a_line: i,
                    b_line: j,
                    value: self.original[i],
                });
                i += 1;
                j += 1;
            }

            if i == m {
                edits.extend((j..n).map(|j| self.insert(i, j)));
                break;
            }
            if j == n {
                edits.extend((i..m).map(|i| self.delete(i, j)));
                break;
            }

            let mut progressed = false;

            while self.differs_at(i, j) && !self.reappears_in_modified(i, j) {
                edits.push(self.delete(i, j));
                i += 1;
                progressed = true;
            }

            while self.differs_at(i, j) && !self.reappears_in_original(i, j) {
                edits.push(self.insert(i, j));
                j += 1;
                progressed = true;
            }

            // Both lines reappear within the window on the other side (a
            // crossed reordering), so neither loop can move; give up on the
            // original line to keep the scan advancing.
            if !progressed {
                edits.push(self.delete(i, j));
                i += 1;
            }
        }

        edits
    }
}
