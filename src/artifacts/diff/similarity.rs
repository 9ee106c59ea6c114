//! Longest-common-subsequence table over two line sequences
//!
//! `table[i][j]` holds the LCS length of `original[0..i)` and
//! `modified[0..j)`. The table is stored row-major in a flat vector with
//! `u32` cells; building it costs O(m·n) time and memory, which is the hard
//! resource ceiling of the whole engine.
//!
//! Backtracking from `(m, n)` yields a minimal edit script, which is the
//! default way hunks get classified.

use crate::artifacts::diff::edit::{Edit, EditScript};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityTable<'d> {
    original: &'d [&'d str],
    modified: &'d [&'d str],
    width: usize,
    cells: Vec<u32>,
}

impl<'d> SimilarityTable<'d> {
    pub fn build(original: &'d [&'d str], modified: &'d [&'d str]) -> Self {
        let (m, n) = (original.len(), modified.len());
        let width = n + 1;
        let mut cells = vec![0u32; (m + 1) * width];

        for i in 1..=m {
            for j in 1..=n {
                cells[i * width + j] = if original[i - 1] == modified[j - 1] {
                    cells[(i - 1) * width + (j - 1)] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + (j - 1)])
                };
            }
        }

        Self {
            original,
            modified,
            width,
            cells,
        }
    }

    /// LCS length of `original[0..i)` and `modified[0..j)`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j] as usize
    }

    pub fn lcs_len(&self) -> usize {
        self.get(self.original.len(), self.modified.len())
    }
}

impl<'d> EditScript<'d> for SimilarityTable<'d> {
    /// Walks the table back from the bottom-right corner.
    ///
    /// Walking backwards, an insertion wins a tie, so in forward order a
    /// replaced line reads as the deletion followed by the insertion.
    fn edit_script(&self) -> Vec<Edit<'d>> {
        let (mut i, mut j) = (self.original.len(), self.modified.len());
        let mut edits = Vec::with_capacity(i + j);

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && self.original[i - 1] == self.modified[j - 1] {
                i -= 1;
                j -= 1;
                edits.push(Edit::Equal {
                    a_line: i,
                    b_line: j,
                    value: self.original[i],
                });
            } else if j > 0 && (i == 0 || self.get(i, j - 1) >= self.get(i - 1, j)) {
                j -= 1;
                edits.push(Edit::Insert {
                    a_line: i,
                    b_line: j,
                    value: self.modified[j],
                });
            } else {
                i -= 1;
                edits.push(Edit::Delete {
                    a_line: i,
                    b_line: j,
                    value: self.original[i],
                });
            }
        }

        edits.reverse();
        edits
    }
}
