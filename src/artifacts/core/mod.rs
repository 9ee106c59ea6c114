//! Output plumbing shared by the commands

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter over a `minus` pager.
///
/// Rendered lines are pushed into the pager buffer as they arrive; nothing
/// is shown until the pager is handed to [`minus::page_all`].
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// diff.render(&mut writer, RenderStyle::Styled)?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
