use std::io::{self, Write};

use ::crossterm::cursor::MoveTo;
use ::crossterm::queue;
use ::crossterm::style::Print;

use super::Terminal;

/// Terminal driver that queues crossterm commands to any writer.
///
/// Commands are buffered in the writer until [`Terminal::flush`]; wrap stdout in a
/// `BufWriter` to batch a whole frame into one syscall.
pub struct CrosstermTerminal<W: Write> {
    out: W,
    fixed_size: Option<(u16, u16)>,
}

impl<W: Write> CrosstermTerminal<W> {
    /// Width and height are queried from the controlling terminal on every call.
    pub fn new(out: W) -> Self {
        Self {
            out,
            fixed_size: None,
        }
    }

    /// Uses a fixed surface size instead of querying the tty, for writers that are not one.
    pub fn with_size(out: W, width: u16, height: u16) -> Self {
        Self {
            out,
            fixed_size: Some((width, height)),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// `None` when the tty cannot be queried.
    fn size(&self) -> Option<(u16, u16)> {
        if let Some(size) = self.fixed_size {
            return Some(size);
        }
        match ::crossterm::terminal::size() {
            Ok(size) => Some(size),
            Err(error) => {
                tracing::warn!(error = %error, "terminal size query failed");
                None
            }
        }
    }
}

impl<W: Write> Terminal for CrosstermTerminal<W> {
    fn write_cursor(&mut self, row: i32, col: i32, glyph: char) -> io::Result<()> {
        let (Ok(row), Ok(col)) = (u16::try_from(row), u16::try_from(col)) else {
            tracing::trace!(row, col, "glyph outside addressable range");
            return Ok(());
        };
        queue!(self.out, MoveTo(col, row), Print(glyph))
    }

    fn move_cursor(&mut self, row: i32, col: i32) -> io::Result<()> {
        let row = row.clamp(0, i32::from(u16::MAX)) as u16;
        let col = col.clamp(0, i32::from(u16::MAX)) as u16;
        queue!(self.out, MoveTo(col, row))
    }

    // An unknown size reports -1 so the displayability test clips every cell.
    fn width(&self) -> i32 {
        self.size().map_or(-1, |(width, _)| i32::from(width))
    }

    fn height(&self) -> i32 {
        self.size().map_or(-1, |(_, height)| i32::from(height))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/terminal/crossterm.rs"]
mod tests;
