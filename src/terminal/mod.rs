//! Terminal surfaces views project onto.
//!
//! The core only talks to the [`Terminal`] trait; `crossterm.rs` is the real driver and
//! `test.rs` a headless recorder for tests.

use std::io;

/// Absolute-coordinate glyph sink. Rows and columns are zero-based.
pub trait Terminal {
    /// Writes one glyph at `(row, col)`. Callers clip before calling.
    fn write_cursor(&mut self, row: i32, col: i32, glyph: char) -> io::Result<()>;

    fn move_cursor(&mut self, row: i32, col: i32) -> io::Result<()>;

    /// Current width in columns, queried live.
    fn width(&self) -> i32;

    /// Current height in rows, queried live.
    fn height(&self) -> i32;

    /// Pushes anything the driver buffered to the real device.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "tui")]
pub mod crossterm;
#[cfg(feature = "tui")]
pub mod terminal_guard;
