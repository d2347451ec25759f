//! Bordered character-cell view.
//!
//! A [`View`] owns a cell buffer covering its whole frame, border ring included. Drawing
//! composites the border and title into that buffer and projects it onto a [`Terminal`],
//! clipping every cell that falls outside the terminal.

use serde::{Deserialize, Serialize};

use crate::border::{BorderConfig, BorderKey, BorderSet};
use crate::error::Result;
use crate::grid::{decompose, Cell, CellBuffer, Frame, Pos, WidthPolicy};
use crate::terminal::Terminal;

/// When buffer writes reach the terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Writes stay in the buffer until the whole frame is flushed at the end of `draw`.
    #[default]
    Deferred,
    /// Every write is forwarded to the terminal as it happens.
    Instant,
}

#[derive(Clone, Debug)]
pub struct View {
    frame: Frame,
    buffer: CellBuffer,
    borders: BorderConfig,
    title: Option<String>,
    output: OutputMode,
    width_policy: WidthPolicy,
}

impl View {
    /// A view covering columns `x0..=x1` and rows `y0..=y1`.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Result<Self> {
        Ok(Self::from_frame(Frame::new(x0, y0, x1, y1)?))
    }

    /// A view whose top-left corner is `(x, y)` with the given outer size.
    pub fn with_size(x: i32, y: i32, width: i32, height: i32) -> Result<Self> {
        Ok(Self::from_frame(Frame::with_size(x, y, width, height)?))
    }

    pub fn from_frame(frame: Frame) -> Self {
        Self {
            frame,
            buffer: CellBuffer::new(frame.width(), frame.height()),
            borders: BorderConfig::new(),
            title: None,
            output: OutputMode::default(),
            width_policy: WidthPolicy::default(),
        }
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// `(frame_width, frame_height)`.
    pub fn frame_size(&self) -> (i32, i32) {
        (self.frame_width(), self.frame_height())
    }

    pub fn frame_width(&self) -> i32 {
        self.frame.width()
    }

    pub fn frame_height(&self) -> i32 {
        self.frame.height()
    }

    /// `(content_height, content_width)`: the interior inside the border.
    pub fn size(&self) -> (i32, i32) {
        (self.content_height(), self.content_width())
    }

    pub fn content_width(&self) -> i32 {
        self.frame.content_width()
    }

    pub fn content_height(&self) -> i32 {
        self.frame.content_height()
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) -> &mut Self {
        self.output = mode;
        self
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output
    }

    pub fn set_width_policy(&mut self, policy: WidthPolicy) -> &mut Self {
        self.width_policy = policy;
        self
    }

    pub fn width_policy(&self) -> WidthPolicy {
        self.width_policy
    }

    pub fn replace_all_borders(&mut self, set: BorderSet) -> &mut Self {
        self.borders.replace_all(set);
        self
    }

    pub fn override_border_glyph(&mut self, key: BorderKey, glyph: char) -> &mut Self {
        self.borders.override_glyph(key, glyph);
        self
    }

    pub fn use_ascii_border(&mut self) -> &mut Self {
        self.replace_all_borders(BorderSet::ASCII)
    }

    pub fn use_default_border(&mut self) -> &mut Self {
        self.replace_all_borders(BorderSet::DEFAULT)
    }

    /// Border glyph for a key given by name (`top_left`) or index (`2`).
    pub fn get_border(&self, key: &str) -> Result<char> {
        self.borders.lookup(key)
    }

    pub fn border(&self, key: BorderKey) -> char {
        self.borders.glyph(key)
    }

    pub fn borders(&self) -> &BorderConfig {
        &self.borders
    }

    pub fn buffer(&self) -> &CellBuffer {
        &self.buffer
    }

    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        self.buffer.cell(Pos::new(row, col)).copied()
    }

    /// Writes `text` into the buffer starting at frame-relative `(row, col)`. Glyphs past the
    /// buffer edge are dropped. In instant mode the changed cells go straight to `term`.
    pub fn write<T>(&mut self, term: &mut T, row: i32, col: i32, text: &str) -> Result<()>
    where
        T: Terminal + ?Sized,
    {
        let touched = self
            .buffer
            .put_run(Pos::new(row, col), decompose(text, self.width_policy));
        if self.output == OutputMode::Instant {
            for pos in touched {
                if let Some(cell) = self.buffer.cell(pos) {
                    self.project(term, pos, cell)?;
                }
            }
        }
        Ok(())
    }

    /// Clears the frame, composites border and title, pushes the result to `term` and parks
    /// the cursor one column past the bottom-right corner.
    pub fn draw<T>(&mut self, term: &mut T) -> Result<()>
    where
        T: Terminal + ?Sized,
    {
        self.clear_frame(term)?;
        self.draw_edges(term)?;
        self.draw_corners(term)?;

        if let Some(title) = self
            .title
            .as_deref()
            .filter(|title| !title.is_empty())
            .map(|title| format!(" {} ", title))
        {
            self.write(term, 0, 2, &title)?;
        }

        if self.output == OutputMode::Deferred {
            self.flush(term)?;
        }

        let (row, col) = self.frame.park_position();
        term.move_cursor(row, col)?;
        term.flush()?;
        Ok(())
    }

    /// Projects every glyph cell onto `term`, skipping continuation cells and cells outside
    /// the terminal. Returns how many glyphs were written.
    pub fn flush<T>(&self, term: &mut T) -> Result<usize>
    where
        T: Terminal + ?Sized,
    {
        let mut emitted = 0;
        for (pos, cell) in self.buffer.iter() {
            if self.project(term, pos, cell)? {
                emitted += 1;
            }
        }
        tracing::debug!(
            x0 = self.frame.x0(),
            y0 = self.frame.y0(),
            emitted,
            total = self.buffer.width() * self.buffer.height(),
            "view flushed"
        );
        Ok(emitted)
    }

    fn clear_frame<T>(&mut self, term: &mut T) -> Result<()>
    where
        T: Terminal + ?Sized,
    {
        self.buffer.fill(Cell::BLANK);
        if self.output == OutputMode::Instant {
            for (pos, cell) in self.buffer.iter() {
                self.project(term, pos, cell)?;
            }
        }
        Ok(())
    }

    fn draw_edges<T>(&mut self, term: &mut T) -> Result<()>
    where
        T: Terminal + ?Sized,
    {
        let (size_y, size_x) = self.size();
        let horizontal = self.border(BorderKey::Horizontal);
        let vertical = self.border(BorderKey::Vertical);

        for x in 1..=size_x {
            self.write_glyph(term, 0, x, horizontal)?;
            self.write_glyph(term, size_y + 1, x, horizontal)?;
        }
        for y in 1..=size_y {
            self.write_glyph(term, y, 0, vertical)?;
            self.write_glyph(term, y, size_x + 1, vertical)?;
        }
        Ok(())
    }

    fn draw_corners<T>(&mut self, term: &mut T) -> Result<()>
    where
        T: Terminal + ?Sized,
    {
        let (size_y, size_x) = self.size();
        let corners = [
            (0, 0, BorderKey::TopLeft),
            (0, size_x + 1, BorderKey::TopRight),
            (size_y + 1, size_x + 1, BorderKey::BottomRight),
            (size_y + 1, 0, BorderKey::BottomLeft),
        ];
        for (row, col, key) in corners {
            let glyph = self.border(key);
            self.write_glyph(term, row, col, glyph)?;
        }
        Ok(())
    }

    fn write_glyph<T>(&mut self, term: &mut T, row: i32, col: i32, glyph: char) -> Result<()>
    where
        T: Terminal + ?Sized,
    {
        let mut utf8 = [0u8; 4];
        self.write(term, row, col, glyph.encode_utf8(&mut utf8))
    }

    fn project<T>(&self, term: &mut T, pos: Pos, cell: &Cell) -> Result<bool>
    where
        T: Terminal + ?Sized,
    {
        let Some(glyph) = cell.glyph() else {
            return Ok(false);
        };
        if !self.is_displayable(term, pos) {
            tracing::trace!(row = pos.row, col = pos.col, "cell clipped");
            return Ok(false);
        }
        let (row, col) = self.frame.to_absolute(pos);
        term.write_cursor(row, col, glyph)?;
        Ok(true)
    }

    /// Whether `pos` lands on the terminal. Bounds are inclusive of the reported size.
    fn is_displayable<T>(&self, term: &T, pos: Pos) -> bool
    where
        T: Terminal + ?Sized,
    {
        let (row, col) = self.frame.to_absolute(pos);
        (0..=term.height()).contains(&row) && (0..=term.width()).contains(&col)
    }
}

#[cfg(test)]
#[path = "../tests/unit/view.rs"]
mod tests;
