use crate::error::{Result, ViewError};

/// A cell position relative to a view's top-left frame corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Outer rectangle of a view in terminal-absolute coordinates. Both corners are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

impl Frame {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Result<Self> {
        let invalid = ViewError::InvalidFrame { x0, y0, x1, y1 };
        if x1 < x0 || y1 < y0 {
            return Err(invalid);
        }
        // Width, height and the parking column must all be representable.
        let extent = |near: i32, far: i32| far.checked_sub(near)?.checked_add(1);
        if extent(x0, x1).is_none() || extent(y0, y1).is_none() || x1.checked_add(1).is_none() {
            return Err(invalid);
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    /// Builds a frame from its top-left corner and outer dimensions.
    pub fn with_size(x: i32, y: i32, width: i32, height: i32) -> Result<Self> {
        let far = |near: i32, len: i32| near.checked_add(len)?.checked_sub(1);
        match (far(x, width), far(y, height)) {
            (Some(x1), Some(y1)) => Self::new(x, y, x1, y1),
            _ => Err(ViewError::InvalidFrame {
                x0: x,
                y0: y,
                x1: x.saturating_add(width).saturating_sub(1),
                y1: y.saturating_add(height).saturating_sub(1),
            }),
        }
    }

    pub fn x0(&self) -> i32 {
        self.x0
    }

    pub fn y0(&self) -> i32 {
        self.y0
    }

    pub fn x1(&self) -> i32 {
        self.x1
    }

    pub fn y1(&self) -> i32 {
        self.y1
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    /// Interior width inside the one-cell border. Negative or zero for minimal frames.
    pub fn content_width(&self) -> i32 {
        self.width() - 2
    }

    pub fn content_height(&self) -> i32 {
        self.height() - 2
    }

    /// Translates a frame-relative position to `(row, col)` on the terminal.
    pub fn to_absolute(&self, pos: Pos) -> (i32, i32) {
        (self.y0 + pos.row, self.x0 + pos.col)
    }

    /// Where the cursor is parked once a view finished rendering: one column past the
    /// bottom-right corner.
    pub fn park_position(&self) -> (i32, i32) {
        (self.y1, self.x1 + 1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/geom.rs"]
mod tests;
