//! Cell grid primitives: frame geometry, glyph cells and the fixed-size buffer.

pub mod buffer;
pub mod geom;
pub mod glyph;

pub use buffer::CellBuffer;
pub use geom::{Frame, Pos};
pub use glyph::{decompose, Cell, WidthPolicy};
