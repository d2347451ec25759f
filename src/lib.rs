//! cellframe - character-cell views for terminal screens
//!
//! Module layout:
//! - grid: frame geometry, glyph cells, the fixed-size cell buffer
//! - border: border glyph sets and per-slot overrides
//! - terminal: the `Terminal` surface trait, a crossterm driver and a headless recorder
//! - view: border/title compositing and clipped projection onto a terminal
//! - settings: JSON view settings

pub mod border;
pub mod error;
pub mod grid;
pub mod settings;
pub mod terminal;
pub mod view;

pub use border::{BorderConfig, BorderKey, BorderSet};
pub use error::{Result, ViewError};
pub use grid::{Cell, CellBuffer, Frame, Pos, WidthPolicy};
pub use settings::{load_settings, SettingsError, ViewSettings};
pub use terminal::Terminal;
pub use view::{OutputMode, View};
