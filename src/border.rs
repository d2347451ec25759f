//! Border glyph configuration.

use crate::error::{Result, ViewError};

/// One of the six border glyph slots. The discriminant is the slot's numeric key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BorderKey {
    Horizontal = 0,
    Vertical = 1,
    TopLeft = 2,
    TopRight = 3,
    BottomLeft = 4,
    BottomRight = 5,
}

impl BorderKey {
    pub const ALL: [BorderKey; 6] = [
        BorderKey::Horizontal,
        BorderKey::Vertical,
        BorderKey::TopLeft,
        BorderKey::TopRight,
        BorderKey::BottomLeft,
        BorderKey::BottomRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BorderKey::Horizontal => "horizontal",
            BorderKey::Vertical => "vertical",
            BorderKey::TopLeft => "top_left",
            BorderKey::TopRight => "top_right",
            BorderKey::BottomLeft => "bottom_left",
            BorderKey::BottomRight => "bottom_right",
        }
    }

    /// Accepts the slot name (`top_left`, `top-left`) or its index (`2`).
    pub fn parse(key: &str) -> Option<BorderKey> {
        let key = key.trim();
        if let Ok(index) = key.parse::<usize>() {
            return BorderKey::ALL.get(index).copied();
        }
        let normalized = key.to_ascii_lowercase().replace('-', "_");
        BorderKey::ALL
            .into_iter()
            .find(|slot| slot.name() == normalized)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Six border glyphs: horizontal, vertical, top-left, top-right, bottom-left, bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderSet([char; 6]);

impl BorderSet {
    pub const DEFAULT: BorderSet = BorderSet(['─', '│', '┌', '┐', '└', '┘']);
    pub const ASCII: BorderSet = BorderSet(['-', '|', '+', '+', '+', '+']);

    pub const fn new(
        horizontal: char,
        vertical: char,
        top_left: char,
        top_right: char,
        bottom_left: char,
        bottom_right: char,
    ) -> Self {
        Self([
            horizontal,
            vertical,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        ])
    }

    pub fn get(&self, key: BorderKey) -> char {
        self.0[key.index()]
    }
}

impl Default for BorderSet {
    fn default() -> Self {
        BorderSet::DEFAULT
    }
}

impl From<[char; 6]> for BorderSet {
    fn from(glyphs: [char; 6]) -> Self {
        BorderSet(glyphs)
    }
}

/// Active border overrides layered over [`BorderSet::DEFAULT`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BorderConfig {
    overrides: [Option<char>; 6],
}

impl BorderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, set: BorderSet) {
        for key in BorderKey::ALL {
            self.overrides[key.index()] = Some(set.get(key));
        }
    }

    pub fn override_glyph(&mut self, key: BorderKey, glyph: char) {
        self.overrides[key.index()] = Some(glyph);
    }

    /// Glyph for a known slot: the override if present, else the default.
    pub fn glyph(&self, key: BorderKey) -> char {
        self.overrides[key.index()].unwrap_or_else(|| BorderSet::DEFAULT.get(key))
    }

    /// Resolves a key given by name or index.
    pub fn lookup(&self, key: &str) -> Result<char> {
        BorderKey::parse(key)
            .map(|slot| self.glyph(slot))
            .ok_or_else(|| ViewError::ConfigKeyNotFound(key.to_string()))
    }

    /// The fully resolved set as it will be drawn.
    pub fn resolved(&self) -> BorderSet {
        BorderSet(BorderKey::ALL.map(|key| self.glyph(key)))
    }
}

#[cfg(test)]
#[path = "../tests/unit/border.rs"]
mod tests;
