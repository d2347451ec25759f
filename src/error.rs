use std::io;

pub type Result<T> = std::result::Result<T, ViewError>;

#[derive(Debug)]
pub enum ViewError {
    /// A border key that is neither overridden nor part of the default set.
    ConfigKeyNotFound(String),
    /// Frame corners where the far edge lies before the near edge.
    InvalidFrame { x0: i32, y0: i32, x1: i32, y1: i32 },
    Io(io::Error),
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewError::ConfigKeyNotFound(key) => write!(f, "Illegal border key '{}'", key),
            ViewError::InvalidFrame { x0, y0, x1, y1 } => write!(
                f,
                "Invalid frame ({}, {}) - ({}, {}): far corner precedes near corner",
                x0, y0, x1, y1
            ),
            ViewError::Io(e) => write!(f, "Terminal IO error: {}", e),
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ViewError {
    fn from(e: io::Error) -> Self {
        ViewError::Io(e)
    }
}

#[cfg(test)]
#[path = "../tests/unit/error.rs"]
mod tests;
