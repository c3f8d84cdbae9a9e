//! Basic 2D shapes used by the label optimizer.
//!
//! - `Rect`: axis-aligned box `{x, y, width, height}` with `(x, y)` as origin corner.
//! - `Area`: inclusive bounds `{x1, y1, x2, y2}` a label position may not leave.
//! - `GeometryError`: caller-contract violations of the geometry helpers.

use std::fmt;

/// Axis-aligned rectangle. Sizes are not validated; callers pass non-negative ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Inclusive bounding box for label positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Area {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Area {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
    #[inline]
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.x1 && x <= self.x2
    }
    #[inline]
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.y1 && y <= self.y2
    }
}

/// Errors surfaced by the geometry helpers.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// An argument outside the function's domain (e.g. a negative length).
    InvalidArgument { reason: String },
}

impl GeometryError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for GeometryError {}
