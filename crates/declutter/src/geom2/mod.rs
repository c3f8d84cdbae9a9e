//! 2D geometry primitives for label layout.
//!
//! Purpose
//! - Pure, total helpers on vectors, axis-aligned rectangles and segments.
//! - The only fallible operation is `scale_to_length` (negative target length).
//!
//! Conventions
//! - Points and vectors are `nalgebra::Vector2<f64>`.
//! - `Rect` origin is `(x, y)`; horizontal extent uses `width`, vertical uses `height`.
//! - Segments are passed as endpoint pairs; no segment type is stored.

mod types;
mod util;

pub use types::{Area, GeometryError, Rect};
pub use util::{distance, intersect, on_segment, orientation, overlap_area, scale_to_length};
