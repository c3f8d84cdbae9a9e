//! Label overlap removal for chart and graph labels.
//!
//! Two layers:
//! - `geom2`: pure 2D primitives (vector rescaling, rectangle overlap, segment intersection).
//! - `anneal`: simulated-annealing optimizer that moves labels off each other while
//!   keeping them near their anchors.
//!
//! API Policy
//! - Callers own the label slice; `anneal::Annealer::run` borrows it exclusively,
//!   moves `x`/`y` in place and returns it. Nothing else is mutated.
//! - Randomness is always injected (`rand::Rng`); seed a `StdRng` for reproducible layouts.

pub mod anneal;
pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::anneal::{
        leader_lines_cross, overlapping_indices, remove_overlaps, total_overlap, AnchorMetric,
        AnnealCfg, Annealer, Label,
    };
    pub use crate::geom2::{distance, intersect, overlap_area, scale_to_length, Area, Rect};
    pub use nalgebra::Vector2 as Vec2;
}
