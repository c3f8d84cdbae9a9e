//! Label overlap removal by simulated annealing.
//!
//! Purpose
//! - Move rectangular labels (pie-slice values, graph node names) away from each
//!   other while keeping them near their anchors and, optionally, keeping their
//!   connector lines from crossing.
//!
//! Model
//! - Energy = ordered-pair overlap × `overlap_weight`
//!   + ordered-pair connector crossings × `crossing_weight`
//!   + anchor displacement of the moved label × `distance_weight`.
//! - The result is a heuristic local minimum; it depends on the injected RNG.
//!
//! Code cross-refs: `geom2::{overlap_area, intersect}`, `energy::local_energy`.

mod annealer;
mod energy;
mod select;
mod types;

pub use annealer::{accept, remove_overlaps, Annealer, MoveBy};
pub use energy::{anchor_energy, crossing_count, energy, local_energy, total_overlap, LinesIntersect};
pub use select::{leader_lines_cross, overlapping_indices};
pub use types::{AnchorMetric, AnnealCfg, Label};
