//! Data types for the label optimizer: labels and tuning weights.

use nalgebra::Vector2;

use crate::geom2::Rect;

/// A movable text box pulled toward a fixed anchor.
///
/// Invariants:
/// - Only `x`/`y` change during a run; size and anchor are fixed at construction.
/// - `data` is an opaque payload the optimizer never reads.
#[derive(Clone, Debug, PartialEq)]
pub struct Label<T> {
    pub x: f64,
    pub y: f64,
    width: f64,
    height: f64,
    anchor: Vector2<f64>,
    pub data: T,
}

impl<T> Label<T> {
    /// New label sitting on its anchor.
    pub fn new(anchor: Vector2<f64>, width: f64, height: f64, data: T) -> Self {
        Self {
            x: anchor.x,
            y: anchor.y,
            width,
            height,
            anchor,
            data,
        }
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
    #[inline]
    pub fn anchor(&self) -> Vector2<f64> {
        self.anchor
    }
    #[inline]
    pub fn pos(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    #[inline]
    pub fn set_pos(&mut self, p: Vector2<f64>) {
        self.x = p.x;
        self.y = p.y;
    }
    /// Bounding box at the current position.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
    /// Moved away from its anchor, so a renderer should draw a leader line.
    #[inline]
    pub fn has_leader(&self) -> bool {
        self.x != self.anchor.x || self.y != self.anchor.y
    }
}

/// How displacement from the anchor enters the energy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnchorMetric {
    /// `sqrt(dx² + dy²)`.
    #[default]
    Euclidean,
    /// `sqrt(dx² − dy²)`: the historical chart formula. NaN whenever `|dy| > |dx|`,
    /// and a NaN energy rejects the move.
    Legacy,
}

impl AnchorMetric {
    #[inline]
    pub fn eval(self, d: Vector2<f64>) -> f64 {
        match self {
            AnchorMetric::Euclidean => (d.x * d.x + d.y * d.y).sqrt(),
            AnchorMetric::Legacy => (d.x * d.x - d.y * d.y).sqrt(),
        }
    }
}

/// Annealing schedule and energy weights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnealCfg {
    /// Full sweeps; one sweep is `N` random move attempts.
    pub sweeps_count: usize,
    /// Start temperature; cooled linearly to zero over the sweeps.
    pub initial_temp: f64,
    /// Default jitter draws each axis from `[-max/2, max/2]`.
    pub max_move_distance: f64,
    pub overlap_weight: f64,
    pub distance_weight: f64,
    /// Per crossing connector pair; dominates overlap and distance for small `N`.
    pub crossing_weight: f64,
    pub anchor_metric: AnchorMetric,
}

impl Default for AnnealCfg {
    fn default() -> Self {
        Self {
            sweeps_count: 50,
            initial_temp: 1.0,
            max_move_distance: 10.0,
            overlap_weight: 30.0,
            distance_weight: 2.0,
            crossing_weight: 200_000.0,
            anchor_metric: AnchorMetric::Euclidean,
        }
    }
}
