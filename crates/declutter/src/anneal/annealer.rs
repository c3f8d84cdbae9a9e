//! Simulated-annealing driver.
//!
//! Schedule
//! - `sweeps_count` sweeps of `N` move attempts, each on a uniformly random label.
//! - Linear cooling after every sweep: `temp -= initial_temp / sweeps_count`.
//! - Metropolis acceptance: `u < exp(−Δ/temp)`; `Δ <= 0` is always accepted.
//!
//! Ownership
//! - `run` borrows the caller's slice exclusively, moves `x`/`y` in place and
//!   hands the same slice back. Nothing is kept between runs except the config
//!   and callbacks stored on the `Annealer`.

use nalgebra::Vector2;
use rand::Rng;

use crate::geom2::Area;

use super::energy::{local_energy, LinesIntersect};
use super::types::{AnnealCfg, Label};

/// Custom perturbation: the step `(dx, dy)` to try for a label.
pub type MoveBy<'a, T> = dyn FnMut(&Label<T>) -> Vector2<f64> + 'a;

/// Label optimizer with optional area bounds and callbacks.
pub struct Annealer<'a, T> {
    cfg: AnnealCfg,
    area: Option<Area>,
    move_by: Option<Box<MoveBy<'a, T>>>,
    lines_intersect: Option<Box<LinesIntersect<'a, T>>>,
}

impl<'a, T> Annealer<'a, T> {
    pub fn new(cfg: AnnealCfg) -> Self {
        Self {
            cfg,
            area: None,
            move_by: None,
            lines_intersect: None,
        }
    }

    /// Reject per axis any proposed coordinate outside `area`.
    pub fn with_area(mut self, area: Area) -> Self {
        self.area = Some(area);
        self
    }

    /// Replace the default uniform jitter.
    pub fn with_move_by(mut self, f: impl FnMut(&Label<T>) -> Vector2<f64> + 'a) -> Self {
        self.move_by = Some(Box::new(f));
        self
    }

    /// Penalize crossing connector lines with `crossing_weight` per ordered pair.
    pub fn with_lines_intersect(mut self, f: impl Fn(&Label<T>, &Label<T>) -> bool + 'a) -> Self {
        self.lines_intersect = Some(Box::new(f));
        self
    }

    pub fn cfg(&self) -> &AnnealCfg {
        &self.cfg
    }

    /// Run the full schedule on `labels` and return them.
    pub fn run<'l, R: Rng>(&mut self, labels: &'l mut [Label<T>], rng: &mut R) -> &'l mut [Label<T>] {
        let n = labels.len();
        if n == 0 {
            return labels;
        }
        let sweeps = self.cfg.sweeps_count;
        let mut temp = self.cfg.initial_temp;
        for _ in 0..sweeps {
            for _ in 0..n {
                self.attempt(labels, temp, rng);
            }
            // may land at (or a rounding step below) zero after the last sweep
            temp -= self.cfg.initial_temp / sweeps as f64;
        }
        labels
    }

    /// One Metropolis step on a random label. Returns whether the move was kept.
    fn attempt<R: Rng>(&mut self, labels: &mut [Label<T>], temp: f64, rng: &mut R) -> bool {
        let i = rng.gen_range(0..labels.len());
        let old = labels[i].pos();
        let old_energy = local_energy(labels, i, &self.cfg, self.lines_intersect.as_deref());

        let step = match self.move_by.as_mut() {
            Some(f) => f(&labels[i]),
            None => default_step(rng, self.cfg.max_move_distance),
        };
        let mut proposed = old + step;
        if let Some(area) = self.area {
            if !area.contains_x(proposed.x) {
                proposed.x = old.x;
            }
            if !area.contains_y(proposed.y) {
                proposed.y = old.y;
            }
        }
        labels[i].set_pos(proposed);

        let new_energy = local_energy(labels, i, &self.cfg, self.lines_intersect.as_deref());
        let u: f64 = rng.gen();
        if accept(new_energy - old_energy, temp, u) {
            true
        } else {
            labels[i].set_pos(old);
            false
        }
    }
}

/// Uniform jitter in `[-max/2, max/2)` per axis.
#[inline]
fn default_step<R: Rng>(rng: &mut R, max_move_distance: f64) -> Vector2<f64> {
    let dx = (rng.gen::<f64>() - 0.5) * max_move_distance;
    let dy = (rng.gen::<f64>() - 0.5) * max_move_distance;
    Vector2::new(dx, dy)
}

/// Metropolis criterion for energy change `delta` at `temp` with uniform draw `u ∈ [0, 1)`.
///
/// A NaN `delta` is never accepted.
#[inline]
pub fn accept(delta: f64, temp: f64, u: f64) -> bool {
    delta <= 0.0 || u < (-delta / temp).exp()
}

/// Run the annealer with `cfg` and no callbacks.
pub fn remove_overlaps<'l, T, R: Rng>(
    labels: &'l mut [Label<T>],
    cfg: AnnealCfg,
    rng: &mut R,
) -> &'l mut [Label<T>] {
    Annealer::new(cfg).run(labels, rng)
}
