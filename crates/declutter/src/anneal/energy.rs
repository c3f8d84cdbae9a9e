//! Energy of a label configuration.
//!
//! - `energy`: the full sum (ordered-pair overlap, ordered-pair crossings, anchor
//!   distance of the evaluated label). O(N²).
//! - `local_energy`: only the terms that depend on the evaluated label. Terms
//!   between two other labels are unchanged by moving it, so
//!   `energy(after) − energy(before) == local_energy(after) − local_energy(before)`.
//!   O(N); this is what the annealer evaluates per move.

use crate::geom2::overlap_area;

use super::types::{AnnealCfg, Label};

/// Connector-line predicate: does the line of `a` cross the line of `b`?
pub type LinesIntersect<'a, T> = dyn Fn(&Label<T>, &Label<T>) -> bool + 'a;

/// Weighted displacement of `label` from its anchor.
#[inline]
pub fn anchor_energy<T>(label: &Label<T>, cfg: &AnnealCfg) -> f64 {
    cfg.anchor_metric.eval(label.pos() - label.anchor()) * cfg.distance_weight
}

/// Full energy of `labels` with `labels[index]` as the evaluated label.
pub fn energy<T>(
    labels: &[Label<T>],
    index: usize,
    cfg: &AnnealCfg,
    lines_intersect: Option<&LinesIntersect<'_, T>>,
) -> f64 {
    let mut e = 0.0;
    for (i, a) in labels.iter().enumerate() {
        let ra = a.rect();
        for (j, b) in labels.iter().enumerate() {
            if i == j {
                continue;
            }
            e += overlap_area(&ra, &b.rect()) * cfg.overlap_weight;
            if let Some(f) = lines_intersect {
                if f(a, b) {
                    e += cfg.crossing_weight;
                }
            }
        }
    }
    e + anchor_energy(&labels[index], cfg)
}

/// Terms of `energy` that involve `labels[index]`.
pub fn local_energy<T>(
    labels: &[Label<T>],
    index: usize,
    cfg: &AnnealCfg,
    lines_intersect: Option<&LinesIntersect<'_, T>>,
) -> f64 {
    let l = &labels[index];
    let rl = l.rect();
    let mut e = 0.0;
    for (j, other) in labels.iter().enumerate() {
        if j == index {
            continue;
        }
        // (index, j) and (j, index) both appear in the ordered-pair sum
        e += 2.0 * overlap_area(&rl, &other.rect()) * cfg.overlap_weight;
        if let Some(f) = lines_intersect {
            if f(l, other) {
                e += cfg.crossing_weight;
            }
            if f(other, l) {
                e += cfg.crossing_weight;
            }
        }
    }
    e + anchor_energy(l, cfg)
}

/// Overlap summed over unordered pairs.
pub fn total_overlap<T>(labels: &[Label<T>]) -> f64 {
    let mut total = 0.0;
    for (i, a) in labels.iter().enumerate() {
        let ra = a.rect();
        for b in &labels[i + 1..] {
            total += overlap_area(&ra, &b.rect());
        }
    }
    total
}

/// Number of unordered pairs whose connector lines cross.
pub fn crossing_count<T>(labels: &[Label<T>], lines_intersect: &LinesIntersect<'_, T>) -> usize {
    let mut count = 0;
    for (i, a) in labels.iter().enumerate() {
        for b in &labels[i + 1..] {
            if lines_intersect(a, b) {
                count += 1;
            }
        }
    }
    count
}
