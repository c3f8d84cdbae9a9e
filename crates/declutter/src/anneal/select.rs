//! Call-site helpers: pick the labels worth optimizing and build leader-line predicates.

use crate::geom2::{intersect, overlap_area};

use super::types::Label;

/// Indices of labels that overlap at least one other label, ascending.
///
/// Chart code runs the annealer only on this subset; isolated labels keep their anchor.
pub fn overlapping_indices<T>(labels: &[Label<T>]) -> Vec<usize> {
    let mut hit = vec![false; labels.len()];
    for (i, a) in labels.iter().enumerate() {
        let ra = a.rect();
        for (j, b) in labels.iter().enumerate().skip(i + 1) {
            if overlap_area(&ra, &b.rect()) > 0.0 {
                hit[i] = true;
                hit[j] = true;
            }
        }
    }
    hit.iter()
        .enumerate()
        .filter_map(|(i, &h)| h.then_some(i))
        .collect()
}

/// Do the anchor→position leader lines of `a` and `b` cross?
///
/// A label on its anchor draws no leader and never crosses.
pub fn leader_lines_cross<T>(a: &Label<T>, b: &Label<T>) -> bool {
    if !a.has_leader() || !b.has_leader() {
        return false;
    }
    intersect(a.anchor(), a.pos(), b.anchor(), b.pos())
}
