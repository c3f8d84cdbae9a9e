//! Curated surface for chart call sites.
//!
//! Mirrors the flow the renderers use: filter to overlapping labels, anneal that
//! subset (optionally forbidding crossing leader lines), write positions back.

use rand::Rng;

use crate::anneal::{leader_lines_cross, overlapping_indices, AnnealCfg, Annealer, Label};
use crate::geom2::Area;

pub use crate::anneal::{remove_overlaps, total_overlap, AnchorMetric};
pub use crate::geom2::{distance, intersect, overlap_area, scale_to_length, GeometryError, Rect};

/// Options for `declutter`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeclutterOpts {
    pub cfg: AnnealCfg,
    pub area: Option<Area>,
    /// Penalize crossing anchor→label leader lines.
    pub avoid_leader_crossings: bool,
    /// Anneal only labels that overlap another one; the rest stay on their anchors.
    pub only_overlapping: bool,
}

/// Run the annealer over `labels` the way chart renderers do.
///
/// Returns the indices that took part in the optimization.
pub fn declutter<T: Clone, R: Rng>(
    labels: &mut [Label<T>],
    opts: &DeclutterOpts,
    rng: &mut R,
) -> Vec<usize> {
    let picked: Vec<usize> = if opts.only_overlapping {
        overlapping_indices(labels)
    } else {
        (0..labels.len()).collect()
    };
    if picked.is_empty() {
        return picked;
    }
    let mut subset: Vec<Label<T>> = picked.iter().map(|&i| labels[i].clone()).collect();
    let mut annealer = Annealer::new(opts.cfg);
    if let Some(area) = opts.area {
        annealer = annealer.with_area(area);
    }
    if opts.avoid_leader_crossings {
        annealer = annealer.with_lines_intersect(leader_lines_cross::<T>);
    }
    annealer.run(&mut subset, rng);
    for (&i, placed) in picked.iter().zip(subset) {
        labels[i].set_pos(placed.pos());
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn isolated_labels_keep_their_anchor() {
        let mut labels = vec![
            Label::new(vector![0.0, 0.0], 30.0, 10.0, "a"),
            Label::new(vector![5.0, 2.0], 30.0, 10.0, "b"),
            Label::new(vector![500.0, 500.0], 30.0, 10.0, "far"),
        ];
        let opts = DeclutterOpts {
            only_overlapping: true,
            ..DeclutterOpts::default()
        };
        let picked = declutter(&mut labels, &opts, &mut StdRng::seed_from_u64(4));
        assert_eq!(picked, vec![0, 1]);
        assert!(!labels[2].has_leader());
        assert!(total_overlap(&labels[..2]) < 25.0 * 8.0);
        assert_eq!(labels[0].data, "a");
    }

    #[test]
    fn nothing_to_do_without_overlaps() {
        let mut labels = vec![Label::new(vector![0.0, 0.0], 1.0, 1.0, 0u8)];
        let opts = DeclutterOpts {
            only_overlapping: true,
            ..DeclutterOpts::default()
        };
        assert!(declutter(&mut labels, &opts, &mut StdRng::seed_from_u64(0)).is_empty());
    }
}
