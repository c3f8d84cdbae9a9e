//! Pie-chart value labels: anchor each label at its slice's outer midpoint and
//! let the annealer spread the crowded ones.
//!
//! Run: cargo run -p declutter --example pie_labels

use std::f64::consts::TAU;

use declutter::api::{declutter, DeclutterOpts};
use declutter::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    // Many thin slices on one side crowd their labels together.
    let values = [40.0, 22.0, 9.0, 6.0, 5.0, 4.0, 3.5, 3.0, 2.5, 2.0, 1.5, 1.5];
    let total: f64 = values.iter().sum();
    let (cx, cy, r) = (200.0, 200.0, 150.0);

    let mut start = 0.0;
    let mut labels: Vec<Label<String>> = Vec::with_capacity(values.len());
    for v in values {
        let sweep = v / total * TAU;
        let mid = start + sweep / 2.0;
        start += sweep;
        let text = format!("{:.1}%", v / total * 100.0);
        let width = 7.0 * text.len() as f64;
        let height = 14.0;
        // box centered on the point just outside the rim
        let anchor = Vec2::new(
            cx + (r + 12.0) * mid.cos() - width / 2.0,
            cy + (r + 12.0) * mid.sin() - height / 2.0,
        );
        labels.push(Label::new(anchor, width, height, text));
    }

    let before = total_overlap(&labels);
    let opts = DeclutterOpts {
        cfg: AnnealCfg {
            sweeps_count: 200,
            ..AnnealCfg::default()
        },
        area: Some(Area::new(0.0, 0.0, 400.0, 400.0)),
        avoid_leader_crossings: true,
        only_overlapping: true,
    };
    let mut rng = StdRng::seed_from_u64(2024);
    let picked = declutter(&mut labels, &opts, &mut rng);

    println!("annealed {} of {} labels", picked.len(), labels.len());
    println!("overlap: {before:.1} -> {:.1}", total_overlap(&labels));
    for l in &labels {
        let leader = if l.has_leader() { " (leader)" } else { "" };
        println!("{:>6} at ({:7.2}, {:7.2}){leader}", l.data, l.x, l.y);
    }
}
