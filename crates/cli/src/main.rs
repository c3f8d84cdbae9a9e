use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use declutter::anneal::{
    crossing_count, leader_lines_cross, total_overlap, AnchorMetric, AnnealCfg,
};
use declutter::api::{declutter, DeclutterOpts};
use declutter::geom2::Area;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

#[derive(Parser)]
#[command(name = "declutter")]
#[command(about = "Remove overlaps between chart labels by simulated annealing")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Place labels from a CSV/JSON table and write the result as JSON
    Place(PlaceArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MetricArg {
    Euclidean,
    Legacy,
}

impl From<MetricArg> for AnchorMetric {
    fn from(m: MetricArg) -> Self {
        match m {
            MetricArg::Euclidean => AnchorMetric::Euclidean,
            MetricArg::Legacy => AnchorMetric::Legacy,
        }
    }
}

#[derive(clap::Args, Debug)]
struct PlaceArgs {
    /// Input table with columns x, y, width, height and optional id
    #[arg(long)]
    input: PathBuf,
    /// Output JSON; a `<stem>.provenance.json` sidecar is written next to it
    #[arg(long)]
    out: PathBuf,
    /// RNG seed; drawn at random (and logged) when omitted
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = AnnealCfg::default().sweeps_count)]
    sweeps: usize,
    #[arg(long, default_value_t = AnnealCfg::default().initial_temp)]
    initial_temp: f64,
    #[arg(long, default_value_t = AnnealCfg::default().max_move_distance)]
    max_move: f64,
    #[arg(long, default_value_t = AnnealCfg::default().overlap_weight)]
    overlap_weight: f64,
    #[arg(long, default_value_t = AnnealCfg::default().distance_weight)]
    distance_weight: f64,
    #[arg(long, default_value_t = AnnealCfg::default().crossing_weight)]
    crossing_weight: f64,
    #[arg(long, value_enum, default_value_t = MetricArg::Euclidean)]
    anchor_metric: MetricArg,
    /// Bounding area x1 y1 x2 y2 for label positions
    #[arg(
        long,
        num_args = 4,
        value_names = ["X1", "Y1", "X2", "Y2"],
        allow_negative_numbers = true
    )]
    area: Option<Vec<f64>>,
    /// Penalize crossing anchor-to-label leader lines
    #[arg(long)]
    leader_crossings: bool,
    /// Only anneal labels that overlap another label
    #[arg(long)]
    only_overlapping: bool,
}

impl PlaceArgs {
    fn cfg(&self) -> AnnealCfg {
        AnnealCfg {
            sweeps_count: self.sweeps,
            initial_temp: self.initial_temp,
            max_move_distance: self.max_move,
            overlap_weight: self.overlap_weight,
            distance_weight: self.distance_weight,
            crossing_weight: self.crossing_weight,
            anchor_metric: self.anchor_metric.into(),
        }
    }

    fn area(&self) -> Result<Option<Area>> {
        match self.area.as_deref() {
            None => Ok(None),
            Some(&[x1, y1, x2, y2]) => {
                if x1 > x2 || y1 > y2 {
                    bail!("area must satisfy x1 <= x2 and y1 <= y2, got {x1} {y1} {x2} {y2}");
                }
                Ok(Some(Area::new(x1, y1, x2, y2)))
            }
            Some(other) => bail!("area takes exactly 4 values, got {}", other.len()),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Place(args) => place(args),
        Action::Report => report(),
    }
}

fn place(args: PlaceArgs) -> Result<()> {
    let mut labels = io::read_labels(&args.input)?;
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let opts = DeclutterOpts {
        cfg: args.cfg(),
        area: args.area()?,
        avoid_leader_crossings: args.leader_crossings,
        only_overlapping: args.only_overlapping,
    };
    tracing::info!(
        input = %args.input.display(),
        n = labels.len(),
        seed,
        sweeps = opts.cfg.sweeps_count,
        "place"
    );

    let overlap_before = total_overlap(&labels);
    let mut rng = StdRng::seed_from_u64(seed);
    let picked = declutter(&mut labels, &opts, &mut rng);
    let overlap_after = total_overlap(&labels);
    let crossings = crossing_count(&labels, &leader_lines_cross::<String>);
    let moved = labels.iter().filter(|l| l.has_leader()).count();
    tracing::info!(
        annealed = picked.len(),
        moved,
        overlap_before,
        overlap_after,
        crossings,
        "placed"
    );
    if overlap_after > overlap_before {
        tracing::warn!(overlap_before, overlap_after, "overlap grew; consider more sweeps");
    }

    io::write_placed(&args.out, &labels)?;
    let payload = provenance::Payload::new(serde_json::json!({
        "input": args.input.to_string_lossy(),
        "seed": seed,
        "sweeps": opts.cfg.sweeps_count,
        "initial_temp": opts.cfg.initial_temp,
        "max_move": opts.cfg.max_move_distance,
        "overlap_weight": opts.cfg.overlap_weight,
        "distance_weight": opts.cfg.distance_weight,
        "crossing_weight": opts.cfg.crossing_weight,
        "anchor_metric": format!("{:?}", opts.cfg.anchor_metric),
        "area": args.area,
        "leader_crossings": opts.avoid_leader_crossings,
        "only_overlapping": opts.only_overlapping,
    }))
    .with_stats(serde_json::json!({
        "labels": labels.len(),
        "annealed": picked.len(),
        "moved": moved,
        "overlap_before": overlap_before,
        "overlap_after": overlap_after,
        "leader_crossings": crossings,
    }));
    let prov = provenance::write_sidecar(&args.out, payload)?;
    tracing::info!(out = %args.out.display(), provenance = %prov.display(), "wrote");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "declutter_version": declutter::VERSION,
        "defaults": {
            "sweeps": AnnealCfg::default().sweeps_count,
            "max_move": AnnealCfg::default().max_move_distance,
            "overlap_weight": AnnealCfg::default().overlap_weight,
            "distance_weight": AnnealCfg::default().distance_weight,
            "crossing_weight": AnnealCfg::default().crossing_weight,
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn flags_map_onto_cfg() {
        let cmd = Cmd::try_parse_from([
            "declutter",
            "place",
            "--input",
            "in.json",
            "--out",
            "out.json",
            "--sweeps",
            "7",
            "--anchor-metric",
            "legacy",
            "--area",
            "-10",
            "0",
            "100",
            "50",
        ])
        .unwrap();
        let Action::Place(args) = cmd.action else {
            panic!("expected place");
        };
        let cfg = args.cfg();
        assert_eq!(cfg.sweeps_count, 7);
        assert_eq!(cfg.anchor_metric, AnchorMetric::Legacy);
        assert_eq!(cfg.overlap_weight, AnnealCfg::default().overlap_weight);
        assert_eq!(
            args.area().unwrap(),
            Some(Area::new(-10.0, 0.0, 100.0, 50.0))
        );
    }

    #[test]
    fn inverted_area_is_rejected() {
        let cmd = Cmd::try_parse_from([
            "declutter", "place", "--input", "a.csv", "--out", "b.json", "--area", "5", "0", "1",
            "10",
        ])
        .unwrap();
        let Action::Place(args) = cmd.action else {
            panic!("expected place");
        };
        assert!(args.area().is_err());
    }

    #[test]
    fn place_writes_output_and_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("labels.json");
        std::fs::write(
            &input,
            r#"[{"id": "a", "x": 0, "y": 0, "width": 40, "height": 14},
                {"id": "b", "x": 6, "y": 2, "width": 40, "height": 14},
                {"id": "c", "x": 300, "y": 300, "width": 40, "height": 14}]"#,
        )
        .unwrap();
        let out = dir.path().join("placed.json");
        let cmd = Cmd::try_parse_from([
            "declutter",
            "place",
            "--input",
            input.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
            "--seed",
            "3",
            "--only-overlapping",
            "--leader-crossings",
        ])
        .unwrap();
        let Action::Place(args) = cmd.action else {
            panic!("expected place");
        };
        place(args).unwrap();
        let rows: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 3);
        assert_eq!(rows[2]["leader"], false);
        assert!(dir.path().join("placed.provenance.json").exists());
    }
}
