//! Label tables in and out.
//!
//! Input rows carry an anchor position and a box size; the optional `id` column
//! becomes the label payload (row index when absent). Formats: CSV (polars lazy
//! reader) and JSON (array of objects).

use anyhow::{bail, Context, Result};
use declutter::anneal::Label;
use declutter::Vec2;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One input row: the anchor is `(x, y)`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LabelRow {
    #[serde(default)]
    pub id: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One output row after placement.
#[derive(Clone, Debug, Serialize)]
pub struct PlacedRow {
    pub id: String,
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub leader: bool,
}

/// Read labels from `.csv` or `.json`, validated and positioned on their anchors.
pub fn read_labels(path: &Path) -> Result<Vec<Label<String>>> {
    let rows = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(path)?,
        Some("json") => read_json(path)?,
        other => bail!("unsupported input extension {:?} (expected csv or json)", other),
    };
    rows_to_labels(rows)
}

fn read_json(path: &Path) -> Result<Vec<LabelRow>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn read_csv(path: &Path) -> Result<Vec<LabelRow>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()?;
    let xs = f64_column(&df, "x")?;
    let ys = f64_column(&df, "y")?;
    let ws = f64_column(&df, "width")?;
    let hs = f64_column(&df, "height")?;
    let ids: Vec<Option<String>> = match df.column("id") {
        Ok(col) => col
            .cast(&DataType::String)?
            .str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect(),
        Err(_) => vec![None; df.height()],
    };
    Ok(ids
        .into_iter()
        .zip(xs)
        .zip(ys)
        .zip(ws)
        .zip(hs)
        .map(|((((id, x), y), width), height)| LabelRow {
            id,
            x,
            y,
            width,
            height,
        })
        .collect())
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null `{name}` in row {row}")))
        .collect()
}

fn rows_to_labels(rows: Vec<LabelRow>) -> Result<Vec<Label<String>>> {
    rows.into_iter()
        .enumerate()
        .map(|(i, r)| {
            if !(r.x.is_finite() && r.y.is_finite()) {
                bail!("row {i}: anchor must be finite, got ({}, {})", r.x, r.y);
            }
            let size_ok = r.width >= 0.0 && r.height >= 0.0;
            if !size_ok || !(r.width.is_finite() && r.height.is_finite()) {
                bail!(
                    "row {i}: size must be finite and non-negative, got {}x{}",
                    r.width,
                    r.height
                );
            }
            let id = r.id.unwrap_or_else(|| i.to_string());
            Ok(Label::new(Vec2::new(r.x, r.y), r.width, r.height, id))
        })
        .collect()
}

pub fn placed_rows(labels: &[Label<String>]) -> Vec<PlacedRow> {
    labels
        .iter()
        .map(|l| PlacedRow {
            id: l.data.clone(),
            anchor_x: l.anchor().x,
            anchor_y: l.anchor().y,
            x: l.x,
            y: l.y,
            width: l.width(),
            height: l.height(),
            leader: l.has_leader(),
        })
        .collect()
}

/// Write placed labels as pretty JSON, creating parent directories.
pub fn write_placed(out: &Path, labels: &[Label<String>]) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let rows = placed_rows(labels);
    fs::write(out, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
