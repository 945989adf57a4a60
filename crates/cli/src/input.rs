use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use polars::prelude::*;
use rectfit::io::{parse_batch, Case};
use rectfit::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// `T`, then `n` and `n` coordinate pairs per case
    Text,
    /// Header `case,x,y`; rows grouped by `case` in order of first appearance
    Csv,
}

pub fn read_cases(input: &Path, format: InputFormat) -> Result<Vec<Case>> {
    let stdin = input == Path::new("-");
    match format {
        InputFormat::Text => {
            let text = if stdin {
                std::io::read_to_string(std::io::stdin()).context("reading stdin")?
            } else {
                std::fs::read_to_string(input)
                    .with_context(|| format!("reading {}", input.display()))?
            };
            let cases = parse_batch(&text).with_context(|| format!("parsing {}", input.display()))?;
            tracing::info!(cases = cases.len(), "input_batch");
            Ok(cases)
        }
        InputFormat::Csv => {
            if stdin {
                bail!("CSV input needs a file path");
            }
            read_csv(input)
        }
    }
}

fn read_csv(path: &Path) -> Result<Vec<Case>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("case").cast(DataType::Int64),
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let case = df.column("case")?.i64()?;
    let x = df.column("x")?.f64()?;
    let y = df.column("y")?.f64()?;
    let rows = case
        .into_iter()
        .zip(x.into_iter())
        .zip(y.into_iter())
        .map(|((c, x), y)| (c, x, y));
    group_rows(rows)
}

/// Group `(case, x, y)` rows into cases, keeping first-appearance order.
fn group_rows<I>(rows: I) -> Result<Vec<Case>>
where
    I: IntoIterator<Item = (Option<i64>, Option<f64>, Option<f64>)>,
{
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut cases: Vec<Case> = Vec::new();
    for (row, item) in rows.into_iter().enumerate() {
        let (Some(c), Some(x), Some(y)) = item else {
            bail!("row {row}: missing case, x or y");
        };
        if !(x.is_finite() && y.is_finite()) {
            bail!("row {row}: non-finite coordinate");
        }
        let k = *index.entry(c).or_insert_with(|| {
            cases.push(Case { points: Vec::new() });
            cases.len() - 1
        });
        cases[k].points.push(Point::new(x, y));
    }
    Ok(cases)
}
