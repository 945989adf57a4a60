use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rectfit::io::{format_area, write_batch, Case};
use rectfit::rand::{sample_perimeter, RectSpec, ReplayToken};
use rectfit::{recover, FitCfg, RecoverError, Recovery};
use serde::Serialize;
use serde_json::json;

use crate::input::{read_cases, InputFormat};
use crate::provenance::{current_git_rev, write_sidecar, Payload};

pub struct SolveOpts {
    pub input: PathBuf,
    pub format: InputFormat,
    pub out: Option<PathBuf>,
    pub json: bool,
    pub cfg: FitCfg,
    pub precision: usize,
}

/// Per-case JSON record.
#[derive(Debug, Serialize)]
pub struct CaseReport {
    pub case: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corners: Option<[[f64; 2]; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CaseReport {
    fn new(case: usize, result: &Result<Recovery, RecoverError>) -> Self {
        match result {
            Ok(r) => Self {
                case,
                area: Some(r.area),
                path: Some(r.path.as_str()),
                edge: Some(r.edge),
                corners: Some(r.rect.corners.map(|c| [c.x, c.y])),
                error: None,
            },
            Err(e) => Self {
                case,
                area: None,
                path: None,
                edge: None,
                corners: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Recover every case; failures are kept in place so output lines up with input.
pub fn solve_cases(cases: &[Case], cfg: &FitCfg) -> Vec<Result<Recovery, RecoverError>> {
    cases
        .iter()
        .enumerate()
        .map(|(case, c)| {
            let result = recover(&c.points, cfg);
            match &result {
                Ok(r) => tracing::debug!(case, area = r.area, path = r.path.as_str(), "solved"),
                Err(e) => tracing::error!(case, error = %e, "recovery failed"),
            }
            result
        })
        .collect()
}

/// Plain text: one area per line, `error: ...` for failed cases. JSON: array of `CaseReport`.
pub fn render(
    results: &[Result<Recovery, RecoverError>],
    json: bool,
    precision: usize,
) -> Result<String> {
    if json {
        let reports: Vec<CaseReport> = results
            .iter()
            .enumerate()
            .map(|(i, r)| CaseReport::new(i, r))
            .collect();
        let mut s = serde_json::to_string_pretty(&reports)?;
        s.push('\n');
        return Ok(s);
    }
    let mut s = String::new();
    for r in results {
        match r {
            Ok(r) => s.push_str(&format_area(r.area, precision)),
            Err(e) => s.push_str(&format!("error: {e}")),
        }
        s.push('\n');
    }
    Ok(s)
}

pub fn solve(opts: SolveOpts) -> Result<()> {
    tracing::info!(input = %opts.input.display(), format = ?opts.format, "solve");
    let cases = read_cases(&opts.input, opts.format)?;
    let results = solve_cases(&cases, &opts.cfg);
    let text = render(&results, opts.json, opts.precision)?;
    match &opts.out {
        Some(out) => {
            write_output(out, &text)?;
            let payload = Payload::new(
                "solve",
                json!({
                    "input": opts.input.to_string_lossy(),
                    "format": format!("{:?}", opts.format),
                    "eps_rel": opts.cfg.eps_rel,
                    "eps_slope": opts.cfg.eps_slope,
                    "precision": opts.precision,
                    "cases": cases.len(),
                }),
            );
            write_sidecar(out, payload)?;
        }
        None => print!("{text}"),
    }
    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        bail!("{failed} of {} cases had no consistent rectangle", results.len());
    }
    Ok(())
}

/// Draw `cases` random rectangles and return the batch plus their true areas.
pub fn sample_batch(cases: u64, points: usize, seed: u64, axis_aligned: bool) -> (Vec<Case>, Vec<f64>) {
    (0..cases)
        .map(|index| {
            let mut rng = ReplayToken::new(seed, index).to_std_rng();
            let spec = RectSpec::random(&mut rng, axis_aligned);
            let pts = sample_perimeter(&spec, points, &mut rng);
            tracing::debug!(index, area = spec.area(), angle = spec.angle, "sampled");
            (Case { points: pts }, spec.area())
        })
        .unzip()
}

pub fn sample(
    cases: u64,
    points: usize,
    seed: u64,
    axis_aligned: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    tracing::info!(cases, points, seed, axis_aligned, "sample");
    if points < 8 {
        tracing::warn!(points, "fewer than 8 points may not pin down a rectangle");
    }
    let (batch, areas) = sample_batch(cases, points, seed, axis_aligned);
    let text = write_batch(&batch);
    match out {
        Some(out) => {
            write_output(&out, &text)?;
            let payload = Payload::new(
                "sample",
                json!({
                    "cases": cases,
                    "points": points,
                    "seed": seed,
                    "axis_aligned": axis_aligned,
                    "expected_areas": areas,
                }),
            );
            write_sidecar(&out, payload)?;
        }
        None => print!("{text}"),
    }
    Ok(())
}

pub fn report() -> Result<()> {
    let obj = json!({
        "code_rev": current_git_rev(),
        "version": rectfit::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_output(out: &Path, text: &str) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, text).with_context(|| format!("writing {}", out.display()))
}
