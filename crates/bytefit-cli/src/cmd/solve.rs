use clap::Args;
use std::time::Instant;

use bytefit_core::extract::extract;
use bytefit_core::hypothesis::format::hypothesis_id_hex;
use bytefit_core::search::search_with_stats;
use bytefit_core::{EvalParams, Fit, Sample, SearchSpace};

use super::util::{parse_factors, parse_masks, parse_sample_specs, parse_widths};

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Sample spec `hex:target[:label]`; repeatable, at least one.
    #[arg(long = "sample", required = true)]
    pub samples: Vec<String>,

    /// Inclusive max window offset.
    #[arg(long, default_value_t = 12)]
    pub max_offset: usize,

    /// Comma-separated window widths in bytes (2,3).
    #[arg(long, default_value = "2,3")]
    pub widths: String,

    /// Comma-separated masks in hex; `none` = full width.
    #[arg(long, default_value = "none,7fff,3fff,fff")]
    pub masks: String,

    /// Skip the fixed single-byte XOR key scan (0..=255).
    #[arg(long, default_value_t = false)]
    pub no_fixed_keys: bool,

    /// Skip self-byte XOR keys drawn from each buffer's own bytes.
    #[arg(long, default_value_t = false)]
    pub no_self_keys: bool,

    /// Absolute tolerance for multiplicative fits.
    #[arg(long, default_value_t = 0.5)]
    pub tol_mult: f64,

    /// Absolute tolerance for affine fits (stricter: more free parameters).
    #[arg(long, default_value_t = 0.2)]
    pub tol_affine: f64,

    /// Optional comma-separated candidate factor list (e.g. "0.01,0.005").
    /// When set, multiplicative fits must use a listed factor instead of
    /// deriving one from the first sample.
    #[arg(long)]
    pub factors: Option<String>,

    /// Optional text report path (human-readable).
    #[arg(long)]
    pub report: Option<String>,
}

pub fn run(args: SolveArgs) -> anyhow::Result<()> {
    let samples = parse_sample_specs(&args.samples)?;

    let mut space = SearchSpace::for_samples(&samples);
    space.max_offset = args.max_offset;
    space.widths = parse_widths(&args.widths)?;
    space.masks = parse_masks(&args.masks)?;
    space.fixed_keys = !args.no_fixed_keys;
    if args.no_self_keys {
        space.self_key_limit = 0;
    }

    let params = EvalParams {
        tol_multiplicative: args.tol_mult,
        tol_affine: args.tol_affine,
        factors: match args.factors.as_deref() {
            Some(s) => Some(parse_factors(s)?),
            None => None,
        },
    };

    let mut report_lines: Vec<String> = Vec::new();
    report_lines.push("--- bytefit solve report ---".to_string());

    eprintln!("--- solve ---");
    eprintln!("samples         = {}", samples.len());
    for s in samples.iter() {
        let line = format!(
            "sample {:<10} len={:>3} target={}",
            s.label,
            s.bytes.len(),
            s.target
        );
        eprintln!("{}", line);
        report_lines.push(line);
    }
    eprintln!("max_offset      = {}", space.max_offset);
    eprintln!("widths          = {}", args.widths);
    eprintln!("masks           = {}", args.masks);
    eprintln!("fixed_keys      = {}", space.fixed_keys);
    eprintln!("self_key_limit  = {}", space.self_key_limit);
    eprintln!("tol_mult        = {}", params.tol_multiplicative);
    eprintln!("tol_affine      = {}", params.tol_affine);
    if let Some(f) = params.factors.as_deref() {
        eprintln!("factor_set      = {:?}", f);
    }
    eprintln!("space           = {} hypotheses", space.len());
    report_lines.push(format!("space = {} hypotheses", space.len()));

    let t0 = Instant::now();
    let (fits, stats) = search_with_stats(&samples, &space, &params)
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    let elapsed_ms = t0.elapsed().as_millis();

    for (i, fit) in fits.iter().enumerate() {
        for line in fit_lines(i + 1, fit, &samples) {
            println!("{}", line);
            report_lines.push(line);
        }
    }

    if fits.is_empty() {
        let line = format!(
            "no match found (scanned {} hypotheses, evaluated {})",
            stats.hypotheses, stats.evaluated
        );
        println!("{}", line);
        report_lines.push(line);
    }

    let summary = format!(
        "solve ok: fits={} hypotheses={} evaluated={} infeasible={} elapsed_ms={}",
        fits.len(),
        stats.hypotheses,
        stats.evaluated,
        stats.infeasible,
        elapsed_ms
    );
    eprintln!("{}", summary);
    report_lines.push(summary);

    if let Some(path) = args.report.as_deref() {
        let text = report_lines.join("\n") + "\n";
        std::fs::write(path, text)?;
        eprintln!("wrote report: {}", path);
    }

    Ok(())
}

fn fit_lines(n: usize, fit: &Fit, samples: &[Sample]) -> Vec<String> {
    let mut out = Vec::with_capacity(2 + samples.len());
    out.push(format!(
        "fit #{} id={} {}",
        n,
        hypothesis_id_hex(&fit.hypothesis),
        fit.hypothesis
    ));
    out.push(format!("  law = {}", fit.law));

    for (s, resid) in samples.iter().zip(fit.residuals.iter()) {
        // The search only yields hypotheses feasible for every sample.
        let reading = extract(&s.bytes, &fit.hypothesis).unwrap_or(0);
        out.push(format!(
            "  {:<10} reading={:<8} -> {:.2} (target {:.2}, resid {:+.3})",
            s.label,
            reading,
            fit.law.apply(reading),
            s.target,
            resid
        ));
    }
    out
}
