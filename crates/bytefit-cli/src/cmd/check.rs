use clap::Args;

use bytefit_core::extract::extract;
use bytefit_core::fit::law::ScaleLaw;
use bytefit_core::hypothesis::format::hypothesis_id_hex;
use bytefit_core::hypothesis::params::Hypothesis;

use super::util::{key_from_flags, parse_endian, parse_hex_u64, parse_sample_specs, parse_width};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Sample spec `hex:target[:label]`; repeatable, at least one.
    #[arg(long = "sample", required = true)]
    pub samples: Vec<String>,

    /// Window offset in bytes.
    #[arg(long)]
    pub offset: usize,

    /// Window width in bytes (2 or 3).
    #[arg(long, default_value = "2")]
    pub width: String,

    /// Byte order: le or be.
    #[arg(long, default_value = "le")]
    pub endian: String,

    /// Optional mask in hex (omit for full width).
    #[arg(long)]
    pub mask: Option<String>,

    /// Fixed XOR key in hex (one byte).
    #[arg(long)]
    pub xor_key: Option<String>,

    /// Self-byte XOR key index into each buffer.
    #[arg(long)]
    pub self_key: Option<usize>,

    /// Multiplicative law: target = factor * reading.
    #[arg(long)]
    pub factor: Option<f64>,

    /// Affine law slope (requires --intercept).
    #[arg(long)]
    pub slope: Option<f64>,

    /// Affine law intercept (requires --slope).
    #[arg(long)]
    pub intercept: Option<f64>,

    /// Absolute residual tolerance for the verdict.
    #[arg(long, default_value_t = 0.5)]
    pub tol: f64,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let samples = parse_sample_specs(&args.samples)?;

    let h = Hypothesis {
        offset: args.offset,
        width: parse_width(&args.width)?,
        endian: parse_endian(&args.endian)?,
        mask: match args.mask.as_deref() {
            Some(m) => Some(parse_hex_u64(m)?),
            None => None,
        },
        key: key_from_flags(args.xor_key, args.self_key)?,
    };

    let law = match (args.factor, args.slope, args.intercept) {
        (Some(factor), None, None) => ScaleLaw::Multiplicative { factor },
        (None, Some(slope), Some(intercept)) => ScaleLaw::Affine { slope, intercept },
        (None, None, None) => anyhow::bail!("give a law: --factor, or --slope with --intercept"),
        _ => anyhow::bail!("--factor and --slope/--intercept are mutually exclusive"),
    };

    eprintln!("--- check ---");
    eprintln!("hypothesis      = {} (id={})", h, hypothesis_id_hex(&h));
    eprintln!("law             = {}", law);
    eprintln!("tol             = {}", args.tol);

    let mut max_resid = 0.0f64;
    let mut infeasible = 0usize;

    for s in samples.iter() {
        match extract(&s.bytes, &h) {
            Some(r) => {
                let est = law.apply(r);
                let resid = est - s.target;
                max_resid = max_resid.max(resid.abs());
                println!(
                    "{:<10} reading={:<8} -> {:.2} (target {:.2}, resid {:+.3})",
                    s.label, r, est, s.target, resid
                );
            }
            None => {
                infeasible += 1;
                println!("{:<10} infeasible (window or key index out of range)", s.label);
            }
        }
    }

    if infeasible > 0 {
        println!("check failed: {} sample(s) infeasible", infeasible);
    } else if max_resid <= args.tol {
        println!("check ok: max_resid={:.4} <= tol={}", max_resid, args.tol);
    } else {
        println!("check failed: max_resid={:.4} > tol={}", max_resid, args.tol);
    }

    Ok(())
}
