// crates/bytefit-cli/src/cmd/util.rs

use bytefit_core::hypothesis::params::{Endian, KeySource, Width};
use bytefit_core::sample::Sample;

/// Parse repeated `hex:target[:label]` specs into samples.
/// Unlabeled samples get `s1`, `s2`, ... in input order.
pub fn parse_sample_specs(specs: &[String]) -> anyhow::Result<Vec<Sample>> {
    let mut out = Vec::with_capacity(specs.len());
    for (i, spec) in specs.iter().enumerate() {
        let mut parts = spec.splitn(3, ':');
        let hex = parts
            .next()
            .ok_or_else(|| anyhow::anyhow!("empty sample spec"))?;
        let target_str = parts.next().ok_or_else(|| {
            anyhow::anyhow!("sample spec missing target (want hex:target[:label]): {}", spec)
        })?;
        let target: f64 = target_str
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid sample target: {}", target_str))?;
        let label = match parts.next() {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => format!("s{}", i + 1),
        };

        let s = Sample::from_hex(hex, target, label).map_err(|e| anyhow::anyhow!("{e}"))?;
        out.push(s);
    }
    if out.is_empty() {
        anyhow::bail!("at least one --sample is required");
    }
    Ok(out)
}

/// Comma-separated width list, entries in bytes (2 or 3).
pub fn parse_widths(s: &str) -> anyhow::Result<Vec<Width>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let t = part.trim();
        if t.is_empty() {
            continue;
        }
        out.push(parse_width(t)?);
    }
    if out.is_empty() {
        anyhow::bail!("width list is empty");
    }
    Ok(out)
}

pub fn parse_width(s: &str) -> anyhow::Result<Width> {
    match s {
        "2" => Ok(Width::W16),
        "3" => Ok(Width::W24),
        _ => anyhow::bail!("unsupported width: {} (want 2 or 3)", s),
    }
}

pub fn parse_endian(s: &str) -> anyhow::Result<Endian> {
    match s {
        "le" => Ok(Endian::Little),
        "be" => Ok(Endian::Big),
        _ => anyhow::bail!("unsupported endian: {} (want le or be)", s),
    }
}

/// Comma-separated mask list; `none` means full width, other entries are
/// hex with optional 0x prefix.
pub fn parse_masks(s: &str) -> anyhow::Result<Vec<Option<u64>>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let t = part.trim();
        if t.is_empty() {
            continue;
        }
        if t.eq_ignore_ascii_case("none") {
            out.push(None);
        } else {
            out.push(Some(parse_hex_u64(t)?));
        }
    }
    if out.is_empty() {
        anyhow::bail!("mask list is empty");
    }
    Ok(out)
}

pub fn parse_hex_u64(s: &str) -> anyhow::Result<u64> {
    let t = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    u64::from_str_radix(t, 16).map_err(|_| anyhow::anyhow!("invalid hex value: {}", s))
}

pub fn parse_factors(s: &str) -> anyhow::Result<Vec<f64>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let t = part.trim();
        if t.is_empty() {
            continue;
        }
        let f: f64 = t
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid factor: {}", t))?;
        out.push(f);
    }
    if out.is_empty() {
        anyhow::bail!("factor list is empty");
    }
    Ok(out)
}

/// Resolve the keying flags shared by `readings` and `check`.
pub fn key_from_flags(xor_key: Option<String>, self_key: Option<usize>) -> anyhow::Result<KeySource> {
    match (xor_key, self_key) {
        (Some(_), Some(_)) => anyhow::bail!("--xor-key and --self-key are mutually exclusive"),
        (Some(k), None) => {
            let v = parse_hex_u64(&k)?;
            if v > 0xFF {
                anyhow::bail!("--xor-key must fit one byte, got 0x{:x}", v);
            }
            Ok(KeySource::Fixed(v as u8))
        }
        (None, Some(i)) => Ok(KeySource::SelfByte(i)),
        (None, None) => Ok(KeySource::None),
    }
}
