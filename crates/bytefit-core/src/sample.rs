use crate::error::{BfError, Result};

/// One observation: a captured byte buffer and the real-world value it is
/// known to encode. Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub bytes: Vec<u8>,
    pub target: f64,
    pub label: String,
}

impl Sample {
    pub fn new(bytes: Vec<u8>, target: f64, label: impl Into<String>) -> Self {
        Sample {
            bytes,
            target,
            label: label.into(),
        }
    }

    pub fn from_hex(hex: &str, target: f64, label: impl Into<String>) -> Result<Self> {
        Ok(Sample::new(decode_hex(hex)?, target, label))
    }
}

/// Decode a hex string into bytes. Fails fast: buffers are supplied as
/// literals, so a malformed one is caller error, not data to recover from.
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    if s.is_empty() {
        return Err(BfError::Hex("empty hex string".into()));
    }
    if s.len() % 2 != 0 {
        return Err(BfError::Hex(format!(
            "odd-length hex string ({} chars): {}",
            s.len(),
            s
        )));
    }

    let mut out = Vec::with_capacity(s.len() / 2);
    let b = s.as_bytes();
    for i in (0..b.len()).step_by(2) {
        let hi = hex_nibble(b[i])?;
        let lo = hex_nibble(b[i + 1])?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

fn hex_nibble(c: u8) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(BfError::Hex(format!("invalid hex digit: {:?}", c as char))),
    }
}
