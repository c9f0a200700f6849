// crates/bytefit-core/src/extract.rs

use crate::hypothesis::params::{Endian, Hypothesis, KeySource, Width};

/// Extract the candidate reading for one hypothesis from one buffer.
///
/// Returns `None` when the window does not fit the buffer, or when a
/// self-byte key index lies outside it. Infeasible, not an error: the
/// search driver skips such combinations silently.
///
/// Keying XORs the buffer as a whole before windowing. Only the window
/// bytes survive the read, so the XOR is applied to those; the self-byte
/// key is taken from the untransformed buffer first.
pub fn extract(bytes: &[u8], h: &Hypothesis) -> Option<u64> {
    let w = h.width.bytes();
    if h.offset + w > bytes.len() {
        return None;
    }

    let key = match h.key {
        KeySource::None => 0u8,
        KeySource::Fixed(k) => k,
        KeySource::SelfByte(i) => *bytes.get(i)?,
    };

    let win = &bytes[h.offset..h.offset + w];
    let b0 = (win[0] ^ key) as u64;
    let b1 = (win[1] ^ key) as u64;

    let val = match (h.width, h.endian) {
        (Width::W16, Endian::Little) => b0 | (b1 << 8),
        (Width::W16, Endian::Big) => (b0 << 8) | b1,
        (Width::W24, Endian::Little) => {
            let b2 = (win[2] ^ key) as u64;
            b0 | (b1 << 8) | (b2 << 16)
        }
        (Width::W24, Endian::Big) => {
            let b2 = (win[2] ^ key) as u64;
            (b0 << 16) | (b1 << 8) | b2
        }
    };

    Some(match h.mask {
        Some(m) => val & m,
        None => val,
    })
}
