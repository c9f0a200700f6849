// crates/bytefit-core/src/hypothesis/format.rs

use crate::hypothesis::params::{Endian, Hypothesis, KeySource};

const MAGIC: &[u8; 4] = b"BFH1";

/// Canonical byte encoding of a hypothesis (little-endian).
/// Layout:
/// MAGIC[4]
/// offset:u32
/// width:u8        (window bytes: 2 or 3)
/// endian:u8       (0 = little, 1 = big)
/// mask_set:u8  mask:u64
/// key_tag:u8      (0 = none, 1 = fixed, 2 = self-byte)
/// key_arg:u32     (fixed key value or self-byte index; 0 for none)
///
/// Exists only as the stable input to `hypothesis_id_16`; nothing decodes
/// it back.
pub fn encode(h: &Hypothesis) -> Vec<u8> {
    let mut b = Vec::with_capacity(24);
    b.extend_from_slice(MAGIC);

    b.extend_from_slice(&(h.offset as u32).to_le_bytes());
    b.push(h.width.bytes() as u8);
    b.push(match h.endian {
        Endian::Little => 0,
        Endian::Big => 1,
    });

    match h.mask {
        Some(m) => {
            b.push(1);
            b.extend_from_slice(&m.to_le_bytes());
        }
        None => {
            b.push(0);
            b.extend_from_slice(&0u64.to_le_bytes());
        }
    }

    let (tag, arg): (u8, u32) = match h.key {
        KeySource::None => (0, 0),
        KeySource::Fixed(k) => (1, k as u32),
        KeySource::SelfByte(i) => (2, i as u32),
    };
    b.push(tag);
    b.extend_from_slice(&arg.to_le_bytes());

    b
}

/// A stable hypothesis identifier: blake3 of the canonical encoding,
/// truncated to 16 bytes.
pub fn hypothesis_id_16(h: &Hypothesis) -> [u8; 16] {
    blake3_16(&encode(h))
}

pub fn hypothesis_id_hex(h: &Hypothesis) -> String {
    hex16(&hypothesis_id_16(h))
}

fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let hash = blake3::hash(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

fn hex16(id: &[u8; 16]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(32);
    for &b in id {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}
