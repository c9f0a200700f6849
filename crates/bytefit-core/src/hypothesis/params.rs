// crates/bytefit-core/src/hypothesis/params.rs

use std::fmt;

/// Integer width of the extraction window, in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    /// 16-bit unsigned read.
    W16,
    /// 24-bit unsigned read, composed byte-by-byte (no native type assumed).
    W24,
}

impl Width {
    pub fn bytes(self) -> usize {
        match self {
            Width::W16 => 2,
            Width::W24 => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

/// XOR keying applied to the buffer before windowing.
///
/// `SelfByte` reads the key from the same buffer being decoded; it is kept
/// as one explicit variant rather than a generalized keying scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySource {
    None,
    Fixed(u8),
    SelfByte(usize),
}

/// One candidate combination of search parameters. Instantiated per search
/// iteration; carries no state of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hypothesis {
    pub offset: usize,
    pub width: Width,
    pub endian: Endian,
    /// Bitwise AND applied after extraction. `None` keeps the full width.
    pub mask: Option<u64>,
    pub key: KeySource,
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::W16 => write!(f, "2"),
            Width::W24 => write!(f, "3"),
        }
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endian::Little => write!(f, "le"),
            Endian::Big => write!(f, "be"),
        }
    }
}

impl fmt::Display for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySource::None => write!(f, "none"),
            KeySource::Fixed(k) => write!(f, "xor:0x{:02x}", k),
            KeySource::SelfByte(i) => write!(f, "selfbyte[{}]", i),
        }
    }
}

impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "offset={} width={} endian={} mask={} key={}",
            self.offset,
            self.width,
            self.endian,
            match self.mask {
                Some(m) => format!("0x{:x}", m),
                None => "none".to_string(),
            },
            self.key
        )
    }
}
