use clap::Args;

use bytefit_core::extract::extract;
use bytefit_core::hypothesis::params::Hypothesis;
use bytefit_core::sample::decode_hex;

use super::util::{key_from_flags, parse_endian, parse_hex_u64, parse_width};

#[derive(Args, Debug)]
pub struct ReadingsArgs {
    /// Raw buffer as hex; repeatable.
    #[arg(long = "hex", required = true)]
    pub buffers: Vec<String>,

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
}

pub fn run(args: ReadingsArgs) -> anyhow::Result<()> {
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

    eprintln!("--- readings ---");
    eprintln!("hypothesis      = {}", h);

    for (i, hex) in args.buffers.iter().enumerate() {
        let bytes = decode_hex(hex).map_err(|e| anyhow::anyhow!("{e}"))?;
        match extract(&bytes, &h) {
            Some(r) => println!("#{} len={} reading={} (0x{:x})", i + 1, bytes.len(), r, r),
            None => println!("#{} len={} infeasible", i + 1, bytes.len()),
        }
    }

    Ok(())
}
