// crates/bytefit-core/src/hypothesis/space.rs

use crate::hypothesis::params::{Endian, Hypothesis, KeySource, Width};
use crate::sample::Sample;

/// Declarative bounds of the hypothesis space: the search enumerates the
/// Cartesian product of every dimension listed here.
///
/// Enumeration order is fixed (offset, width, endian, mask, key) so a run
/// is reproducible and restartable from scratch.
#[derive(Clone, Debug)]
pub struct SearchSpace {
    /// Inclusive upper bound on the window offset.
    pub max_offset: usize,
    pub widths: Vec<Width>,
    pub endians: Vec<Endian>,
    /// `None` entries mean full-width (no mask).
    pub masks: Vec<Option<u64>>,
    /// Include `KeySource::Fixed(k)` for every k in 0..=255.
    pub fixed_keys: bool,
    /// Include `KeySource::SelfByte(i)` for every i in 0..limit.
    /// 0 disables the self-byte class.
    pub self_key_limit: usize,
}

impl Default for SearchSpace {
    fn default() -> Self {
        SearchSpace {
            max_offset: 12,
            widths: vec![Width::W16, Width::W24],
            endians: vec![Endian::Little, Endian::Big],
            masks: vec![None, Some(0x7FFF), Some(0x3FFF), Some(0xFFF)],
            fixed_keys: true,
            self_key_limit: 0,
        }
    }
}

impl SearchSpace {
    /// Default bounds with the self-byte key range derived from the
    /// shortest buffer in the batch.
    pub fn for_samples(samples: &[Sample]) -> Self {
        let limit = samples.iter().map(|s| s.bytes.len()).min().unwrap_or(0);
        SearchSpace {
            self_key_limit: limit,
            ..SearchSpace::default()
        }
    }

    pub fn key_count(&self) -> u64 {
        let fixed = if self.fixed_keys { 256u64 } else { 0 };
        1 + fixed + self.self_key_limit as u64
    }

    /// Total number of hypotheses `hypotheses()` will yield.
    pub fn len(&self) -> u64 {
        (self.max_offset as u64 + 1)
            * self.widths.len() as u64
            * self.endians.len() as u64
            * self.masks.len() as u64
            * self.key_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn keys(&self) -> impl Iterator<Item = KeySource> {
        let fixed_on = self.fixed_keys;
        let self_limit = self.self_key_limit;
        std::iter::once(KeySource::None)
            .chain(
                (0u16..=255)
                    .filter(move |_| fixed_on)
                    .map(|k| KeySource::Fixed(k as u8)),
            )
            .chain((0..self_limit).map(KeySource::SelfByte))
    }

    /// Enumerate the full cross-join, in deterministic order.
    pub fn hypotheses(&self) -> impl Iterator<Item = Hypothesis> + '_ {
        (0..=self.max_offset).flat_map(move |offset| {
            self.widths.iter().copied().flat_map(move |width| {
                self.endians.iter().copied().flat_map(move |endian| {
                    self.masks.iter().copied().flat_map(move |mask| {
                        self.keys().map(move |key| Hypothesis {
                            offset,
                            width,
                            endian,
                            mask,
                            key,
                        })
                    })
                })
            })
        })
    }
}
