//! Fixed-width bit-pack: blocks of a single 32-bit payload word, prefixed by a
//! one-byte compact selector (an index into the width ladder, not the raw bit
//! width) naming the width used for every slot in that block. The allowed
//! widths are quantized so that the slot count per block (`32 / width`) only
//! changes at a handful of thresholds (e.g. 9 rounds up to 10, since both 3 and
//! 3 values still fit: 3*9=27 and 3*10=30 both fit in 32 bits).

use crate::bit_utils::ceiling_log2;
use crate::codec::Codec;
use crate::error::log_overflow;

const WIDTH_LADDER: [u32; 10] = [1, 2, 3, 4, 5, 6, 8, 10, 16, 32];
const SLOTS_LADDER: [usize; 10] = [32, 16, 10, 8, 6, 5, 4, 3, 2, 1];

#[inline]
const fn mask32(width: u32) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

/// Fixed-width bit-pack codec, one 32-bit payload word per block.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedWidthBitpack;

impl FixedWidthBitpack {
    pub const fn new() -> Self {
        FixedWidthBitpack
    }
}

impl Codec for FixedWidthBitpack {
    fn name(&self) -> &'static str {
        "bitpack32"
    }

    fn block_granularity(&self) -> usize {
        32
    }

    fn encode(&self, out: &mut [u8], input: &[u32]) -> usize {
        let n = input.len();
        let mut i = 0;
        let mut written = 0usize;
        while i < n {
            if written + 5 > out.len() {
                log_overflow(self.name(), input.len(), out.len());
                return 0;
            }
            let remaining = n - i;
            let (index, width, slots) = WIDTH_LADDER
                .iter()
                .zip(SLOTS_LADDER.iter())
                .enumerate()
                .find_map(|(index, (&width, &slots))| {
                    let take = slots.min(remaining);
                    let fits = input[i..i + take]
                        .iter()
                        .all(|&v| ceiling_log2(v) <= width);
                    fits.then_some((index, width, slots))
                })
                .expect("width 32 always fits any u32 value");

            let take = slots.min(remaining);
            let mut payload = 0u32;
            let mut shift = 0u32;
            for k in 0..slots {
                let value = if k < take { input[i + k] } else { 0 };
                payload |= (value & mask32(width)) << shift;
                shift += width;
            }
            out[written] = index as u8;
            out[written + 1..written + 5].copy_from_slice(&payload.to_le_bytes());
            written += 5;
            i += take;
        }
        written
    }

    fn decode(&self, out: &mut [u32], requested_count: usize, input: &[u8]) -> usize {
        let mut produced = 0usize;
        let mut read = 0usize;
        while produced < requested_count && read + 5 <= input.len() {
            let index = input[read] as usize;
            let width = WIDTH_LADDER[index];
            let slots = SLOTS_LADDER[index];
            let payload = u32::from_le_bytes(input[read + 1..read + 5].try_into().unwrap());
            let mut bits = payload;
            for k in 0..slots {
                if produced + k < out.len() {
                    out[produced + k] = bits & mask32(width);
                }
                bits >>= width;
            }
            produced += slots;
            read += 5;
        }
        produced
    }
}
