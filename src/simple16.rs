//! Simple-16: sixteen selectors packing a 32-bit word as `(payload << 4) |
//! selector`. Selectors 1, 2, 3, 5, 6, 8, 9, 10, 11, 13 are heterogeneous — they
//! pack two or three differently-sized runs of values into the same word. The
//! encoder is greedy: it tries selectors in ascending index order and takes the
//! first that fits the upcoming integers.

use crate::bit_utils::ceiling_log2;
use crate::codec::Codec;
use crate::error::{log_out_of_range, log_overflow};

/// Per-selector run table: `(bit width, value count)` pairs in packing order
/// (lowest bits first). Every selector's runs sum to exactly 28 payload bits.
const RUNS: [&[(u32, usize)]; 16] = [
    &[(1, 28)],
    &[(2, 7), (1, 14)],
    &[(1, 7), (2, 7), (1, 7)],
    &[(1, 14), (2, 7)],
    &[(2, 14)],
    &[(4, 1), (3, 8)],
    &[(3, 1), (4, 4), (3, 3)],
    &[(4, 7)],
    &[(5, 4), (4, 2)],
    &[(4, 2), (5, 4)],
    &[(6, 3), (5, 2)],
    &[(5, 2), (6, 3)],
    &[(7, 4)],
    &[(10, 1), (9, 2)],
    &[(14, 2)],
    &[(28, 1)],
];

/// Total integers packed by each selector (sum of that selector's run counts).
const TOTAL_COUNT: [usize; 16] = [28, 21, 21, 21, 14, 9, 8, 7, 6, 6, 5, 5, 4, 3, 2, 1];

#[inline]
const fn mask32(width: u32) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

/// Simple-16 codec with greedy selector assignment.
#[derive(Debug, Default, Clone, Copy)]
pub struct Simple16;

impl Simple16 {
    pub const fn new() -> Self {
        Simple16
    }

    fn try_pack(sel: usize, values: &[u32]) -> Option<u32> {
        let mut payload = 0u32;
        let mut shift = 0u32;
        let mut pos = 0usize;
        for &(width, count) in RUNS[sel] {
            for &value in &values[pos..pos + count] {
                if ceiling_log2(value) > width {
                    return None;
                }
                payload |= (value & mask32(width)) << shift;
                shift += width;
            }
            pos += count;
        }
        Some(payload)
    }
}

impl Codec for Simple16 {
    fn name(&self) -> &'static str {
        "simple16"
    }

    fn block_granularity(&self) -> usize {
        28
    }

    fn requires_nonempty_input(&self) -> bool {
        true
    }

    fn first_out_of_range(&self, input: &[u32]) -> Option<u32> {
        input.iter().copied().find(|&v| ceiling_log2(v) > 28)
    }

    fn encode(&self, out: &mut [u8], input: &[u32]) -> usize {
        if input.is_empty() {
            return 0;
        }
        for &value in input {
            if ceiling_log2(value) > 28 {
                log_out_of_range(self.name(), value);
                return 0;
            }
        }

        let n = input.len();
        let mut out_words = 0usize;
        let mut i = 0;
        while i < n {
            if (out_words + 1) * 4 > out.len() {
                log_overflow(self.name(), input.len(), out.len());
                return 0;
            }
            let mut packed = None;
            let mut chosen_sel = 0usize;
            for sel in 0..16 {
                let total = TOTAL_COUNT[sel];
                if i + total > n {
                    continue;
                }
                if let Some(payload) = Self::try_pack(sel, &input[i..i + total]) {
                    packed = Some(payload);
                    chosen_sel = sel;
                    break;
                }
            }
            // Selector 15 (width 28, count 1) always matches a single in-range
            // value, so a greedy scan never falls through empty-handed here.
            let payload = packed.expect("selector 15 always fits a single in-range value");
            let word = (payload << 4) | chosen_sel as u32;
            out[out_words * 4..out_words * 4 + 4].copy_from_slice(&word.to_le_bytes());
            out_words += 1;
            i += TOTAL_COUNT[chosen_sel];
        }
        out_words * 4
    }

    fn decode(&self, out: &mut [u32], requested_count: usize, input: &[u8]) -> usize {
        let mut produced = 0usize;
        let mut word_index = 0usize;
        while produced < requested_count && (word_index + 1) * 4 <= input.len() {
            let word = u32::from_le_bytes(
                input[word_index * 4..word_index * 4 + 4]
                    .try_into()
                    .unwrap(),
            );
            let sel = (word & 0xF) as usize;
            let mut payload = word >> 4;
            let mut slot = produced;
            for &(width, count) in RUNS[sel] {
                for _ in 0..count {
                    if slot < out.len() {
                        out[slot] = payload & mask32(width);
                    }
                    payload >>= width;
                    slot += 1;
                }
            }
            produced += TOTAL_COUNT[sel];
            word_index += 1;
        }
        produced
    }
}
