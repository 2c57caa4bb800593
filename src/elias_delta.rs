//! Elias delta: `n = floor_log2(v) + 1` written as an Elias-gamma code, followed by
//! the low `n-1` bits of `v` (its top bit is implicit, exactly as gamma's terminator
//! anchors its own payload). Values must be >= 1.

use crate::bit_utils::floor_log2;
use crate::bitstream::{BitReader, BitWriter};
use crate::codec::Codec;
use crate::elias_gamma::{read_gamma, write_gamma};
use crate::error::{log_out_of_range, log_overflow};

/// Elias delta codec.
#[derive(Debug, Default, Clone, Copy)]
pub struct EliasDelta;

impl EliasDelta {
    pub const fn new() -> Self {
        EliasDelta
    }
}

impl Codec for EliasDelta {
    fn name(&self) -> &'static str {
        "elias_delta"
    }

    fn block_granularity(&self) -> usize {
        1
    }

    fn encode(&self, out: &mut [u8], input: &[u32]) -> usize {
        if input.is_empty() {
            return 0;
        }
        if let Some(&zero) = input.iter().find(|&&v| v == 0) {
            log_out_of_range(self.name(), zero);
            return 0;
        }
        let mut writer = BitWriter::new(out);
        for &value in input {
            let n = floor_log2(value) + 1;
            if write_gamma(&mut writer, n).is_err() {
                log_overflow(self.name(), input.len(), out.len());
                return 0;
            }
            if writer.write_bits(value as u64, n - 1).is_err() {
                log_overflow(self.name(), input.len(), out.len());
                return 0;
            }
        }
        writer.bytes_used()
    }

    fn decode(&self, out: &mut [u32], requested_count: usize, input: &[u8]) -> usize {
        let mut reader = BitReader::new(input);
        for slot in out.iter_mut().take(requested_count) {
            let n = read_gamma(&mut reader);
            let payload = reader.read_bits(n - 1) as u32;
            *slot = (1u32 << (n - 1)) | payload;
        }
        requested_count
    }
}
