//! The "none" codec: copies integers through as raw little-endian 4-byte words.
//! Present in the registry alongside the real codecs because the CLI-flag table
//! this crate's registry mirrors (`compress_integer_all.cpp`) carries one too,
//! used as a baseline to compare compression ratios against.

use crate::codec::Codec;
use crate::error::log_overflow;

#[derive(Debug, Default, Clone, Copy)]
pub struct NoCompress;

impl NoCompress {
    pub const fn new() -> Self {
        NoCompress
    }
}

impl Codec for NoCompress {
    fn name(&self) -> &'static str {
        "none"
    }

    fn block_granularity(&self) -> usize {
        1
    }

    fn encode(&self, out: &mut [u8], input: &[u32]) -> usize {
        let needed = input.len() * 4;
        if needed > out.len() {
            log_overflow(self.name(), input.len(), out.len());
            return 0;
        }
        for (slot, &value) in out.chunks_exact_mut(4).zip(input.iter()) {
            slot.copy_from_slice(&value.to_le_bytes());
        }
        needed
    }

    fn decode(&self, out: &mut [u32], requested_count: usize, input: &[u8]) -> usize {
        let available = input.len() / 4;
        let produced = requested_count.min(available).min(out.len());
        for (slot, bytes) in out[..produced].iter_mut().zip(input.chunks_exact(4)) {
            *slot = u32::from_le_bytes(bytes.try_into().unwrap());
        }
        produced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let codec = NoCompress::new();
        let input = [1u32, 2, 3, 4];
        let mut buf = [0u8; 16];
        let used = codec.encode(&mut buf, &input);
        assert_eq!(used, 16);
        let mut decoded = [0u32; 4];
        let produced = codec.decode(&mut decoded, 4, &buf);
        assert_eq!(produced, 4);
        assert_eq!(decoded, input);
    }

    #[test]
    fn overflow_returns_zero() {
        let codec = NoCompress::new();
        let mut tiny = [0u8; 3];
        assert_eq!(codec.encode(&mut tiny, &[1]), 0);
    }
}
