//! Stream-vbyte: a selector-byte stream followed by a data-byte stream, four
//! integers per selector byte (two bits per integer encoding its byte length).
//!
//! This is the scalar-only rendition of the codec: the selector derivation and
//! per-integer byte count are the SIMD design's, but the decode inner loop is a
//! plain byte copy rather than a 256-entry shuffle-table permute. Groups of fewer
//! than four integers are padded with zeros up to a full group before encoding, so
//! `ceil(N/4)` selector bytes is always exact regardless of `N % 4`.

use crate::codec::Codec;
use crate::error::log_overflow;

const TAG_LEN: [usize; 4] = [1, 2, 3, 4];

/// Map a single value to its two-bit tag and the byte length that tag selects for.
#[inline]
const fn tag_value(value: u32) -> (u8, usize) {
    let tag = if value.leading_zeros() / 8 >= 3 {
        0
    } else {
        3 - value.leading_zeros() / 8
    };
    (tag as u8, TAG_LEN[tag as usize])
}

#[inline]
const fn data_len(tag: u8) -> usize {
    TAG_LEN[tag as usize]
}

/// Stream-vbyte codec, scalar-only (see module docs for the SIMD/scalar split).
#[derive(Debug, Default, Clone, Copy)]
pub struct StreamVbyte;

impl StreamVbyte {
    pub const fn new() -> Self {
        StreamVbyte
    }

    #[inline]
    fn encode_group(group: &[u32; 4], data: &mut [u8]) -> (u8, usize) {
        let mut tag = 0u8;
        let mut written = 0usize;
        for (i, &value) in group.iter().enumerate() {
            let (vtag, len) = tag_value(value);
            tag |= vtag << (i * 2);
            data[written..written + len].copy_from_slice(&value.to_le_bytes()[..len]);
            written += len;
        }
        (tag, written)
    }

    #[inline]
    fn decode_group(tag: u8, data: &[u8]) -> ([u32; 4], usize) {
        let mut group = [0u32; 4];
        let mut read = 0usize;
        for (i, slot) in group.iter_mut().enumerate() {
            let vtag = (tag >> (i * 2)) & 0x3;
            let len = data_len(vtag);
            let mut bytes = [0u8; 4];
            bytes[..len].copy_from_slice(&data[read..read + len]);
            *slot = u32::from_le_bytes(bytes);
            read += len;
        }
        (group, read)
    }
}

impl Codec for StreamVbyte {
    fn name(&self) -> &'static str {
        "stream_vbyte"
    }

    fn block_granularity(&self) -> usize {
        4
    }

    fn encode(&self, out: &mut [u8], input: &[u32]) -> usize {
        if input.is_empty() {
            return 0;
        }
        let num_groups = input.len().div_ceil(4);
        if num_groups > out.len() {
            log_overflow(self.name(), input.len(), out.len());
            return 0;
        }
        let (tags, data) = out.split_at_mut(num_groups);

        let mut written = 0usize;
        for (group_index, chunk) in input.chunks(4).enumerate() {
            let mut padded = [0u32; 4];
            padded[..chunk.len()].copy_from_slice(chunk);
            let group_len: usize = padded.iter().map(|&v| tag_value(v).1).sum();
            if written + group_len > data.len() {
                log_overflow(self.name(), input.len(), out.len());
                return 0;
            }
            let (tag, len) = Self::encode_group(&padded, &mut data[written..]);
            tags[group_index] = tag;
            written += len;
        }
        num_groups + written
    }

    fn decode(&self, out: &mut [u32], requested_count: usize, input: &[u8]) -> usize {
        if requested_count == 0 {
            return 0;
        }
        let num_groups = requested_count.div_ceil(4);
        let tags = &input[..num_groups];
        let data = &input[num_groups..];

        let mut read = 0usize;
        let mut produced = 0usize;
        for &tag in tags {
            let (group, len) = Self::decode_group(tag, &data[read..]);
            read += len;
            out[produced..produced + 4].copy_from_slice(&group);
            produced += 4;
        }
        produced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_literal_values() {
        let codec = StreamVbyte::new();
        let input = [0x01u32, 0x0100, 0x010000, 0x01000000];
        let mut buf = [0u8; 1 + 10];
        let used = codec.encode(&mut buf, &input);
        assert_eq!(buf[0], 0xE4);
        assert_eq!(
            &buf[1..used],
            &[0x01, 0x00, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01]
        );

        let mut decoded = [0u32; 4];
        let produced = codec.decode(&mut decoded, 4, &buf[..used]);
        assert_eq!(produced, 4);
        assert_eq!(decoded, input);
    }

    #[test]
    fn round_trip_non_multiple_of_four() {
        let codec = StreamVbyte::new();
        let input = [5u32, 70000, 9];
        let mut buf = [0u8; 1 + 16];
        let used = codec.encode(&mut buf, &input);
        assert!(used > 0);
        let mut decoded = [0u32; 3 + 4]; // requested + block slack
        let produced = codec.decode(&mut decoded, 3, &buf[..used]);
        assert!(produced >= 3);
        assert_eq!(&decoded[..3], &input);
    }

    #[test]
    fn empty_input_is_zero_bytes() {
        let codec = StreamVbyte::new();
        let mut buf = [0u8; 4];
        assert_eq!(codec.encode(&mut buf, &[]), 0);
    }

    #[test]
    fn overflow_returns_zero() {
        let codec = StreamVbyte::new();
        let input = [1u32, 2, 3, 4, 5];
        let mut tiny = [0u8; 2];
        assert_eq!(codec.encode(&mut tiny, &input), 0);
    }
}
