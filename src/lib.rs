/*! # Postings Codecs
A library of integer compression codecs for storing inverted-index postings
lists: document-identifier lists, term-frequency lists, and impact-ordered
postings segments, all sequences of unsigned 32-bit integers.

Every codec implements the [`Codec`] trait: a common `encode`/`decode`
contract where a return value of `0` from `encode` signals the output buffer
was too small (or, for codecs that require non-empty input, that the input was
empty). [`Codec::encode_checked`] wraps this in an ergonomic `Result` using
[`CodecError`] for callers that would rather not inspect a sentinel.

Decoded integer streams are turned into accumulator updates by one of three
adapters (see the [`adapters`] module): D0 (absolute document ids), D1
(d-gaps, integrated with a running sum), and NONE (forwards directly to a
codec capable of decoding straight into the accumulator).

## Example

```
use postings_codec::vbyte::VariableByte;
use postings_codec::codec::Codec;

let codec = VariableByte::new();
let values = [1u32, 128, 16384];
let mut buf = [0u8; 16];
let used = codec.encode(&mut buf, &values);

let mut decoded = [0u32; 3];
let produced = codec.decode(&mut decoded, values.len(), &buf[..used]);
assert_eq!(produced, 3);
assert_eq!(decoded, values);
```
*/

pub mod adapters;
pub mod bit_utils;
pub mod bitpack;
pub mod bitstream;
pub mod codec;
pub mod elias_delta;
pub mod elias_gamma;
pub mod error;
pub mod identity;
pub mod impact;
pub mod registry;
pub mod simple16;
pub mod simple8b;
pub mod simple9;
pub mod stream_vbyte;
pub mod vbyte;

pub use adapters::{Accumulator, ControlFlow, DecoderD0, DecoderD1, DecoderNone, DispatchingCodec};
pub use bitpack::FixedWidthBitpack;
pub use codec::Codec;
pub use elias_delta::EliasDelta;
pub use elias_gamma::EliasGamma;
pub use error::CodecError;
pub use identity::NoCompress;
pub use impact::{ImpactSegment, MAX_IMPACT_SCORE, MAX_IMPACT_SEGMENTS};
pub use registry::{find_by_flag, find_by_name, CodecDescriptor, CODECS};
pub use simple16::Simple16;
pub use simple8b::Simple8b;
pub use simple9::Simple9;
pub use stream_vbyte::StreamVbyte;
pub use vbyte::VariableByte;
