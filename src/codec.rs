use crate::error::CodecError;

/// The contract shared by every concrete codec in this crate.
///
/// `encode`/`decode` are the canonical, allocation-free operations: `encode` returns
/// the number of bytes written, or 0 on overflow or invalid input; `decode` has no
/// error channel at all and trusts its input came from a prior `encode` of the same
/// or a longer prefix. `encode_checked` is an ergonomic wrapper with a default
/// body built on top of the raw pair, provided for callers who prefer `Result`
/// over sentinel checks; it never changes what bytes are written.
pub trait Codec {
    /// Human-readable name, used by the registry and by log messages.
    fn name(&self) -> &'static str;

    /// The unit (in integers) by which `decode` may legally write more than
    /// `requested_count` values, e.g. 4 for a codec that only ever decodes
    /// whole groups.
    fn block_granularity(&self) -> usize;

    /// Encode `input` into `out`, returning the number of bytes written, or 0 if the
    /// encoded form would not fit in `out` or `input` contains an out-of-range value.
    /// Never reads beyond `input`; never writes beyond `out`.
    fn encode(&self, out: &mut [u8], input: &[u32]) -> usize;

    /// Decode exactly enough of `input` to produce at least `requested_count`
    /// integers into `out`, and return how many were actually written (which may
    /// exceed `requested_count` by up to `block_granularity()`). `out` must have
    /// room for `requested_count + block_granularity()` elements.
    fn decode(&self, out: &mut [u32], requested_count: usize, input: &[u8]) -> usize;

    /// `Result`-returning wrapper around `encode`. Does not allocate or re-encode;
    /// it is a thin translation of the sentinel return value, distinguishing
    /// `OutOfRange` from `OutputOverflow` via `first_out_of_range` so a caller
    /// that gets `Err` does not have to guess which of the two `encode` refused for.
    fn encode_checked(&self, out: &mut [u8], input: &[u32]) -> Result<usize, CodecError> {
        if input.is_empty() && self.requires_nonempty_input() {
            return Err(CodecError::EmptyInput);
        }
        if let Some(value) = self.first_out_of_range(input) {
            return Err(CodecError::OutOfRange { value });
        }
        match self.encode(out, input) {
            0 if !input.is_empty() => Err(CodecError::OutputOverflow),
            0 => Ok(0),
            used => Ok(used),
        }
    }

    /// Whether this codec refuses empty input with the same `0` sentinel used for
    /// overflow (true for the Simple family, whose word-based layouts have no
    /// representation for zero elements).
    fn requires_nonempty_input(&self) -> bool {
        false
    }

    /// The first value in `input` (if any) whose bit width exceeds what this
    /// codec's largest selector can represent, used by `encode_checked` to report
    /// `CodecError::OutOfRange` instead of collapsing every failure into
    /// `OutputOverflow`. Codecs with no such cap in this 32-bit integer profile
    /// (variable-byte, stream-vbyte, the Elias codecs, Simple-8b, bitpack — see
    /// their modules for why) keep the default of `None`.
    fn first_out_of_range(&self, _input: &[u32]) -> Option<u32> {
        None
    }
}
