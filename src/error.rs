use thiserror::Error;

/// Ergonomic, `Result`-returning view of the zero-sentinel contract each codec's raw
/// `encode`/`decode` pair exposes. The raw methods remain the canonical contract;
/// this type exists only so callers that prefer `?` don't have to special-case `0`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The encoded form would not fit in the supplied output buffer.
    #[error("encoded output does not fit in the supplied buffer")]
    OutputOverflow,
    /// An input integer's bit width exceeds what this codec's largest selector can hold.
    #[error("value {value} exceeds this codec's representable range")]
    OutOfRange { value: u32 },
    /// The codec requires at least one input integer (the Simple family).
    #[error("this codec does not accept empty input")]
    EmptyInput,
}

pub(crate) fn log_overflow(codec: &str, in_count: usize, out_capacity_bytes: usize) {
    log::debug!(
        "{codec}: encode overflow, {in_count} integers did not fit in {out_capacity_bytes} bytes"
    );
}

pub(crate) fn log_out_of_range(codec: &str, value: u32) {
    log::warn!("{codec}: value {value} exceeds codec range, refusing to encode");
}
