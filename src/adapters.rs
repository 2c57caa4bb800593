//! Decode adapters D0, D1 and NONE: the three ways a codec's decoded integer
//! stream is turned into accumulator updates.

use crate::codec::Codec;

/// Whether an adapter's dispatch loop should keep going. This is the explicit
/// return channel standing in for the original's exception-based early return
/// from deep call stacks (see the design notes on the `Done` exception type).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Stop,
}

/// The query-time capability that receives decoded postings.
pub trait Accumulator {
    fn add_rsv(&mut self, document_id: u32, impact: u32) -> ControlFlow;
}

/// Adapter D0: the codec's output is already a list of absolute document ids.
/// Decodes into a reusable buffer, then dispatches in order.
pub struct DecoderD0 {
    buffer: Vec<u32>,
}

impl DecoderD0 {
    pub fn new(max_integers: usize) -> Self {
        DecoderD0 {
            buffer: vec![0; max_integers],
        }
    }

    pub fn decode_and_process<C: Codec + ?Sized, A: Accumulator>(
        &mut self,
        codec: &C,
        requested_count: usize,
        input: &[u8],
        impact: u32,
        accumulator: &mut A,
    ) -> ControlFlow {
        let slack = requested_count + codec.block_granularity();
        if self.buffer.len() < slack {
            self.buffer.resize(slack, 0);
        }
        let produced = codec.decode(&mut self.buffer, requested_count, input);
        for &document_id in &self.buffer[..requested_count.min(produced)] {
            if accumulator.add_rsv(document_id, impact) == ControlFlow::Stop {
                return ControlFlow::Stop;
            }
        }
        ControlFlow::Continue
    }
}

/// Adapter D1: the codec's output is a list of d-gaps; integrate a running sum,
/// starting at 0, before dispatching each value.
pub struct DecoderD1 {
    buffer: Vec<u32>,
}

impl DecoderD1 {
    pub fn new(max_integers: usize) -> Self {
        DecoderD1 {
            buffer: vec![0; max_integers],
        }
    }

    pub fn decode_and_process<C: Codec + ?Sized, A: Accumulator>(
        &mut self,
        codec: &C,
        requested_count: usize,
        input: &[u8],
        impact: u32,
        accumulator: &mut A,
    ) -> ControlFlow {
        let slack = requested_count + codec.block_granularity();
        if self.buffer.len() < slack {
            self.buffer.resize(slack, 0);
        }
        let produced = codec.decode(&mut self.buffer, requested_count, input);
        let mut cumulative = 0u32;
        for &gap in &self.buffer[..requested_count.min(produced)] {
            cumulative = cumulative.wrapping_add(gap);
            if accumulator.add_rsv(cumulative, impact) == ControlFlow::Stop {
                return ControlFlow::Stop;
            }
        }
        ControlFlow::Continue
    }
}

/// A codec capable of decoding straight into an accumulator without an
/// intermediate owned buffer. Every `Codec` gets a working default; a SIMD-
/// oriented codec could override this to scatter decoded values directly, which
/// is the capability the NONE adapter forwards to.
pub trait DispatchingCodec: Codec {
    fn decode_and_dispatch<A: Accumulator>(
        &self,
        requested_count: usize,
        input: &[u8],
        impact: u32,
        accumulator: &mut A,
    ) -> ControlFlow {
        let mut buffer = vec![0u32; requested_count + self.block_granularity()];
        let produced = self.decode(&mut buffer, requested_count, input);
        for &document_id in &buffer[..requested_count.min(produced)] {
            if accumulator.add_rsv(document_id, impact) == ControlFlow::Stop {
                return ControlFlow::Stop;
            }
        }
        ControlFlow::Continue
    }
}

impl<T: Codec + ?Sized> DispatchingCodec for T {}

/// Adapter NONE: forwards directly to the codec's own decode-and-dispatch
/// capability. Carries a `max_integers` parameter for API symmetry with D0/D1
/// even though it owns no buffer of its own.
pub struct DecoderNone;

impl DecoderNone {
    pub fn new(_max_integers: usize) -> Self {
        DecoderNone
    }

    pub fn decode_and_process<C: DispatchingCodec + ?Sized, A: Accumulator>(
        &mut self,
        codec: &C,
        requested_count: usize,
        input: &[u8],
        impact: u32,
        accumulator: &mut A,
    ) -> ControlFlow {
        codec.decode_and_dispatch(requested_count, input, impact, accumulator)
    }
}
