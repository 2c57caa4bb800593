//! The codec registry: a static table pairing each codec with the command-line
//! style flags used to select it, mirroring `compress_integer_all.cpp`'s
//! flag-to-codec enumeration.

use crate::bitpack::FixedWidthBitpack;
use crate::codec::Codec;
use crate::elias_delta::EliasDelta;
use crate::elias_gamma::EliasGamma;
use crate::identity::NoCompress;
use crate::simple16::Simple16;
use crate::simple8b::Simple8b;
use crate::simple9::Simple9;
use crate::stream_vbyte::StreamVbyte;
use crate::vbyte::VariableByte;

/// One entry in the codec registry: a codec's flags, human-readable name, and
/// the codec instance itself.
pub struct CodecDescriptor {
    pub short_flag: &'static str,
    pub long_flag: &'static str,
    pub human_name: &'static str,
    pub codec: &'static dyn Codec,
    pub block_granularity: usize,
}

static NONE: NoCompress = NoCompress::new();
static VBYTE: VariableByte = VariableByte::new();
static STREAM_VBYTE: StreamVbyte = StreamVbyte::new();
static GAMMA: EliasGamma = EliasGamma::new();
static DELTA: EliasDelta = EliasDelta::new();
static S9: Simple9 = Simple9::new();
static S16: Simple16 = Simple16::new();
static S8B: Simple8b = Simple8b::new();
static BITPACK: FixedWidthBitpack = FixedWidthBitpack::new();

/// All codecs this crate implements, in a fixed, stable order.
pub static CODECS: &[CodecDescriptor] = &[
    CodecDescriptor {
        short_flag: "-cn",
        long_flag: "--compress_none",
        human_name: "none",
        codec: &NONE,
        block_granularity: 1,
    },
    CodecDescriptor {
        short_flag: "-cv",
        long_flag: "--compress_variable_byte",
        human_name: "variable byte",
        codec: &VBYTE,
        block_granularity: 1,
    },
    CodecDescriptor {
        short_flag: "-csv",
        long_flag: "--compress_stream_vbyte",
        human_name: "stream vbyte",
        codec: &STREAM_VBYTE,
        block_granularity: 4,
    },
    CodecDescriptor {
        short_flag: "-ceg",
        long_flag: "--compress_elias_gamma",
        human_name: "elias gamma",
        codec: &GAMMA,
        block_granularity: 1,
    },
    CodecDescriptor {
        short_flag: "-ced",
        long_flag: "--compress_elias_delta",
        human_name: "elias delta",
        codec: &DELTA,
        block_granularity: 1,
    },
    CodecDescriptor {
        short_flag: "-c9",
        long_flag: "--compress_simple9",
        human_name: "simple-9",
        codec: &S9,
        block_granularity: 28,
    },
    CodecDescriptor {
        short_flag: "-c16",
        long_flag: "--compress_simple16",
        human_name: "simple-16",
        codec: &S16,
        block_granularity: 28,
    },
    CodecDescriptor {
        short_flag: "-c8b",
        long_flag: "--compress_simple8b",
        human_name: "simple-8b",
        codec: &S8B,
        block_granularity: 60,
    },
    CodecDescriptor {
        short_flag: "-cbp",
        long_flag: "--compress_bitpack",
        human_name: "fixed-width bitpack",
        codec: &BITPACK,
        block_granularity: 32,
    },
];

/// Look up a codec by either its short or long command-line flag.
pub fn find_by_flag(flag: &str) -> Option<&'static CodecDescriptor> {
    CODECS
        .iter()
        .find(|entry| entry.short_flag == flag || entry.long_flag == flag)
}

/// Look up a codec by its human-readable name.
pub fn find_by_name(name: &str) -> Option<&'static CodecDescriptor> {
    CODECS.iter().find(|entry| entry.human_name == name)
}
