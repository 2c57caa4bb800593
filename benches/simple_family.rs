use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use postings_codec::codec::Codec;
use postings_codec::simple16::Simple16;
use postings_codec::simple8b::Simple8b;
use postings_codec::simple9::Simple9;
use rand::distributions::Uniform;
use rand::prelude::*;

fn generate_array(len: usize, max_bits: u32) -> Vec<u32> {
    let seed: &[u8; 32] = &[0xcdu8; 32];
    let mut rng = StdRng::from_seed(*seed);
    let max_val = if max_bits >= 32 {
        u32::MAX
    } else {
        (1u32 << max_bits) - 1
    };
    let between = Uniform::from(0..=max_val);
    (0..len).map(|_| between.sample(&mut rng)).collect()
}

fn bm_codec<C: Codec>(name: &str, codec: &C, c: &mut Criterion) {
    const NUM_ELEM: usize = 1024;
    let mut bm_group = c.benchmark_group(name);
    bm_group.throughput(Throughput::Elements(NUM_ELEM as u64));
    for max_bits in [3, 28] {
        let input_values = generate_array(NUM_ELEM, max_bits);
        bm_group.bench_with_input(
            BenchmarkId::new("encode", max_bits),
            &input_values,
            |b, v| {
                let mut buf = vec![0u8; v.len() * 8 + 64];
                b.iter(|| assert!(codec.encode(&mut buf, v) > 0))
            },
        );

        let mut buf = vec![0u8; input_values.len() * 8 + 64];
        let used = codec.encode(&mut buf, &input_values);
        buf.truncate(used);
        bm_group.bench_with_input(BenchmarkId::new("decode", max_bits), &buf, |b, encoded| {
            let mut out = vec![0u32; NUM_ELEM + codec.block_granularity()];
            b.iter(|| assert!(codec.decode(&mut out, NUM_ELEM, encoded) > 0))
        });
    }
    bm_group.finish();
}

fn bench_simple9(c: &mut Criterion) {
    bm_codec("simple9", &Simple9::new(), c);
}

fn bench_simple16(c: &mut Criterion) {
    bm_codec("simple16", &Simple16::new(), c);
}

fn bench_simple8b(c: &mut Criterion) {
    bm_codec("simple8b", &Simple8b::new(), c);
}

criterion_group!(benches, bench_simple9, bench_simple16, bench_simple8b);
criterion_main!(benches);
