// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::OsRng, seq::SliceRandom};

use dnalab::composition::codon_usage;
use dnalab::{orf, DnaSequence, Nucleotide};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("orf scanning");
    for dna_len in [1_000usize, 100_000] {
        let dna: DnaSequence = (0..dna_len)
            .map(|_| *Nucleotide::ALL.choose(&mut OsRng).unwrap())
            .collect();
        let dna_len_desc = format!("{dna_len} bp");

        group.throughput(Throughput::Elements(dna_len as u64));
        group.bench_with_input(
            BenchmarkId::new("six-frame", &dna_len_desc),
            &dna,
            |b, dna| b.iter(|| black_box(orf::find_all_frames(dna))),
        );
        group.bench_with_input(
            BenchmarkId::new("longest", &dna_len_desc),
            &dna,
            |b, dna| b.iter(|| black_box(orf::scan_all_frames(dna))),
        );
        group.bench_with_input(
            BenchmarkId::new("codon-usage", &dna_len_desc),
            &dna,
            |b, dna| b.iter(|| black_box(codon_usage(dna))),
        );
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
