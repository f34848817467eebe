//! FFT path benchmarks
//!
//! ```bash
//! cargo bench -p adc-quality-core --bench fft
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::f64::consts::PI;

use adc_quality::adc::SAMPLE_ADC_DATA;
use adc_quality::spectrum::{analyze_from_codes, FftEngine};

fn tone(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 2048.0 + 1000.0 * (2.0 * PI * 13.0 * i as f64 / n as f64).sin())
        .collect()
}

fn bench_power_spectrum(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft/power_spectrum");

    // Radix-2 sizes next to direct-DFT sizes of similar length
    for size in [256, 250, 1024, 1000] {
        let signal = tone(size);
        let mut engine = FftEngine::new(size);

        group.bench_function(BenchmarkId::new(format!("{:?}", engine.path()), size), |b| {
            b.iter(|| engine.power_spectrum(black_box(&signal)))
        });
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    c.bench_function("analyze/example_capture", |b| {
        b.iter(|| analyze_from_codes(black_box(&SAMPLE_ADC_DATA), 12))
    });
}

criterion_group!(benches, bench_power_spectrum, bench_analyze);
criterion_main!(benches);
