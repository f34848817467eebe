//! End-to-end properties of the capture analyzer

use std::f64::consts::PI;

use adc_quality::adc::{cin_range, SAMPLE_ADC_BITS, SAMPLE_ADC_DATA};
use adc_quality::spectrum::{analyze_from_codes, AnalysisResult, WindowKind};
use adc_quality::units::parse_samples;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn tone(n: usize, cycles: f64, amplitude: f64, offset: f64) -> Vec<f64> {
    (0..n)
        .map(|i| offset + amplitude * (2.0 * PI * cycles * i as f64 / n as f64).sin())
        .collect()
}

fn with_noise(signal: &[f64], sigma: f64, rng: &mut StdRng) -> Vec<f64> {
    let noise = Normal::new(0.0, sigma).unwrap();
    signal.iter().map(|&s| s + noise.sample(rng)).collect()
}

#[test]
fn short_capture_yields_nothing() {
    assert!(analyze_from_codes(&[1.0, 2.0, 3.0], 8).is_none());
    assert!(analyze_from_codes(&[], 12).is_none());
}

#[test]
fn coherent_tone_energy() {
    let amplitude = 1200.0;
    let r = analyze_from_codes(&tone(512, 17.0, amplitude, 2048.0), 12).unwrap();

    assert_eq!(r.k0, 17);
    let expected = (amplitude / 2f64.sqrt()).powi(2);
    assert!((r.p1 - expected).abs() / expected < 1e-9);
}

#[test]
fn dc_offset_does_not_change_metrics() {
    let mut rng = StdRng::seed_from_u64(7);
    let base = with_noise(&tone(1024, 31.0, 1000.0, 0.0), 2.0, &mut rng);
    let shifted: Vec<f64> = base.iter().map(|&s| s + 1500.0).collect();

    let a = analyze_from_codes(&base, 12).unwrap();
    let b = analyze_from_codes(&shifted, 12).unwrap();

    assert_eq!(a.k0, b.k0);
    let pairs = [
        (a.snr_db, b.snr_db),
        (a.sinad_db, b.sinad_db),
        (a.thd_db, b.thd_db),
        (a.enob_bits, b.enob_bits),
        (a.noise_floor_dbfs_bin, b.noise_floor_dbfs_bin),
    ];
    for (x, y) in pairs {
        assert!((x - y).abs() < 1e-6, "{} vs {}", x, y);
    }
}

#[test]
fn more_noise_lowers_snr_and_sinad() {
    let clean = tone(1024, 31.0, 1000.0, 2048.0);
    let mut rng = StdRng::seed_from_u64(42);

    let mean_metrics = |sigma: f64, rng: &mut StdRng| -> (f64, f64) {
        let trials = 5;
        let (mut snr, mut sinad) = (0.0, 0.0);
        for _ in 0..trials {
            let r = analyze_from_codes(&with_noise(&clean, sigma, rng), 12).unwrap();
            snr += r.snr_db;
            sinad += r.sinad_db;
        }
        (snr / trials as f64, sinad / trials as f64)
    };

    let levels: Vec<(f64, f64)> = [0.5, 2.0, 8.0]
        .iter()
        .map(|&sigma| mean_metrics(sigma, &mut rng))
        .collect();

    for pair in levels.windows(2) {
        assert!(pair[1].0 < pair[0].0, "SNR did not drop: {:?}", levels);
        assert!(pair[1].1 < pair[0].1, "SINAD did not drop: {:?}", levels);
    }
}

#[test]
fn window_follows_length() {
    // Same 10-cycle tone; every band (fundamental + 9 harmonics) is 2·guard + 1 wide
    let rect = analyze_from_codes(&tone(256, 10.0, 500.0, 2048.0), 12).unwrap();
    let hann = analyze_from_codes(&tone(250, 10.0, 500.0, 2048.0), 12).unwrap();

    assert_eq!(rect.window, WindowKind::Rectangular);
    assert_eq!(hann.window, WindowKind::Hann);
    assert_eq!((rect.k0, hann.k0), (10, 10));
    assert_eq!((rect.harmonics, hann.harmonics), (9, 9));

    // Scanned bins: [1, 128) and [1, 125)
    assert_eq!(127 - rect.noise_bins, 10 * 3);
    assert_eq!(124 - hann.noise_bins, 10 * 5);
}

#[test]
fn ideal_quantizer_enob() {
    let n_bits = 12;
    let n = 4096;
    let half_scale = (2f64.powi(n_bits) - 1.0) / 2.0;
    // 127 cycles: coprime with the length, so quantization error spreads over all bins
    let codes: Vec<f64> = tone(n, 127.0, half_scale, half_scale)
        .iter()
        .map(|c| c.round())
        .collect();

    let r = analyze_from_codes(&codes, n_bits as u32).unwrap();
    assert_eq!(r.k0, 127);
    assert!((r.enob_bits - n_bits as f64).abs() < 0.1, "ENOB {}", r.enob_bits);
}

#[test]
fn bundled_capture() {
    let r: AnalysisResult = analyze_from_codes(&SAMPLE_ADC_DATA, SAMPLE_ADC_BITS).unwrap();

    assert_eq!(r.window, WindowKind::Rectangular);
    assert_eq!(r.k0, 83);
    assert_eq!(r.harmonics, 5);
    assert_eq!(r.noise_bins, 493);
    // Leakage of the non-coherent tone lands on the harmonic bands
    assert!(r.sinad_db > 39.0 && r.sinad_db < 40.0, "SINAD {}", r.sinad_db);
    assert!(r.snr_db > 67.0 && r.snr_db < 68.0, "SNR {}", r.snr_db);
    assert!(r.enob_bits > 6.0 && r.enob_bits < 6.5);
    assert!(r.noise_floor_dbfs_bin.is_finite());
}

#[test]
fn text_capture_round_trip() {
    let text = SAMPLE_ADC_DATA
        .iter()
        .map(|c| format!("{}", c))
        .collect::<Vec<_>>()
        .join(", ");
    let parsed = parse_samples(&text);

    assert_eq!(parsed.len(), 1024);
    assert_eq!(
        analyze_from_codes(&parsed, 12),
        analyze_from_codes(&SAMPLE_ADC_DATA, 12)
    );
}

#[test]
fn zero_resolution_surfaces_non_finite_floor() {
    let r = analyze_from_codes(&tone(64, 3.0, 10.0, 0.0), 0).unwrap();
    assert!(!r.noise_floor_dbfs_bin.is_finite());
    assert!(r.snr_db.is_finite());
}

#[test]
fn cin_range_edges() {
    assert_eq!(cin_range(0.0, 10e3, 5e-12, 3.3, 12, 0.1, None), (0.0, 0.0));

    let (lo, hi) = cin_range(100.0, 1e3, 5e-12, 3.3, 8, 0.1, Some(0.01));
    assert!(lo <= hi);

    // Infeasible configuration: bounds swapped, first is the bandwidth limit
    let (first, second) = cin_range(50e3, 10e3, 5e-12, 3.3, 12, 0.1, None);
    assert!(first < second);
    assert!(second > 4e-8);
}
