//! ADC signal-quality analyzer
//!
//! Turns a capture of raw ADC codes into SNR, SINAD, THD, ENOB and a
//! per-bin noise floor. Pipeline: DC removal, window, FFT, one-sided
//! power spectrum, bin classification, scalar metrics.

use super::fft::{FftEngine, OneSidedSpectrum};
use super::windowing::{apply_window, select_window, WindowDescriptor, WindowKind};
use crate::error::AdcError;

/// Smallest capture the analyzer accepts
pub const MIN_SAMPLES: usize = 8;

const EPS: f64 = 1e-300;

/// Analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// ADC resolution, used for full-scale normalization only
    pub n_bits: u32,

    /// Highest harmonic order accounted as distortion
    pub max_harmonic: usize,

    /// Minimum number of samples required
    pub min_samples: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            n_bits: 12,
            max_harmonic: 10,
            min_samples: MIN_SAMPLES,
        }
    }
}

/// Result of one analysis pass
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Fundamental bin index
    pub k0: usize,

    /// Fundamental power (code units²)
    pub p1: f64,

    /// Summed harmonic power
    pub p_harm: f64,

    /// Broadband noise power
    pub p_noise: f64,

    pub snr_db: f64,
    pub sinad_db: f64,
    pub thd_db: f64,
    pub enob_bits: f64,

    /// Average noise power per bin relative to a full-scale sine
    pub noise_floor_dbfs_bin: f64,

    /// Number of bins summed into `p_noise`
    pub noise_bins: usize,

    /// Number of harmonics that fit below Nyquist
    pub harmonics: usize,

    pub window: WindowKind,
}

/// Spectral analyzer for ADC captures
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
}

impl SpectrumAnalyzer {
    /// Create new analyzer
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a capture of raw ADC codes
    ///
    /// # Errors
    /// `AdcError::InsufficientData` when the capture is shorter than
    /// `min_samples`. Degenerate numeric content is not an error; it
    /// surfaces as non-finite metrics.
    pub fn analyze(&self, codes: &[f64]) -> Result<AnalysisResult, AdcError> {
        let n = codes.len();
        if n < self.config.min_samples {
            tracing::debug!(len = n, min = self.config.min_samples, "insufficient data");
            return Err(AdcError::InsufficientData {
                len: n,
                min: self.config.min_samples,
            });
        }

        let mean = codes.iter().sum::<f64>() / n as f64;
        let centered: Vec<f64> = codes.iter().map(|&c| c - mean).collect();

        let window = select_window(n);
        tracing::debug!(
            len = n,
            kind = ?window.kind,
            guard = window.guard_bins,
            "analysis window selected"
        );
        let windowed = apply_window(&centered, window.kind);

        let spectrum = FftEngine::new(n).power_spectrum(&windowed);

        Ok(self.classify(&spectrum, &window))
    }

    /// Split a power spectrum into fundamental, harmonic and noise power
    fn classify(&self, spectrum: &OneSidedSpectrum, window: &WindowDescriptor) -> AnalysisResult {
        let pk = &spectrum.power;
        let n = spectrum.len as f64;
        let guard = window.guard_bins;

        // Bins are scanned over [k_start, k_nyq); DC and Nyquist are never summed
        let k_start = 1;
        let k_nyq = spectrum.k_end;

        let mut k0 = k_start;
        let mut max_power = -1.0;
        for (k, &p) in pk.iter().enumerate().take(k_nyq).skip(k_start) {
            if p > max_power {
                max_power = p;
                k0 = k;
            }
        }

        let scale_tone = 2.0 / (n * n * window.coherent_gain * window.coherent_gain);
        let scale_noise = 2.0 / (n * n * window.noise_gain);

        let band = |center: usize| -> std::ops::RangeInclusive<usize> {
            let lo = center.saturating_sub(guard).max(k_start);
            let hi = (center + guard).min(k_nyq.saturating_sub(1));
            lo..=hi
        };
        let sum_band = |center: usize| -> f64 {
            let range = band(center);
            if range.is_empty() {
                0.0
            } else {
                pk[range].iter().sum()
            }
        };

        let harmonic_bins: Vec<usize> = (2..=self.config.max_harmonic)
            .map(|h| h * k0)
            .take_while(|&kh| kh + guard < k_nyq)
            .collect();

        let p1 = scale_tone * sum_band(k0);
        let p_harm: f64 = harmonic_bins.iter().map(|&kh| scale_tone * sum_band(kh)).sum();

        let mut excluded = vec![false; k_nyq + 1];
        for center in std::iter::once(k0).chain(harmonic_bins.iter().copied()) {
            for k in band(center) {
                excluded[k] = true;
            }
        }

        let (noise_raw, noise_bins) = (k_start..k_nyq)
            .filter(|&k| !excluded[k])
            .fold((0.0, 0usize), |(sum, count), k| (sum + pk[k], count + 1));
        let p_noise = scale_noise * noise_raw;

        tracing::trace!(
            k0,
            harmonics = harmonic_bins.len(),
            noise_bins,
            p1,
            p_harm,
            p_noise,
            "bins classified"
        );

        let snr_db = 10.0 * (p1 / (p_noise + EPS)).log10();
        let thd_db = 10.0 * ((p_harm + EPS) / (p1 + EPS)).log10();
        let sinad_db = 10.0 * (p1 / (p_noise + p_harm + EPS)).log10();
        let enob_bits = (sinad_db - 1.76) / 6.02;

        let full_scale = full_scale_power(self.config.n_bits);
        let noise_floor_dbfs_bin =
            10.0 * ((p_noise / noise_bins as f64 + EPS) / full_scale).log10();

        AnalysisResult {
            k0,
            p1,
            p_harm,
            p_noise,
            snr_db,
            sinad_db,
            thd_db,
            enob_bits,
            noise_floor_dbfs_bin,
            noise_bins,
            harmonics: harmonic_bins.len(),
            window: window.kind,
        }
    }
}

/// Power of a full-scale sine in code units: ((2^bits - 1) / (2√2))²
pub fn full_scale_power(n_bits: u32) -> f64 {
    let rms = (2f64.powf(n_bits as f64) - 1.0) / (2.0 * std::f64::consts::SQRT_2);
    rms * rms
}

/// Analyze raw ADC codes
///
/// Returns `None` when fewer than 8 samples are supplied.
pub fn analyze_from_codes(codes: &[f64], n_bits: u32) -> Option<AnalysisResult> {
    let config = AnalyzerConfig {
        n_bits,
        ..AnalyzerConfig::default()
    };
    SpectrumAnalyzer::new(config).analyze(codes).ok()
}
