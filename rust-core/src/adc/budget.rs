//! Theoretical ADC noise and timing budget
//!
//! Estimates what a converter front end should achieve before any capture
//! is analyzed: quantization and jitter limits, acquisition time, and the
//! usable buffer-capacitor window.

use super::cin::{cin_range, DEFAULT_RIPPLE_DB};
use std::f64::consts::{PI, SQRT_2};

/// ADC front-end parameters
#[derive(Debug, Clone)]
pub struct AdcParams {
    /// Reference voltage (V)
    pub v_ref: f64,

    /// Resolution (bits)
    pub n_bits: u32,

    /// ADC clock (Hz)
    pub clock_hz: f64,

    /// Oversampling ratio
    pub osr: f64,

    /// Sample-and-hold capacitance (F)
    pub csh: f64,

    /// Sampling switch resistance (Ω)
    pub r_sw: f64,

    /// External source resistance (Ω)
    pub r_ext: f64,

    /// RMS sampling clock jitter (s)
    pub jitter_s: f64,

    /// Converter noise floor (dBFS)
    pub noise_floor_dbfs: f64,

    /// Converter THD (dBFS)
    pub thd_dbfs: f64,

    /// Input signal frequency (Hz)
    pub signal_hz: f64,

    /// Input signal amplitude, peak to peak (V)
    pub signal_vpp: f64,
}

impl Default for AdcParams {
    fn default() -> Self {
        Self {
            v_ref: 3.3,
            n_bits: 12,
            clock_hz: 8e6,
            osr: 1.0,
            csh: 5e-12,
            r_sw: 2e3,
            r_ext: 50e3,
            jitter_s: 40e-12,
            noise_floor_dbfs: -70.0,
            thd_dbfs: -73.0,
            signal_hz: 10e3,
            signal_vpp: 2.0,
        }
    }
}

/// Derived budget figures
#[derive(Debug, Clone, PartialEq)]
pub struct AdcBudget {
    /// Quantization step (V)
    pub lsb: f64,

    /// Signal RMS relative to a full-scale sine (dB)
    pub signal_level_db: f64,

    /// Quantization-limited SNR including level and oversampling gain
    pub snr_quant_db: f64,

    /// Input frequency at which jitter noise equals quantization noise
    pub jitter_crossover_hz: f64,

    /// Jitter-limited SNR at the signal frequency
    pub snr_jitter_db: f64,

    /// Combined SNR estimate: quantization, jitter and converter floor
    /// summed as noise powers. Lower than the web calculator's figure, which
    /// added the floor outside the reciprocal.
    pub snr_est_db: f64,

    /// `snr_est_db` with the converter THD added as a further power term
    pub sinad_est_db: f64,

    /// S/H acquisition time to settle within ½ LSB (s)
    pub t_acq: f64,

    /// Acquisition time in ADC clock cycles
    pub acq_cycles: f64,

    /// Buffer capacitor bounds, see [`cin_range`]
    pub cbuf: (f64, f64),
}

impl AdcBudget {
    pub fn from_params(p: &AdcParams) -> Self {
        let bits = p.n_bits as f64;

        let lsb = p.v_ref / 2f64.powf(bits);
        let v_fs_rms = p.v_ref / (2.0 * SQRT_2);
        let v_sig_rms = p.signal_vpp / (2.0 * SQRT_2);
        let signal_level_db = 20.0 * (v_sig_rms / v_fs_rms).log10();

        let snr_quant_db = 6.02 * bits + 1.76 + signal_level_db + 10.0 * p.osr.log10();
        let jitter_crossover_hz = 10f64.powf(-snr_quant_db / 20.0) / (2.0 * PI * p.jitter_s);
        let snr_jitter_db = -20.0 * (2.0 * PI * p.signal_hz * p.jitter_s).log10();

        // Noise contributions add as powers relative to the carrier
        let noise = 10f64.powf(-snr_quant_db / 10.0)
            + 10f64.powf(-snr_jitter_db / 10.0)
            + 10f64.powf(p.noise_floor_dbfs / 10.0);
        let snr_est_db = -10.0 * noise.log10();
        let sinad_est_db =
            -10.0 * (10f64.powf(-snr_est_db / 10.0) + 10f64.powf(p.thd_dbfs / 10.0)).log10();

        let t_acq = (p.r_sw + p.r_ext) * p.csh * 2f64.powf(bits + 1.0).ln();
        let acq_cycles = t_acq * p.clock_hz;

        let cbuf = cin_range(
            p.r_ext,
            p.signal_hz,
            p.csh,
            p.v_ref,
            p.n_bits,
            DEFAULT_RIPPLE_DB,
            Some(p.v_ref),
        );

        Self {
            lsb,
            signal_level_db,
            snr_quant_db,
            jitter_crossover_hz,
            snr_jitter_db,
            snr_est_db,
            sinad_est_db,
            t_acq,
            acq_cycles,
            cbuf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_scale_quantization_limit() {
        let params = AdcParams {
            signal_vpp: 3.3,
            ..AdcParams::default()
        };
        let b = AdcBudget::from_params(&params);

        assert!((b.lsb - 3.3 / 4096.0).abs() < 1e-15);
        assert!(b.signal_level_db.abs() < 1e-12);
        assert!((b.snr_quant_db - 74.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_budget() {
        let b = AdcBudget::from_params(&AdcParams::default());

        // 2 Vpp into a 3.3 V range
        assert!((b.signal_level_db - 20.0 * (2.0f64 / 3.3).log10()).abs() < 1e-12);
        // 2π · 10 kHz · 40 ps
        let expected_jitter = -20.0 * (2.0 * PI * 10e3 * 40e-12).log10();
        assert!((b.snr_jitter_db - expected_jitter).abs() < 1e-9);
        assert!(b.snr_jitter_db > 110.0);

        // Quantization (~69.7 dB) and the -70 dBFS floor contribute about equally
        assert!(b.snr_est_db > 66.5 && b.snr_est_db < 67.1);
        assert!(b.sinad_est_db < b.snr_est_db);

        // 52 kΩ · 5 pF · ln(8192)
        let expected_tacq = 52e3 * 5e-12 * 8192f64.ln();
        assert!((b.t_acq - expected_tacq).abs() < 1e-15);
        assert!((b.acq_cycles - expected_tacq * 8e6).abs() < 1e-6);
    }

    #[test]
    fn test_oversampling_gain() {
        let base = AdcBudget::from_params(&AdcParams::default());
        let osr16 = AdcBudget::from_params(&AdcParams {
            osr: 16.0,
            ..AdcParams::default()
        });

        assert!((osr16.snr_quant_db - base.snr_quant_db - 10.0 * 16f64.log10()).abs() < 1e-9);
    }

    #[test]
    fn test_jitter_crossover_meets_quant_limit() {
        let b = AdcBudget::from_params(&AdcParams::default());
        let at_crossover = AdcBudget::from_params(&AdcParams {
            signal_hz: b.jitter_crossover_hz,
            ..AdcParams::default()
        });

        assert!((at_crossover.snr_jitter_db - b.snr_quant_db).abs() < 1e-6);
    }
}
