//! What limits a measured capture: noise, distortion, or clock jitter

use std::fmt;

use crate::spectrum::AnalysisResult;

/// Dominant impairment of a measured capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limitation {
    NoiseLimited,
    DistortionLimited,
    JitterLimited,
    Balanced,
}

impl fmt::Display for Limitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let advice = match self {
            Limitation::NoiseLimited => {
                "Noise-limited: improve Vref/VDDA decoupling, average more (increase OSR), \
                 and drive the ADC at -3…-6 dBFS RMS."
            }
            Limitation::DistortionLimited => {
                "Distortion-limited: check input driver linearity, acquisition time (t_acq), \
                 input RC/buffer cap, and VREF integrity. Keep level below clipping."
            }
            Limitation::JitterLimited => {
                "Jitter-limited near the current f0: reduce f0 or sampling jitter (better clock), \
                 or move signal lower in frequency."
            }
            Limitation::Balanced => {
                "Looks balanced: you can still gain a few dB by modest OSR and ensuring \
                 -3…-6 dBFS RMS."
            }
        };
        f.write_str(advice)
    }
}

/// Classify a measurement against the jitter-limited SNR of the front end
///
/// Several limitations can apply at once; `Balanced` is returned alone
/// when none does.
pub fn diagnose(snr_jitter_db: f64, measured: &AnalysisResult) -> Vec<Limitation> {
    let mut found = Vec::new();
    let (snr, sinad) = (measured.snr_db, measured.sinad_db);

    if measured.p_noise > measured.p_harm * 1.6 || (sinad - snr).abs() < 1.5 {
        found.push(Limitation::NoiseLimited);
    }
    if measured.p_harm > measured.p_noise * 1.6 || snr - sinad > 3.0 {
        found.push(Limitation::DistortionLimited);
    }
    if snr_jitter_db - sinad < 3.0 {
        found.push(Limitation::JitterLimited);
    }
    if found.is_empty() {
        found.push(Limitation::Balanced);
    }
    found
}
