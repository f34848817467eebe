//! Analysis window selection
//!
//! Power-of-two captures are treated as coherently sampled and left
//! untapered; every other length gets a periodic Hann window.

use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    /// Rectangular window (no tapering)
    Rectangular,

    /// Periodic Hann window: w[n] = 0.5 - 0.5*cos(2πn/N)
    Hann,
}

/// Window kind together with its power-correction constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowDescriptor {
    pub kind: WindowKind,

    /// Coherent gain (mean of w[n])
    pub coherent_gain: f64,

    /// Noise gain (mean of w[n]²)
    pub noise_gain: f64,

    /// Equivalent noise bandwidth in bins
    pub enbw_bins: f64,

    /// Half-width of the bin band attributed to a tone
    pub guard_bins: usize,
}

impl WindowKind {
    /// Constants for this window
    pub fn descriptor(self) -> WindowDescriptor {
        match self {
            WindowKind::Rectangular => WindowDescriptor {
                kind: self,
                coherent_gain: 1.0,
                noise_gain: 1.0,
                enbw_bins: 1.0,
                guard_bins: 1,
            },
            WindowKind::Hann => WindowDescriptor {
                kind: self,
                coherent_gain: 0.5,
                noise_gain: 0.375,
                enbw_bins: 1.5,
                guard_bins: 2,
            },
        }
    }
}

/// Pick the analysis window for a capture of `len` samples
pub fn select_window(len: usize) -> WindowDescriptor {
    let kind = if len.is_power_of_two() {
        WindowKind::Rectangular
    } else {
        WindowKind::Hann
    };
    kind.descriptor()
}

/// Generate window coefficients w[n] for n = 0..len-1
pub fn generate_window(kind: WindowKind, len: usize) -> Vec<f64> {
    match kind {
        WindowKind::Rectangular => vec![1.0; len],
        WindowKind::Hann => {
            let m = len as f64;
            (0..len)
                .map(|n| 0.5 - 0.5 * (2.0 * PI * n as f64 / m).cos())
                .collect()
        }
    }
}

/// Apply window to signal
///
/// # Arguments
/// * `signal` - Input signal (left untouched)
/// * `kind` - Type of window to apply
///
/// # Returns
/// Windowed copy of the signal
pub fn apply_window(signal: &[f64], kind: WindowKind) -> Vec<f64> {
    match kind {
        WindowKind::Rectangular => signal.to_vec(),
        WindowKind::Hann => {
            let window = generate_window(kind, signal.len());
            signal
                .iter()
                .zip(window.iter())
                .map(|(&s, &w)| s * w)
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_window() {
        assert_eq!(select_window(256).kind, WindowKind::Rectangular);
        assert_eq!(select_window(1024).guard_bins, 1);

        let hann = select_window(250);
        assert_eq!(hann.kind, WindowKind::Hann);
        assert_eq!(hann.guard_bins, 2);
        assert_eq!(hann.coherent_gain, 0.5);
        assert_eq!(hann.noise_gain, 0.375);
    }

    #[test]
    fn test_hann_is_periodic() {
        let w = generate_window(WindowKind::Hann, 10);

        assert_eq!(w[0], 0.0);
        // Periodic form peaks at N/2, and w[N-1] is not zero
        assert!((w[5] - 1.0).abs() < 1e-12);
        assert!(w[9] > 0.09);
    }

    #[test]
    fn test_hann_gains_match_constants() {
        let n = 250;
        let w = generate_window(WindowKind::Hann, n);
        let cg = w.iter().sum::<f64>() / n as f64;
        let u = w.iter().map(|x| x * x).sum::<f64>() / n as f64;
        let desc = WindowKind::Hann.descriptor();

        assert!((cg - desc.coherent_gain).abs() < 1e-12);
        assert!((u - desc.noise_gain).abs() < 1e-12);
        assert!((u / (cg * cg) - desc.enbw_bins).abs() < 1e-9);
    }

    #[test]
    fn test_apply_window_leaves_input() {
        let signal = vec![1.0; 12];
        let windowed = apply_window(&signal, WindowKind::Hann);

        assert!(signal.iter().all(|&s| s == 1.0));
        assert_eq!(windowed[0], 0.0);
        assert!((windowed[6] - 1.0).abs() < 1e-12);

        assert_eq!(apply_window(&signal, WindowKind::Rectangular), signal);
    }
}
