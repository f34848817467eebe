//! FFT engine for real-valued captures
//!
//! Radix-2 decimation-in-time for power-of-two lengths, direct O(N²)
//! summation otherwise. No normalization is applied.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Which transform path a given length takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftPath {
    Radix2,
    Direct,
}

/// One-sided power spectrum |X[k]|² for k = 0..=k_end
#[derive(Debug, Clone, PartialEq)]
pub struct OneSidedSpectrum {
    /// Raw (unscaled) bin power
    pub power: Vec<f64>,

    /// Last bin index held in `power` (N/2 rounded down)
    pub k_end: usize,

    /// Transform length N
    pub len: usize,
}

/// FFT engine for a fixed transform length
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    path: FftPath,

    /// Working buffer (complex spectrum)
    buffer: Vec<Complex64>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples)
    pub fn new(fft_size: usize) -> Self {
        let path = if fft_size.is_power_of_two() {
            FftPath::Radix2
        } else {
            FftPath::Direct
        };

        tracing::debug!(fft_size, ?path, "fft engine planned");

        Self {
            fft_size,
            path,
            buffer: vec![Complex64::new(0.0, 0.0); fft_size],
        }
    }

    /// Transform `data` in place
    ///
    /// # Panics
    /// When `data.len()` differs from the engine's FFT size.
    pub fn transform(&mut self, data: &mut [Complex64]) {
        assert_eq!(data.len(), self.fft_size, "fft length mismatch");

        match self.path {
            FftPath::Radix2 => fft_radix2(data),
            FftPath::Direct => {
                dft_into(data, &mut self.buffer);
                data.copy_from_slice(&self.buffer);
            }
        }
    }

    /// Compute the one-sided power spectrum of a real signal
    ///
    /// Bins above N/2 mirror the lower half for real input and are dropped.
    /// A shorter `signal` is zero-padded to the FFT size; a longer one is
    /// truncated to it.
    pub fn power_spectrum(&mut self, signal: &[f64]) -> OneSidedSpectrum {
        let mut data: Vec<Complex64> = signal
            .iter()
            .map(|&x| Complex64::new(x, 0.0))
            .collect();
        data.resize(self.fft_size, Complex64::new(0.0, 0.0));

        self.transform(&mut data);

        let k_end = self.fft_size / 2;
        let power = data[..=k_end].iter().map(|c| c.norm_sqr()).collect();

        OneSidedSpectrum {
            power,
            k_end,
            len: self.fft_size,
        }
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Get the transform path chosen for this size
    pub fn path(&self) -> FftPath {
        self.path
    }

    /// Get number of one-sided bins (N/2 + 1)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }
}

/// Reorder `data` into bit-reversed index order
fn bit_reverse_permute(data: &mut [Complex64]) {
    let n = data.len();
    let mut j = 0;
    for i in 0..n {
        if i < j {
            data.swap(i, j);
        }
        let mut m = n >> 1;
        while m >= 1 && j >= m {
            j -= m;
            m >>= 1;
        }
        j += m;
    }
}

/// Iterative radix-2 Cooley-Tukey, `data.len()` must be a power of two
fn fft_radix2(data: &mut [Complex64]) {
    let n = data.len();
    bit_reverse_permute(data);

    let mut len = 2;
    while len <= n {
        let half = len >> 1;
        let angle = -2.0 * PI / len as f64;
        let w_len = Complex64::new(angle.cos(), angle.sin());

        for start in (0..n).step_by(len) {
            let mut w = Complex64::new(1.0, 0.0);
            for j in 0..half {
                let u = data[start + j];
                let v = data[start + j + half] * w;
                data[start + j] = u + v;
                data[start + j + half] = u - v;
                w *= w_len;
            }
        }
        len <<= 1;
    }
}

/// Direct DFT of `input` written into `output`
fn dft_into(input: &[Complex64], output: &mut [Complex64]) {
    let n = input.len();
    let n_f = n as f64;

    for (k, out) in output.iter_mut().enumerate() {
        let mut sum = Complex64::new(0.0, 0.0);
        for (idx, &x) in input.iter().enumerate() {
            let angle = -2.0 * PI * k as f64 * idx as f64 / n_f;
            sum += x * Complex64::new(angle.cos(), angle.sin());
        }
        *out = sum;
    }
}
