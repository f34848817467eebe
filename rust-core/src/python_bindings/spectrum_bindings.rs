//! Python bindings for ADC capture analysis

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use numpy::PyReadonlyArray1;
use crate::spectrum::{AnalysisResult, AnalyzerConfig, SpectrumAnalyzer, WindowKind};

/// Analysis result exposed to Python
#[pyclass(name = "AnalysisResult")]
#[derive(Clone)]
pub struct PyAnalysisResult {
    #[pyo3(get)]
    pub k0: usize,
    #[pyo3(get)]
    pub p1: f64,
    #[pyo3(get)]
    pub p_harm: f64,
    #[pyo3(get)]
    pub p_noise: f64,
    #[pyo3(get)]
    pub snr_db: f64,
    #[pyo3(get)]
    pub sinad_db: f64,
    #[pyo3(get)]
    pub thd_db: f64,
    #[pyo3(get)]
    pub enob_bits: f64,
    #[pyo3(get)]
    pub noise_floor_dbfs_bin: f64,
    #[pyo3(get)]
    pub noise_bins: usize,
    #[pyo3(get)]
    pub window: String,
}

#[pymethods]
impl PyAnalysisResult {
    fn __repr__(&self) -> String {
        format!(
            "AnalysisResult(k0={}, snr_db={:.2}, sinad_db={:.2}, thd_db={:.2}, enob_bits={:.2})",
            self.k0, self.snr_db, self.sinad_db, self.thd_db, self.enob_bits
        )
    }
}

impl From<AnalysisResult> for PyAnalysisResult {
    fn from(r: AnalysisResult) -> Self {
        let window = match r.window {
            WindowKind::Rectangular => "rectangular",
            WindowKind::Hann => "hann",
        };
        Self {
            k0: r.k0,
            p1: r.p1,
            p_harm: r.p_harm,
            p_noise: r.p_noise,
            snr_db: r.snr_db,
            sinad_db: r.sinad_db,
            thd_db: r.thd_db,
            enob_bits: r.enob_bits,
            noise_floor_dbfs_bin: r.noise_floor_dbfs_bin,
            noise_bins: r.noise_bins,
            window: window.to_string(),
        }
    }
}

fn codes_slice<'a>(codes: &'a PyReadonlyArray1<f64>) -> PyResult<&'a [f64]> {
    codes
        .as_slice()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Spectrum analyzer exposed to Python
#[pyclass(name = "SpectrumAnalyzer")]
pub struct PySpectrumAnalyzer {
    analyzer: SpectrumAnalyzer,
}

#[pymethods]
impl PySpectrumAnalyzer {
    /// Create a new analyzer
    /// 
    /// Args:
    ///     n_bits: ADC resolution in bits
    ///     max_harmonic: Highest harmonic order counted as distortion
    #[new]
    #[pyo3(signature = (n_bits=12, max_harmonic=10))]
    fn new(n_bits: u32, max_harmonic: usize) -> Self {
        let config = AnalyzerConfig {
            n_bits,
            max_harmonic,
            ..AnalyzerConfig::default()
        };

        Self {
            analyzer: SpectrumAnalyzer::new(config),
        }
    }

    /// Analyze a capture of raw ADC codes
    /// 
    /// Raises:
    ///     ValueError: fewer than 8 samples
    fn analyze(&self, codes: PyReadonlyArray1<f64>) -> PyResult<PyAnalysisResult> {
        let result = self.analyzer.analyze(codes_slice(&codes)?)?;
        Ok(result.into())
    }

    /// Get configured resolution
    fn n_bits(&self) -> u32 {
        self.analyzer.config().n_bits
    }
}

/// Analyze raw ADC codes, returning None for fewer than 8 samples
#[pyfunction]
#[pyo3(signature = (codes, n_bits=12))]
pub fn analyze_from_codes(
    codes: PyReadonlyArray1<f64>,
    n_bits: u32,
) -> PyResult<Option<PyAnalysisResult>> {
    let result = crate::spectrum::analyze_from_codes(codes_slice(&codes)?, n_bits);
    Ok(result.map(Into::into))
}
