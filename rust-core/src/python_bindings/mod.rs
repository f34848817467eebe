//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use crate::error::AdcError;

mod spectrum_bindings;
mod adc_bindings;

impl From<AdcError> for PyErr {
    fn from(err: AdcError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn adc_quality(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<spectrum_bindings::PySpectrumAnalyzer>()?;
    m.add_class::<spectrum_bindings::PyAnalysisResult>()?;

    m.add_function(wrap_pyfunction!(spectrum_bindings::analyze_from_codes, m)?)?;
    m.add_function(wrap_pyfunction!(adc_bindings::cin_range, m)?)?;
    m.add_function(wrap_pyfunction!(adc_bindings::adc_budget, m)?)?;
    m.add_function(wrap_pyfunction!(adc_bindings::parse_si, m)?)?;
    m.add_function(wrap_pyfunction!(adc_bindings::format_si, m)?)?;
    m.add_function(wrap_pyfunction!(adc_bindings::parse_samples, m)?)?;

    Ok(())
}
