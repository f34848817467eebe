//! Python bindings for front-end sizing and SI helpers

use pyo3::prelude::*;
use crate::adc::{AdcBudget, AdcParams, DEFAULT_RIPPLE_DB};
use crate::units;

/// Buffer capacitor bounds (min, max); swapped when infeasible
#[pyfunction]
#[pyo3(signature = (r_ext, sig_freq, csh, v_ref, n_bits, ripple_db=DEFAULT_RIPPLE_DB, v_step=None))]
pub fn cin_range(
    r_ext: f64,
    sig_freq: f64,
    csh: f64,
    v_ref: f64,
    n_bits: u32,
    ripple_db: f64,
    v_step: Option<f64>,
) -> (f64, f64) {
    crate::adc::cin_range(r_ext, sig_freq, csh, v_ref, n_bits, ripple_db, v_step)
}

/// Theoretical budget for the default front end with overrides
/// 
/// Returns:
///     Dictionary of budget figures
#[pyfunction]
#[pyo3(signature = (v_ref=3.3, n_bits=12, signal_hz=10e3, signal_vpp=2.0, jitter_s=40e-12, osr=1.0))]
pub fn adc_budget(
    py: Python<'_>,
    v_ref: f64,
    n_bits: u32,
    signal_hz: f64,
    signal_vpp: f64,
    jitter_s: f64,
    osr: f64,
) -> PyResult<PyObject> {
    let params = AdcParams {
        v_ref,
        n_bits,
        signal_hz,
        signal_vpp,
        jitter_s,
        osr,
        ..AdcParams::default()
    };
    let b = AdcBudget::from_params(&params);

    let dict = pyo3::types::PyDict::new(py);
    dict.set_item("lsb", b.lsb)?;
    dict.set_item("snr_quant_db", b.snr_quant_db)?;
    dict.set_item("jitter_crossover_hz", b.jitter_crossover_hz)?;
    dict.set_item("snr_jitter_db", b.snr_jitter_db)?;
    dict.set_item("snr_est_db", b.snr_est_db)?;
    dict.set_item("sinad_est_db", b.sinad_est_db)?;
    dict.set_item("t_acq", b.t_acq)?;
    dict.set_item("acq_cycles", b.acq_cycles)?;
    dict.set_item("cbuf", b.cbuf)?;
    Ok(dict.into())
}

/// Parse an SI-prefixed quantity ("4k7", "5p"), None if unreadable
#[pyfunction]
pub fn parse_si(text: &str) -> Option<f64> {
    units::parse_si(text)
}

/// Format a value with a metric prefix
#[pyfunction]
#[pyo3(signature = (value, unit="", digits=3))]
pub fn format_si(value: f64, unit: &str, digits: usize) -> String {
    units::format_si(value, unit, digits)
}

/// Tokenize a free-text sample list
#[pyfunction]
pub fn parse_samples(text: &str) -> Vec<f64> {
    units::parse_samples(text)
}
