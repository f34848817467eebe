//! ADC Quality - Signal-Quality Analysis for ADC Captures
//! 
//! FFT-based SNR/SINAD/THD/ENOB measurement of raw converter codes, plus
//! front-end sizing helpers, with optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod adc;
pub mod error;
pub mod spectrum;
pub mod units;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use adc::{cin_range, AdcBudget, AdcParams};
pub use error::AdcError;
pub use spectrum::{analyze_from_codes, AnalysisResult, SpectrumAnalyzer};
pub use units::{format_si, parse_samples, parse_si};
