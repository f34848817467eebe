//! ADC front-end calculations around the spectral analyzer

pub mod cin;
pub mod budget;
pub mod diagnosis;
pub mod capture;

pub use cin::{cin_range, DEFAULT_RIPPLE_DB};
pub use budget::{AdcBudget, AdcParams};
pub use diagnosis::{diagnose, Limitation};
pub use capture::{SAMPLE_ADC_BITS, SAMPLE_ADC_DATA};
