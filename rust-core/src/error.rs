//! Error types for the ADC toolkit

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdcError {
    #[error("Insufficient data: {len} samples (need at least {min})")]
    InsufficientData { len: usize, min: usize },

    #[error("Cannot parse quantity: {0:?}")]
    InvalidQuantity(String),

    #[error("No numeric samples found in input")]
    NoSamples,
}
