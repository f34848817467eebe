//! Spectral analysis of ADC captures

pub mod windowing;
pub mod fft;
pub mod analysis;

pub use windowing::{apply_window, select_window, WindowDescriptor, WindowKind};
pub use fft::{FftEngine, OneSidedSpectrum};
pub use analysis::{analyze_from_codes, AnalysisResult, AnalyzerConfig, SpectrumAnalyzer};
