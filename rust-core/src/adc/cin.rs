//! Buffer capacitor sizing for a sample-and-hold input

use std::f64::consts::PI;

/// Passband ripple assumed when none is given
pub const DEFAULT_RIPPLE_DB: f64 = 0.1;

const EPS: f64 = 1e-30;

/// Bounds for the external buffer capacitor C_in in front of an S/H stage
///
/// Lower bound: charge sharing with C_S/H must disturb the held voltage by
/// less than half an LSB for a step of `v_step` (defaults to `v_ref`):
/// `C_in >= C_S/H · (ΔV / ½LSB − 1)`.
///
/// Upper bound: the R_ext·C_in low-pass must keep its corner above the
/// signal by the ripple margin `K = 1/√(10^(ripple/10) − 1)`:
/// `C_in <= 1 / (2π · R_ext · K · f_sig)`.
///
/// # Returns
/// `(min, max)`; `(0, 0)` when any required input is not positive. When the
/// bounds cross, they come back swapped as `(max, min)`, meaning no capacitor
/// satisfies both.
pub fn cin_range(
    r_ext: f64,
    sig_freq: f64,
    csh: f64,
    v_ref: f64,
    n_bits: u32,
    ripple_db: f64,
    v_step: Option<f64>,
) -> (f64, f64) {
    if !(r_ext > 0.0) || !(sig_freq > 0.0) || !(csh > 0.0) || !(v_ref > 0.0) || n_bits == 0 {
        return (0.0, 0.0);
    }

    let half_lsb = v_ref / 2f64.powf(n_bits as f64 + 1.0);
    let dv_step = v_step.unwrap_or(v_ref);
    let mut c_min = csh * (dv_step / half_lsb.max(EPS) - 1.0);
    if !c_min.is_finite() || c_min < 0.0 {
        c_min = 0.0;
    }

    let denom = 10f64.powf(ripple_db / 10.0) - 1.0;
    if !(denom > 0.0) {
        return (0.0, 0.0);
    }
    let k = 1.0 / denom.sqrt();
    let fc = k * sig_freq;
    let c_max = 1.0 / (2.0 * PI * r_ext.max(EPS) * fc.max(EPS));

    if !c_max.is_finite() || c_min > c_max {
        tracing::debug!(c_min, c_max, "buffer capacitor bounds infeasible");
        return (c_max, c_min);
    }

    (c_min, c_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_inputs() {
        assert_eq!(cin_range(0.0, 10e3, 5e-12, 3.3, 12, 0.1, None), (0.0, 0.0));
        assert_eq!(cin_range(50e3, -1.0, 5e-12, 3.3, 12, 0.1, None), (0.0, 0.0));
        assert_eq!(cin_range(50e3, 10e3, 0.0, 3.3, 12, 0.1, None), (0.0, 0.0));
        assert_eq!(cin_range(50e3, 10e3, 5e-12, 0.0, 12, 0.1, None), (0.0, 0.0));
        assert_eq!(cin_range(50e3, 10e3, 5e-12, 3.3, 0, 0.1, None), (0.0, 0.0));
        assert_eq!(cin_range(f64::NAN, 10e3, 5e-12, 3.3, 12, 0.1, None), (0.0, 0.0));
        // Zero ripple leaves no margin
        assert_eq!(cin_range(50e3, 10e3, 5e-12, 3.3, 12, 0.0, None), (0.0, 0.0));
    }

    #[test]
    fn test_feasible_range() {
        // Small step on an 8-bit converter through a low source impedance
        let (c_min, c_max) = cin_range(100.0, 1e3, 5e-12, 3.3, 8, DEFAULT_RIPPLE_DB, Some(0.01));

        let half_lsb = 3.3 / 512.0;
        let expected_min = 5e-12 * (0.01 / half_lsb - 1.0);
        assert!((c_min - expected_min).abs() < 1e-24);

        let k = 1.0 / (10f64.powf(0.01) - 1.0).sqrt();
        let expected_max = 1.0 / (2.0 * PI * 100.0 * k * 1e3);
        assert!((c_max - expected_max).abs() / expected_max < 1e-12);

        assert!(c_min <= c_max);
    }

    #[test]
    fn test_step_below_half_lsb_clamps_min() {
        let (c_min, c_max) = cin_range(100.0, 1e3, 5e-12, 3.3, 8, DEFAULT_RIPPLE_DB, Some(1e-3));
        assert_eq!(c_min, 0.0);
        assert!(c_max > 0.0);
    }

    #[test]
    fn test_infeasible_bounds_come_back_swapped() {
        // Full-scale step on a 12-bit ADC behind 50 kΩ: the charge-sharing
        // bound (~41 nF) sits far above the bandwidth bound (~49 pF)
        let (first, second) = cin_range(50e3, 10e3, 5e-12, 3.3, 12, DEFAULT_RIPPLE_DB, Some(3.3));

        let c_min = 5e-12 * (8192.0 - 1.0);
        assert!((second - c_min).abs() / c_min < 1e-12);
        assert!(first < second);
        assert!(first > 4e-11 && first < 6e-11);
    }

    #[test]
    fn test_huge_resolution_stays_finite() {
        // Half an LSB underflows to zero; the charge-sharing bound saturates
        for n_bits in [i32::MAX as u32, u32::MAX] {
            let (first, second) =
                cin_range(50e3, 10e3, 5e-12, 3.3, n_bits, DEFAULT_RIPPLE_DB, None);
            assert!(first.is_finite() && second.is_finite());
            assert!(first < second, "n_bits {}: ({}, {})", n_bits, first, second);
        }
    }
}
