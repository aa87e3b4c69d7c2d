//! Two-terminal element formulas.
//!
//! All functions are total over finite inputs and follow IEEE-754 semantics at
//! their poles: nothing here raises, a degenerate input shows up as a
//! non-finite impedance which the caller can test with `is_finite()`.

use crate::constants::angular_frequency;
use crate::math::{CScalar, Scalar};

/// Impedance `1 / (j 2π f C)` of a capacitor of `capacitance_f` farads at `freq_hz`.
///
/// A zero capacitance or zero frequency gives `0 - j∞`, an open circuit.
#[inline]
#[must_use]
pub fn capacitive_reactance(capacitance_f: Scalar, freq_hz: Scalar) -> CScalar {
    CScalar::new(0.0, -1.0 / (angular_frequency(freq_hz) * capacitance_f))
}

/// Impedance `j 2π f L` of an inductor of `inductance_h` henries at `freq_hz`.
#[inline]
#[must_use]
pub fn inductive_reactance(inductance_h: Scalar, freq_hz: Scalar) -> CScalar {
    CScalar::new(0.0, angular_frequency(freq_hz) * inductance_h)
}

/// Two impedances in series.
#[inline]
#[must_use]
pub fn combine_series(z1: CScalar, z2: CScalar) -> CScalar {
    z1 + z2
}

/// Two impedances in parallel, `z1 z2 / (z1 + z2)`.
///
/// At anti-resonance (`z1 + z2 == 0`) the result is non-finite.
#[inline]
#[must_use]
pub fn combine_parallel(z1: CScalar, z2: CScalar) -> CScalar {
    (z1 * z2) / (z1 + z2)
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn capacitor_reactance_is_negative_imaginary() {
        let z = capacitive_reactance(1e-8, 1e6);
        assert_abs_diff_eq!(z.re, 0.0);
        assert_abs_diff_eq!(z.im, -15.91549, epsilon = 1e-5);
    }

    #[test]
    fn inductor_reactance_is_positive_imaginary() {
        let z = inductive_reactance(1e-4, 1e5);
        assert_abs_diff_eq!(z.re, 0.0);
        assert_abs_diff_eq!(z.im, 62.83185, epsilon = 1e-5);
    }

    #[test]
    fn series_adds() {
        let z = combine_series(CScalar::new(3.0, 4.0), CScalar::new(10.0, -15.0));
        assert_eq!(z, CScalar::new(13.0, -11.0));
    }

    #[test]
    fn parallel_uses_product_over_sum() {
        let z = combine_parallel(CScalar::new(3.0, 4.0), CScalar::new(10.0, -15.0));
        assert_abs_diff_eq!(z.re, 4.22413, epsilon = 1e-4);
        assert_abs_diff_eq!(z.im, 3.18965, epsilon = 1e-4);
    }

    #[test]
    fn equal_resistors_in_parallel_halve() {
        let z = combine_parallel(CScalar::new(100.0, 0.0), CScalar::new(100.0, 0.0));
        assert_relative_eq!(z.re, 50.0);
        assert_relative_eq!(z.im, 0.0);
    }

    #[test]
    fn capacitor_at_dc_is_an_open_circuit() {
        let z = capacitive_reactance(1e-9, 0.0);
        assert_eq!(z.re, 0.0);
        assert!(z.im.is_infinite() && z.im < 0.0);

        let z = capacitive_reactance(0.0, 1e6);
        assert!(z.im.is_infinite());
    }

    #[test]
    fn anti_resonance_is_not_finite() {
        let z = combine_parallel(CScalar::new(0.0, 50.0), CScalar::new(0.0, -50.0));
        assert!(!z.is_finite());
    }
}
