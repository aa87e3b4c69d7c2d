//! Frequency sweep utilities and post-processing helpers.

use crate::circuits::network::Ladder;
use crate::math::{real, CScalar, Scalar};

/// `n` frequencies spaced evenly per decade from `start_hz` to `stop_hz`.
///
/// Returns an empty grid unless both bounds are positive and finite.
#[must_use]
pub fn logspace_hz(start_hz: Scalar, stop_hz: Scalar, n: usize) -> Vec<Scalar> {
    let valid = |f: Scalar| f.is_finite() && f > 0.0;
    if !valid(start_hz) || !valid(stop_hz) {
        return Vec::new();
    }
    let (lo, hi) = (start_hz.log10(), stop_hz.log10());
    match n {
        0 => Vec::new(),
        1 => vec![start_hz],
        _ => {
            let step = (hi - lo) / (n - 1) as Scalar;
            (0..n).map(|i| 10f64.powf(lo + step * i as Scalar)).collect()
        }
    }
}

/// Input impedance of a ladder at a single frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyPoint {
    /// Frequency in Hz.
    pub freq_hz: Scalar,
    /// Impedance looking into the source end.
    pub impedance: CScalar,
}

/// Evaluates `ladder` terminated by `load` at every frequency in `freqs_hz`.
#[must_use]
pub fn sweep_zin<I>(ladder: &Ladder, freqs_hz: I, load: CScalar) -> Vec<FrequencyPoint>
where
    I: IntoIterator<Item = Scalar>,
{
    freqs_hz
        .into_iter()
        .map(|f| FrequencyPoint {
            freq_hz: f,
            impedance: ladder.input_impedance(f, load),
        })
        .collect()
}

/// Reflection coefficient of `z` against a real reference `z0`.
#[must_use]
pub fn reflection_coefficient(z: CScalar, z0: Scalar) -> CScalar {
    (z - real(z0)) / (z + real(z0))
}

/// Voltage standing wave ratio of `z` against `z0`; infinite for total reflection.
#[must_use]
pub fn vswr(z: CScalar, z0: Scalar) -> Scalar {
    let gamma = reflection_coefficient(z, z0).norm();
    if gamma >= 1.0 {
        Scalar::INFINITY
    } else {
        (1.0 + gamma) / (1.0 - gamma)
    }
}

/// Return loss in dB (positive for a passive mismatch).
#[must_use]
pub fn return_loss_db(z: CScalar, z0: Scalar) -> Scalar {
    -20.0 * reflection_coefficient(z, z0).norm().log10()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::component::Component;
    use approx::assert_relative_eq;

    #[test]
    fn logspace_spans_decades() {
        let v = logspace_hz(1e3, 1e6, 4);
        assert_eq!(v.len(), 4);
        assert_relative_eq!(v[0], 1e3, max_relative = 1e-12);
        assert_relative_eq!(v[1], 1e4, max_relative = 1e-12);
        assert_relative_eq!(v[3], 1e6, max_relative = 1e-12);
    }

    #[test]
    fn logspace_rejects_non_positive_bounds() {
        assert!(logspace_hz(0.0, 1e6, 10).is_empty());
        assert!(logspace_hz(-1e3, 1e6, 10).is_empty());
        assert!(logspace_hz(1e3, Scalar::INFINITY, 10).is_empty());
        assert_eq!(logspace_hz(1e3, 1e6, 1), vec![1e3]);
    }

    #[test]
    fn matched_network_is_matched_only_near_its_design_frequency() {
        let ladder: Ladder = [
            Component::parse("cp", "31.83p").unwrap(),
            Component::parse("ls", "55.70n").unwrap(),
        ]
        .into_iter()
        .collect();
        let points = sweep_zin(&ladder, [50e6, 100e6, 200e6], CScalar::new(25.0, -10.0));
        assert_eq!(points.len(), 3);
        assert_eq!(points[1].freq_hz, 100e6);

        let at_design = vswr(points[1].impedance, 50.0);
        assert!(at_design < 1.01, "vswr {at_design}");
        assert!(vswr(points[0].impedance, 50.0) > 1.5);
        assert!(vswr(points[2].impedance, 50.0) > 1.5);
        assert!(return_loss_db(points[1].impedance, 50.0) > 40.0);
    }

    #[test]
    fn open_and_short_reflect_fully() {
        assert_relative_eq!(reflection_coefficient(real(0.0), 50.0).re, -1.0);
        assert!(vswr(real(0.0), 50.0).is_infinite());
        assert_relative_eq!(return_loss_db(real(150.0), 50.0), -20.0 * 0.5f64.log10(), epsilon = 1e-12);
    }
}
