//! Uniform transmission lines: lumped ladder synthesis and the closed-form
//! distributed model it approximates.
//!
//! A line of length `ℓ` split into `n` blocks of length `a = ℓ / n` becomes `n`
//! copies of the block
//!
//! ```text
//! rs = R·a   ls = L·a   rp = 1/(G·a)   cp = C·a
//! ```
//!
//! listed source to load. More blocks track the distributed solution more
//! closely; nothing bounds `n`.
//!
//! `G == 0` makes every `rp` equal `+∞`. Folding that through
//! [`combine_parallel`](super::element::combine_parallel) evaluates `∞ · 0`, so
//! the reduced impedance of such a lumped line is `NaN + jNaN`. The closed-form
//! [`TransmissionLine::input_impedance`] stays finite for the same line. Give
//! lumped models a small non-zero `G` when they are to be reduced.

use tracing::debug;

use crate::constants::angular_frequency;
use crate::errors::Result;
use crate::math::{real, CScalar, Scalar, J};
use crate::units::{handle_units, Unit};

use super::component::{Component, ComponentKind, Orientation};

/// Distributed RLGC parameters per unit length.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rlgc {
    /// Series resistance per meter (Ω/m).
    pub r_per_m: Scalar,
    /// Series inductance per meter (H/m).
    pub l_per_m: Scalar,
    /// Shunt conductance per meter (S/m).
    pub g_per_m: Scalar,
    /// Shunt capacitance per meter (F/m).
    pub c_per_m: Scalar,
}

impl Rlgc {
    /// Parameters already expressed in base units.
    #[must_use]
    pub const fn new(r_per_m: Scalar, l_per_m: Scalar, g_per_m: Scalar, c_per_m: Scalar) -> Self {
        Self {
            r_per_m,
            l_per_m,
            g_per_m,
            c_per_m,
        }
    }

    /// Parameters given as numbers or engineering-notation strings.
    ///
    /// # Errors
    ///
    /// [`crate::errors::ZinError::InvalidFormat`] for the first value that does not decode.
    pub fn from_units(
        r0: impl Into<Unit>,
        l0: impl Into<Unit>,
        g0: impl Into<Unit>,
        c0: impl Into<Unit>,
    ) -> Result<Self> {
        Ok(Self::new(
            handle_units(r0)?,
            handle_units(l0)?,
            handle_units(g0)?,
            handle_units(c0)?,
        ))
    }

    /// Lossless line parameters (R=G=0).
    ///
    /// Suited to the closed-form model only: the lumped blocks of a `G == 0`
    /// line reduce to `NaN`, see [`Self::block`].
    #[must_use]
    pub const fn lossless(l_per_m: Scalar, c_per_m: Scalar) -> Self {
        Self::new(0.0, l_per_m, 0.0, c_per_m)
    }

    /// One lumped block of length `a`, in the order `rs, ls, rp, cp`.
    ///
    /// With `G == 0` the shunt resistance is `+∞`. The value is kept as-is, and
    /// reducing a ladder that contains it yields `NaN + jNaN`.
    #[must_use]
    pub fn block(&self, a: Scalar) -> [Component; 4] {
        [
            Component::new(ComponentKind::Resistor, Orientation::Series, self.r_per_m * a),
            Component::new(ComponentKind::Inductor, Orientation::Series, self.l_per_m * a),
            Component::new(ComponentKind::Resistor, Orientation::Parallel, 1.0 / (self.g_per_m * a)),
            Component::new(ComponentKind::Capacitor, Orientation::Parallel, self.c_per_m * a),
        ]
    }

    /// `num_blocks` identical blocks covering `length_m`; empty when `num_blocks == 0`.
    ///
    /// Reduces to `NaN` when `G == 0`, see [`Self::block`].
    #[must_use]
    pub fn lumped(&self, num_blocks: usize, length_m: Scalar) -> Vec<Component> {
        if num_blocks == 0 {
            return Vec::new();
        }
        let a = length_m / num_blocks as Scalar;
        debug!(num_blocks, length_m, segment_m = a, "building lumped line model");
        self.block(a).repeat(num_blocks)
    }

    /// Series impedance per meter `R + jωL`.
    #[must_use]
    pub fn series_impedance(&self, freq_hz: Scalar) -> CScalar {
        real(self.r_per_m) + J * angular_frequency(freq_hz) * self.l_per_m
    }

    /// Shunt admittance per meter `G + jωC`.
    #[must_use]
    pub fn shunt_admittance(&self, freq_hz: Scalar) -> CScalar {
        real(self.g_per_m) + J * angular_frequency(freq_hz) * self.c_per_m
    }
}

/// Lumped ladder approximation of a uniform line.
///
/// `length` is the physical line length; `r0, l0, g0, c0` are per-unit-length
/// resistance, inductance, conductance and capacitance, each a number or an
/// engineering-notation string. The result holds `4 * num_blocks` components.
///
/// `g0 == 0` gives shunt resistors of `+∞`; reducing the result then yields
/// `NaN + jNaN` rather than an error.
///
/// # Errors
///
/// [`crate::errors::ZinError::InvalidFormat`] when a per-unit value does not decode.
pub fn build_tline(
    num_blocks: usize,
    length: Scalar,
    r0: impl Into<Unit>,
    l0: impl Into<Unit>,
    g0: impl Into<Unit>,
    c0: impl Into<Unit>,
) -> Result<Vec<Component>> {
    Ok(Rlgc::from_units(r0, l0, g0, c0)?.lumped(num_blocks, length))
}

/// Transmission line descriptor (uniform, per-unit-length parameters).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransmissionLine {
    /// Physical length in meters.
    pub length_m: Scalar,
    /// Distributed parameters.
    pub rlgc: Rlgc,
}

impl TransmissionLine {
    /// Line of length `length_m` with the given RLGC per-unit parameters.
    #[must_use]
    pub const fn new(length_m: Scalar, rlgc: Rlgc) -> Self {
        Self { length_m, rlgc }
    }

    /// Lossless line shortcut.
    ///
    /// [`Self::input_impedance`] is finite for it, but its
    /// [`Self::lumped_model`] reduces to `NaN` because `G == 0`.
    #[must_use]
    pub const fn lossless(length_m: Scalar, l_per_m: Scalar, c_per_m: Scalar) -> Self {
        Self::new(length_m, Rlgc::lossless(l_per_m, c_per_m))
    }

    /// Characteristic impedance `sqrt((R + jωL) / (G + jωC))`.
    #[must_use]
    pub fn characteristic_impedance(&self, freq_hz: Scalar) -> CScalar {
        (self.rlgc.series_impedance(freq_hz) / self.rlgc.shunt_admittance(freq_hz)).sqrt()
    }

    /// Propagation constant `sqrt((R + jωL)(G + jωC))` per meter.
    #[must_use]
    pub fn propagation_constant(&self, freq_hz: Scalar) -> CScalar {
        (self.rlgc.series_impedance(freq_hz) * self.rlgc.shunt_admittance(freq_hz)).sqrt()
    }

    /// Exact input impedance with load `z_load` at `freq_hz`.
    #[must_use]
    pub fn input_impedance(&self, freq_hz: Scalar, z_load: CScalar) -> CScalar {
        let series = self.rlgc.series_impedance(freq_hz);
        let shunt = self.rlgc.shunt_admittance(freq_hz);
        // Degenerate shunt: the line is a plain series impedance.
        if shunt.norm() == 0.0 {
            return z_load + series * self.length_m;
        }
        let zc = (series / shunt).sqrt();
        let t = ((series * shunt).sqrt() * self.length_m).tanh();
        (zc * (z_load + zc * t)) / (zc + z_load * t)
    }

    /// Lumped ladder with `num_blocks` blocks, see [`build_tline`].
    ///
    /// Reduces to `NaN` when `G == 0`, see [`Rlgc::block`].
    #[must_use]
    pub fn lumped_model(&self, num_blocks: usize) -> Vec<Component> {
        self.rlgc.lumped(num_blocks, self.length_m)
    }
}
