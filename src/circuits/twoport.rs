//! ABCD view of a ladder, used to cross-check the right-to-left reduction.

use crate::math::{real, CScalar, Scalar};

use super::component::{Component, Orientation};

/// ABCD-based two-port network.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPort {
    /// A element of the ABCD matrix.
    pub a: CScalar,
    /// B element of the ABCD matrix.
    pub b: CScalar,
    /// C element of the ABCD matrix.
    pub c: CScalar,
    /// D element of the ABCD matrix.
    pub d: CScalar,
}

impl TwoPort {
    /// Identity two-port (through connection): [[1, 0], [0, 1]].
    #[must_use]
    pub fn identity() -> Self {
        Self::from_abcd(real(1.0), real(0.0), real(0.0), real(1.0))
    }

    /// Constructs a two-port from explicit ABCD elements.
    #[must_use]
    pub fn from_abcd(a: CScalar, b: CScalar, c: CScalar, d: CScalar) -> Self {
        Self { a, b, c, d }
    }

    /// Series impedance `Z` represented as a two-port.
    #[must_use]
    pub fn series_impedance(z: CScalar) -> Self {
        Self::from_abcd(real(1.0), z, real(0.0), real(1.0))
    }

    /// Shunt admittance `Y` represented as a two-port.
    #[must_use]
    pub fn shunt_admittance(y: CScalar) -> Self {
        Self::from_abcd(real(1.0), real(0.0), y, real(1.0))
    }

    /// Single ladder element at `freq_hz`.
    #[must_use]
    pub fn from_component(component: &Component, freq_hz: Scalar) -> Self {
        let z = component.impedance(freq_hz);
        match component.orientation() {
            Orientation::Series => Self::series_impedance(z),
            Orientation::Parallel => Self::shunt_admittance(z.inv()),
        }
    }

    /// ABCD determinant `ad - bc`.
    #[must_use]
    pub fn determinant(&self) -> CScalar {
        self.a * self.d - self.b * self.c
    }

    /// Cascades this two-port with `rhs` (i.e., self followed by rhs).
    #[must_use]
    pub fn cascade(&self, rhs: &Self) -> Self {
        Self {
            a: self.a * rhs.a + self.b * rhs.c,
            b: self.a * rhs.b + self.b * rhs.d,
            c: self.c * rhs.a + self.d * rhs.c,
            d: self.c * rhs.b + self.d * rhs.d,
        }
    }

    /// Input impedance at port 1 when port 2 is terminated by `z_load`.
    #[must_use]
    pub fn input_impedance(&self, z_load: CScalar) -> CScalar {
        (self.a * z_load + self.b) / (self.c * z_load + self.d)
    }
}
