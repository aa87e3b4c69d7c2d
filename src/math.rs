//! Shared numerical primitives.

use num_complex::Complex;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for impedances and admittances.
pub type CScalar = Complex<Scalar>;

/// Imaginary unit `j`.
pub const J: CScalar = Complex::new(0.0, 1.0);

/// Lifts a real value onto the real axis.
#[inline]
#[must_use]
pub fn real(value: Scalar) -> CScalar {
    Complex::new(value, 0.0)
}
