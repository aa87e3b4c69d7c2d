//! Convenience re-exports for evaluating ladder networks.

pub use crate::circuits::{
    component::{Component, ComponentKind, IntoComponent, Orientation},
    element::{capacitive_reactance, combine_parallel, combine_series, inductive_reactance},
    network::{calc_zin, Ladder},
    transmission::{build_tline, Rlgc, TransmissionLine},
    twoport::TwoPort,
};
pub use crate::constants::angular_frequency;
pub use crate::errors::{Result, ZinError};
pub use crate::math::{CScalar, Scalar};
pub use crate::sweep::{
    logspace_hz, reflection_coefficient, return_loss_db, sweep_zin, vswr, FrequencyPoint,
};
pub use crate::units::{decode_unit, handle_units, SiPrefix, Unit};
