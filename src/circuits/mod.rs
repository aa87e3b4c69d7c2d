//! Lumped ladder networks and the transmission lines they approximate.

/// Reactance and series/parallel combination formulas.
pub mod element;
/// Typed ladder components and their code syntax.
pub mod component;
/// Ladder reduction to an input impedance.
pub mod network;
/// Two-port network representations.
pub mod twoport;
/// Transmission line lumped synthesis and closed-form reference model.
pub mod transmission;

pub use component::{Component, ComponentKind, IntoComponent, Orientation};
pub use element::{capacitive_reactance, combine_parallel, combine_series, inductive_reactance};
pub use network::{calc_zin, Ladder};
pub use transmission::{build_tline, Rlgc, TransmissionLine};
pub use twoport::TwoPort;
