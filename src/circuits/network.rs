use tracing::{debug, trace};

use crate::errors::Result;
use crate::math::{CScalar, Scalar};
use crate::units::Unit;

use super::component::{Component, IntoComponent, Orientation};
use super::element::{combine_parallel, combine_series};
use super::twoport::TwoPort;

/// Ladder network: components listed from the source end towards the load.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ladder {
    components: Vec<Component>,
}

impl Ladder {
    /// Creates an empty ladder, equivalent to a bare load.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Appends a component on the load side of the ladder.
    pub fn push(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Parses and appends a `(code, value)` pair.
    ///
    /// # Errors
    ///
    /// Propagates the error from [`Component::parse`]; the ladder is left unchanged.
    pub fn parse_push(&mut self, code: &str, value: impl Into<Unit>) -> Result<()> {
        self.components.push(Component::parse(code, value)?);
        Ok(())
    }

    /// Components in source-to-load order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Returns the number of components in the ladder.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true when no components are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Impedance seen from the source end when terminated by `load`.
    #[must_use]
    pub fn input_impedance(&self, freq_hz: Scalar, load: CScalar) -> CScalar {
        reduce(&self.components, freq_hz, load)
    }

    /// ABCD representation of the whole ladder at `freq_hz`.
    #[must_use]
    pub fn to_twoport(&self, freq_hz: Scalar) -> TwoPort {
        self.components
            .iter()
            .map(|component| TwoPort::from_component(component, freq_hz))
            .fold(TwoPort::identity(), |acc, stage| acc.cascade(&stage))
    }
}

impl From<Vec<Component>> for Ladder {
    fn from(components: Vec<Component>) -> Self {
        Self { components }
    }
}

impl FromIterator<Component> for Ladder {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl Extend<Component> for Ladder {
    fn extend<I: IntoIterator<Item = Component>>(&mut self, iter: I) {
        self.components.extend(iter);
    }
}

/// Folds `components` into a single impedance, starting at `load` and working
/// from the last (load-side) element back to the first.
///
/// An empty slice returns `load` unchanged.
#[must_use]
pub fn reduce(components: &[Component], freq_hz: Scalar, load: CScalar) -> CScalar {
    components.iter().rev().fold(load, |running, component| {
        let z = component.impedance(freq_hz);
        let next = match component.orientation() {
            Orientation::Series => combine_series(z, running),
            Orientation::Parallel => combine_parallel(z, running),
        };
        trace!(component = %component, z = %z, running = %next, "folded element");
        next
    })
}

/// Input impedance of a ladder given as `(code, value)` pairs or as
/// [`Component`]s, such as the output of
/// [`build_tline`](super::transmission::build_tline).
///
/// Codes are `<r|l|c><s|p>` in either case; values are numbers in base units
/// or engineering-notation strings. The list runs source to load and is
/// reduced load first. Every entry is validated before any arithmetic runs,
/// so with several bad entries the one nearest the source is reported.
///
/// ```
/// use ladder_zin::circuits::network::calc_zin;
///
/// let zin = calc_zin([("rs", 20.0)], 10e6, 25.0.into()).unwrap();
/// assert_eq!(zin.re, 45.0);
/// ```
///
/// # Errors
///
/// The first error from [`Component::parse`], in list order.
pub fn calc_zin<I>(components: I, freq_hz: Scalar, load: CScalar) -> Result<CScalar>
where
    I: IntoIterator,
    I::Item: IntoComponent,
{
    let ladder = components
        .into_iter()
        .map(IntoComponent::into_component)
        .collect::<Result<Ladder>>()?;

    debug!(components = ladder.len(), freq_hz, %load, "reducing ladder");
    let zin = ladder.input_impedance(freq_hz, load);
    debug!(%zin, "ladder reduced");
    Ok(zin)
}
