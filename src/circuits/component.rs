use std::fmt;

use crate::errors::{Result, ZinError};
use crate::math::{real, CScalar, Scalar};
use crate::units::{handle_units, Unit};

use super::element::{capacitive_reactance, inductive_reactance};

/// Lumped element type, the first character of a component code.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// `r`, value in ohms.
    Resistor,
    /// `l`, value in henries.
    Inductor,
    /// `c`, value in farads.
    Capacitor,
}

impl ComponentKind {
    /// Parses a kind character, ignoring case.
    ///
    /// # Errors
    ///
    /// [`ZinError::InvalidComponent`] for anything but `r`, `l` or `c`.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol.to_ascii_lowercase() {
            'r' => Ok(Self::Resistor),
            'l' => Ok(Self::Inductor),
            'c' => Ok(Self::Capacitor),
            _ => Err(ZinError::InvalidComponent(symbol)),
        }
    }

    /// Canonical lower-case symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Resistor => 'r',
            Self::Inductor => 'l',
            Self::Capacitor => 'c',
        }
    }
}

/// How an element attaches to the part of the ladder between it and the load.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `s`, in the signal path; impedances add.
    Series,
    /// `p`, shunt across the signal path; admittances add.
    Parallel,
}

impl Orientation {
    /// Parses an orientation character, ignoring case.
    ///
    /// # Errors
    ///
    /// [`ZinError::InvalidOrientation`] for anything but `s` or `p`.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol.to_ascii_lowercase() {
            's' => Ok(Self::Series),
            'p' => Ok(Self::Parallel),
            _ => Err(ZinError::InvalidOrientation(symbol)),
        }
    }

    /// Canonical lower-case symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Series => 's',
            Self::Parallel => 'p',
        }
    }
}

/// One validated ladder element: kind, orientation and a value in base units.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawComponent", into = "RawComponent")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    kind: ComponentKind,
    orientation: Orientation,
    value: Scalar,
}

impl Component {
    /// Creates a component from already-typed parts.
    #[must_use]
    pub const fn new(kind: ComponentKind, orientation: Orientation, value: Scalar) -> Self {
        Self {
            kind,
            orientation,
            value,
        }
    }

    /// Parses a `(code, value)` pair such as `("cp", "31.83p")` or `("RS", 20.0)`.
    ///
    /// # Errors
    ///
    /// [`ZinError::MalformedCode`] unless `code` has exactly two characters,
    /// [`ZinError::InvalidFormat`] for an undecodable value, then
    /// [`ZinError::InvalidComponent`] / [`ZinError::InvalidOrientation`] for a
    /// bad kind or orientation character.
    pub fn parse(code: &str, value: impl Into<Unit>) -> Result<Self> {
        let mut chars = code.chars();
        let (Some(kind), Some(orientation), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ZinError::MalformedCode(code.to_owned()));
        };

        let value = handle_units(value)?;
        Ok(Self::new(
            ComponentKind::from_symbol(kind)?,
            Orientation::from_symbol(orientation)?,
            value,
        ))
    }

    /// Element type.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Series or shunt placement.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Value in ohms, henries or farads depending on [`Self::kind`].
    #[must_use]
    pub const fn value(&self) -> Scalar {
        self.value
    }

    /// Canonical two-character code, e.g. `"ls"`.
    #[must_use]
    pub fn code(&self) -> String {
        [self.kind.symbol(), self.orientation.symbol()].iter().collect()
    }

    /// Two-terminal impedance of the element alone at `freq_hz`.
    #[must_use]
    pub fn impedance(&self, freq_hz: Scalar) -> CScalar {
        match self.kind {
            ComponentKind::Resistor => real(self.value),
            ComponentKind::Inductor => inductive_reactance(self.value, freq_hz),
            ComponentKind::Capacitor => capacitive_reactance(self.value, freq_hz),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:e}", self.code(), self.value)
    }
}

/// Anything that can stand for one ladder element: a validated [`Component`]
/// or a `(code, value)` pair still to be parsed.
pub trait IntoComponent {
    /// Converts into a validated component.
    ///
    /// # Errors
    ///
    /// Whatever [`Component::parse`] reports for an unparsed pair.
    fn into_component(self) -> Result<Component>;
}

impl IntoComponent for Component {
    fn into_component(self) -> Result<Component> {
        Ok(self)
    }
}

impl IntoComponent for &Component {
    fn into_component(self) -> Result<Component> {
        Ok(*self)
    }
}

impl<S, U> IntoComponent for (S, U)
where
    S: AsRef<str>,
    U: Into<Unit>,
{
    fn into_component(self) -> Result<Component> {
        Component::parse(self.0.as_ref(), self.1)
    }
}

/// Serialized form of a [`Component`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawComponent {
    code: String,
    value: Unit,
}

#[cfg(feature = "serde")]
impl TryFrom<RawComponent> for Component {
    type Error = ZinError;

    fn try_from(raw: RawComponent) -> Result<Self> {
        Self::parse(&raw.code, raw.value)
    }
}

#[cfg(feature = "serde")]
impl From<Component> for RawComponent {
    fn from(component: Component) -> Self {
        Self {
            code: component.code(),
            value: Unit::Numeric(component.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        let c = Component::parse("Cp", "31.83p").unwrap();
        assert_eq!(c.kind(), ComponentKind::Capacitor);
        assert_eq!(c.orientation(), Orientation::Parallel);
        assert_relative_eq!(c.value(), 31.83e-12);
        assert_eq!(c.code(), "cp");

        let l = Component::parse("LS", 55.7e-9).unwrap();
        assert_eq!(l.code(), "ls");
    }

    #[test]
    fn rejects_unknown_kind_and_orientation() {
        assert_eq!(Component::parse("xs", 1.0), Err(ZinError::InvalidComponent('x')));
        assert_eq!(Component::parse("rq", 1.0), Err(ZinError::InvalidOrientation('q')));
        assert_eq!(Component::parse("Zs", 1.0), Err(ZinError::InvalidComponent('Z')));
    }

    #[test]
    fn rejects_codes_of_the_wrong_length() {
        for code in ["", "r", "rsp"] {
            assert_eq!(
                Component::parse(code, 1.0),
                Err(ZinError::MalformedCode(code.to_owned()))
            );
        }
    }

    #[test]
    fn bad_values_are_reported_as_format_errors() {
        assert_eq!(
            Component::parse("cp", "10x"),
            Err(ZinError::InvalidFormat("10x".into()))
        );
    }

    #[test]
    fn resistor_impedance_is_real_and_frequency_independent() {
        let r = Component::new(ComponentKind::Resistor, Orientation::Series, 20.0);
        for f in [0.0, 1.0, 1e9] {
            assert_eq!(r.impedance(f), CScalar::new(20.0, 0.0));
        }
    }

    #[test]
    fn reactive_impedances_have_opposite_signs() {
        let l = Component::parse("ls", "1u").unwrap();
        let c = Component::parse("cs", "1n").unwrap();
        assert!(l.impedance(1e6).im > 0.0);
        assert!(c.impedance(1e6).im < 0.0);
        assert_abs_diff_eq!(l.impedance(1e6).re, 0.0);
    }

    #[test]
    fn pairs_and_components_convert_alike() {
        let parsed = ("LP", "79.58n").into_component().unwrap();
        assert_eq!(parsed.code(), "lp");
        assert_eq!((&parsed).into_component(), Ok(parsed));
        assert_eq!(parsed.into_component(), Ok(parsed));
        assert_eq!(("l", 1.0_f64).into_component(), Err(ZinError::MalformedCode("l".into())));
    }

    #[test]
    fn display_shows_code_and_value() {
        let c = Component::parse("rs", "1k").unwrap();
        assert_eq!(c.to_string(), "rs=1e3");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates_components() {
        let c: Component = serde_json::from_str(r#"{"code": "cp", "value": "10n"}"#).unwrap();
        assert_relative_eq!(c.value(), 10e-9);

        let err = serde_json::from_str::<Component>(r#"{"code": "xp", "value": 1}"#).unwrap_err();
        assert!(err.to_string().contains("not a valid component"));

        let err = serde_json::from_str::<Component>(r#"{"code": "rs", "value": [1]}"#).unwrap_err();
        assert!(err.to_string().contains("type mismatch"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_to_code_and_numeric_value() {
        let c = Component::parse("rs", "1k").unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"code":"rs","value":1000.0}"#);
    }
}
