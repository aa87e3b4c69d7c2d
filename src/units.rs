//! Engineering-notation component values.
//!
//! A component value is either a plain number or a string such as `"30n"` or
//! `"1.5k"`: a decimal magnitude immediately followed by exactly one SI prefix
//! character. [`handle_units`] is the single place where either form is turned
//! into a number; everything that accepts a value goes through it.
//!
//! The grammar is strict. Signs, exponents, whitespace, bare numbers and bare
//! prefixes are all rejected rather than guessed at.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{Result, ZinError};
use crate::math::Scalar;

static UNIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+\.[0-9]+|[0-9]+|\.[0-9]+)([GMkhcmunp])$")
        .expect("unit pattern is a valid regex")
});

/// Single-character SI prefixes accepted after a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiPrefix {
    /// `G`, 1e9.
    Giga,
    /// `M`, 1e6.
    Mega,
    /// `k`, 1e3.
    Kilo,
    /// `h`, 1e2.
    Hecto,
    /// `c`, 1e-2.
    Centi,
    /// `m`, 1e-3.
    Milli,
    /// `u`, 1e-6.
    Micro,
    /// `n`, 1e-9.
    Nano,
    /// `p`, 1e-12.
    Pico,
}

impl SiPrefix {
    /// Every accepted prefix, largest first.
    pub const ALL: [Self; 9] = [
        Self::Giga,
        Self::Mega,
        Self::Kilo,
        Self::Hecto,
        Self::Centi,
        Self::Milli,
        Self::Micro,
        Self::Nano,
        Self::Pico,
    ];

    /// Looks up a prefix by its symbol. Symbols are case-sensitive (`m` vs `M`).
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|prefix| prefix.symbol() == symbol)
    }

    /// The character written after the magnitude.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Giga => 'G',
            Self::Mega => 'M',
            Self::Kilo => 'k',
            Self::Hecto => 'h',
            Self::Centi => 'c',
            Self::Milli => 'm',
            Self::Micro => 'u',
            Self::Nano => 'n',
            Self::Pico => 'p',
        }
    }

    /// Multiplier applied to the magnitude.
    #[must_use]
    pub const fn factor(self) -> Scalar {
        match self {
            Self::Giga => 1e9,
            Self::Mega => 1e6,
            Self::Kilo => 1e3,
            Self::Hecto => 1e2,
            Self::Centi => 1e-2,
            Self::Milli => 1e-3,
            Self::Micro => 1e-6,
            Self::Nano => 1e-9,
            Self::Pico => 1e-12,
        }
    }
}

/// A component value as supplied by a caller: a raw number or a scaled string.
#[derive(Debug, Clone, PartialEq)]
pub enum Unit {
    /// Value already expressed in the base unit (ohms, henries, farads, ...).
    Numeric(Scalar),
    /// Engineering-notation text, decoded on use.
    Scaled(String),
}

impl Unit {
    /// Resolves the value to a number in the base unit.
    ///
    /// # Errors
    ///
    /// Returns [`ZinError::InvalidFormat`] when a scaled string does not decode.
    pub fn value(&self) -> Result<Scalar> {
        match self {
            Self::Numeric(value) => Ok(*value),
            Self::Scaled(text) => decode_unit(text),
        }
    }
}

impl From<f64> for Unit {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<f32> for Unit {
    fn from(value: f32) -> Self {
        Self::Numeric(Scalar::from(value))
    }
}

impl From<i32> for Unit {
    fn from(value: i32) -> Self {
        Self::Numeric(Scalar::from(value))
    }
}

impl From<u32> for Unit {
    fn from(value: u32) -> Self {
        Self::Numeric(Scalar::from(value))
    }
}

impl From<&str> for Unit {
    fn from(text: &str) -> Self {
        Self::Scaled(text.to_owned())
    }
}

impl From<String> for Unit {
    fn from(text: String) -> Self {
        Self::Scaled(text)
    }
}

impl From<&Unit> for Unit {
    fn from(unit: &Unit) -> Self {
        unit.clone()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Scaled(text) => f.write_str(text),
        }
    }
}

/// Decodes an engineering-notation string such as `"30n"` or `".1m"`.
///
/// The whole string must be a magnitude (`12`, `1.5`, `.5`) followed by one
/// of `G M k h c m u n p`.
///
/// # Errors
///
/// Returns [`ZinError::InvalidFormat`] carrying `text` for any other shape.
pub fn decode_unit(text: &str) -> Result<Scalar> {
    let invalid = || ZinError::InvalidFormat(text.to_owned());
    let captures = UNIT_PATTERN.captures(text).ok_or_else(invalid)?;

    let magnitude: Scalar = captures[1].parse().map_err(|_| invalid())?;
    let prefix = captures[2]
        .chars()
        .next()
        .and_then(SiPrefix::from_symbol)
        .ok_or_else(invalid)?;

    Ok(magnitude * prefix.factor())
}

/// Normalizes any supported value to a number.
///
/// Numbers pass through untouched, strings are decoded with [`decode_unit`].
///
/// # Errors
///
/// Returns [`ZinError::InvalidFormat`] when a string value does not decode.
pub fn handle_units(value: impl Into<Unit>) -> Result<Scalar> {
    value.into().value()
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{self, MapAccess, SeqAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Unit;
    use crate::errors::ZinError;

    impl Serialize for Unit {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Self::Numeric(value) => serializer.serialize_f64(*value),
                Self::Scaled(text) => serializer.serialize_str(text),
            }
        }
    }

    struct UnitVisitor;

    fn mismatch<E: de::Error>(found: &str) -> E {
        E::custom(ZinError::TypeMismatch(found.to_owned()))
    }

    impl<'de> Visitor<'de> for UnitVisitor {
        type Value = Unit;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or an engineering-notation string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Unit, E> {
            Ok(Unit::Numeric(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Unit, E> {
            Ok(Unit::Numeric(v as f64))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Unit, E> {
            Ok(Unit::Numeric(v as f64))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Unit, E> {
            Ok(Unit::Scaled(v.to_owned()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Unit, E> {
            Ok(Unit::Scaled(v))
        }

        fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Unit, E> {
            Err(mismatch("a boolean"))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Unit, E> {
            Err(mismatch("null"))
        }

        fn visit_none<E: de::Error>(self) -> Result<Unit, E> {
            Err(mismatch("null"))
        }

        fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<Unit, A::Error> {
            Err(mismatch("a sequence"))
        }

        fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<Unit, A::Error> {
            Err(mismatch("a map"))
        }
    }

    impl<'de> Deserialize<'de> for Unit {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(UnitVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn decodes_valid_engineering_notation() {
        let cases = [("30n", 3e-8), (".1m", 1e-4), ("0.25k", 250.0), ("2G", 2e9), ("47p", 47e-12)];
        for (text, expected) in cases {
            let value = decode_unit(text).unwrap();
            assert_relative_eq!(value, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn every_prefix_round_trips_through_its_symbol() {
        for prefix in SiPrefix::ALL {
            let text = format!("3{}", prefix.symbol());
            assert_relative_eq!(decode_unit(&text).unwrap(), 3.0 * prefix.factor());
        }
    }

    #[test]
    fn rejects_malformed_text() {
        let invalid = [
            "3b", "0.1", "M", "0.34km", "-0.15M", "+1k", "1e3k", "1.k", "1.2.3k", "", " 30n",
            "30n ", "30n\n", "30N", "\u{663}n",
        ];
        for text in invalid {
            assert_eq!(
                decode_unit(text),
                Err(ZinError::InvalidFormat(text.to_owned())),
                "{text:?} should not decode"
            );
        }
    }

    #[test]
    fn handle_units_passes_numbers_through() {
        assert_relative_eq!(handle_units("15.5m").unwrap(), 0.0155);
        assert_eq!(handle_units(10e-3).unwrap(), 10e-3);
        assert_eq!(handle_units(20).unwrap(), 20.0);
        assert_eq!(handle_units(Unit::Numeric(-4.5)).unwrap(), -4.5);
    }

    #[test]
    fn handle_units_surfaces_decode_failures() {
        assert!(matches!(handle_units("12"), Err(ZinError::InvalidFormat(_))));
    }

    #[test]
    fn display_keeps_the_original_text() {
        assert_eq!(Unit::from("31.83p").to_string(), "31.83p");
        assert_eq!(Unit::from(2.5).to_string(), "2.5");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_numbers_and_strings() {
        let units: Vec<Unit> = serde_json::from_str(r#"[20, 1.5, "30n"]"#).unwrap();
        assert_eq!(
            units,
            vec![Unit::Numeric(20.0), Unit::Numeric(1.5), Unit::Scaled("30n".into())]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn other_json_types_are_a_type_mismatch() {
        for json in ["[]", "{}", "true", "null"] {
            let err = serde_json::from_str::<Unit>(json).unwrap_err();
            assert!(
                err.to_string().contains("type mismatch"),
                "{json} gave unexpected error: {err}"
            );
        }
    }
}
