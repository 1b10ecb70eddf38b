//! Numeric value and unit handling.
//!
//! `parse_unit` splits dimension inputs like `"16px"` or `40` into a value
//! and a unit, supplying a default unit when the input carries none.
//! `to_css_property` renders property values (numbers, strings, or lists
//! of either) into declaration value strings.

use std::sync::LazyLock;

use regex::Regex;

static UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\d.+-]*)\s*(.*)$").unwrap());

/// A dimension argument: a bare number or a `"16px"`-style string.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitInput {
    Number(f64),
    Text(String),
}

impl From<f64> for UnitInput {
    fn from(value: f64) -> Self {
        UnitInput::Number(value)
    }
}

impl From<i32> for UnitInput {
    fn from(value: i32) -> Self {
        UnitInput::Number(f64::from(value))
    }
}

impl From<u32> for UnitInput {
    fn from(value: u32) -> Self {
        UnitInput::Number(f64::from(value))
    }
}

impl From<&str> for UnitInput {
    fn from(value: &str) -> Self {
        UnitInput::Text(value.to_string())
    }
}

impl From<String> for UnitInput {
    fn from(value: String) -> Self {
        UnitInput::Text(value)
    }
}

/// Split a dimension into its numeric value and unit.
///
/// Numbers take `default_unit` as-is. Strings split into a leading numeric
/// part and the unit that follows; an empty unit falls back to
/// `default_unit`, and an unparseable numeric part yields `NaN`.
///
/// ```
/// use stylemix_core::parse_unit;
///
/// assert_eq!(parse_unit(16, "px"), (16.0, "px".to_string()));
/// assert_eq!(parse_unit("1.5em", "px"), (1.5, "em".to_string()));
/// ```
pub fn parse_unit(value: impl Into<UnitInput>, default_unit: &str) -> (f64, String) {
    match value.into() {
        UnitInput::Number(n) => (n, default_unit.to_string()),
        UnitInput::Text(s) => match UNIT.captures(&s) {
            Some(caps) => {
                let number = caps[1].parse::<f64>().unwrap_or(f64::NAN);
                let unit = &caps[2];
                if unit.is_empty() {
                    (number, default_unit.to_string())
                } else {
                    (number, unit.to_string())
                }
            }
            None => (f64::NAN, default_unit.to_string()),
        },
    }
}

/// A value renderable as a CSS declaration value: numbers get a unit
/// suffix, strings pass through, lists join with commas.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
    List(Vec<PropertyValue>),
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Number(f64::from(value))
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(values: Vec<T>) -> Self {
        PropertyValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Render a property value, suffixing numbers with `unit` when given.
///
/// Strings never take the unit suffix, so `"1s"` stays `"1s"` even with a
/// `ms` unit in scope.
pub fn to_css_property(value: impl Into<PropertyValue>, unit: Option<&str>) -> String {
    match value.into() {
        PropertyValue::Number(n) => {
            format!("{}{}", crate::format_number(n), unit.unwrap_or(""))
        }
        PropertyValue::Text(s) => s,
        PropertyValue::List(items) => items
            .into_iter()
            .map(|item| to_css_property(item, unit))
            .collect::<Vec<_>>()
            .join(", "),
    }
}
