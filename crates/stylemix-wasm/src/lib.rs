//! WASM bindings for the stylemix generators.
//!
//! Exposes the positioning, flexbox, typography, transition, and media
//! query builders to JavaScript via wasm-bindgen. Dimension arguments
//! accept numbers or strings; transitions also accept arrays. Any other
//! JS type throws. Alignment tags stay lenient, unknown tags center.

use wasm_bindgen::prelude::*;

use stylemix_core::media::Breakpoints;
use stylemix_core::typography::{FontWeight, RemValue};
use stylemix_core::units::{PropertyValue, UnitInput};
use stylemix_core::Alignment;

fn unit_input(value: &JsValue) -> Result<UnitInput, JsError> {
    if let Some(n) = value.as_f64() {
        Ok(UnitInput::from(n))
    } else if let Some(s) = value.as_string() {
        Ok(UnitInput::from(s))
    } else {
        Err(JsError::new("Unsupported value type"))
    }
}

fn rem_value(value: &JsValue) -> Result<RemValue, JsError> {
    if let Some(n) = value.as_f64() {
        Ok(RemValue::Number(n))
    } else if let Some(s) = value.as_string() {
        Ok(RemValue::Text(s))
    } else {
        Err(JsError::new("Unsupported value type"))
    }
}

fn weight_value(value: &JsValue) -> Result<FontWeight, JsError> {
    if let Some(n) = value.as_f64() {
        Ok(FontWeight::Number(n as u16))
    } else if let Some(s) = value.as_string() {
        Ok(FontWeight::Name(s))
    } else {
        Err(JsError::new("Unsupported value type"))
    }
}

fn property_value(value: &JsValue) -> Result<PropertyValue, JsError> {
    if let Some(n) = value.as_f64() {
        Ok(PropertyValue::Number(n))
    } else if let Some(s) = value.as_string() {
        Ok(PropertyValue::Text(s))
    } else if js_sys::Array::is_array(value) {
        let mut items = Vec::new();
        for item in js_sys::Array::from(value).iter() {
            items.push(property_value(&item)?);
        }
        Ok(PropertyValue::List(items))
    } else {
        Err(JsError::new("Unsupported value type"))
    }
}

fn is_absent(value: &JsValue) -> bool {
    value.is_null() || value.is_undefined()
}

/// Absolute positioning rules for an alignment tag.
#[wasm_bindgen]
pub fn abs(alignment: &str) -> String {
    stylemix_core::abs(Alignment::from_tag(alignment))
}

/// Fixed positioning rules for an alignment tag.
#[wasm_bindgen]
pub fn fixed(alignment: &str) -> String {
    stylemix_core::fixed(Alignment::from_tag(alignment))
}

/// Flexbox row container rules for an alignment tag.
#[wasm_bindgen]
pub fn flexh(alignment: &str, is_inline: bool) -> String {
    stylemix_core::flexh(Alignment::from_tag(alignment), is_inline)
}

/// Flexbox reversed row container rules for an alignment tag.
#[wasm_bindgen]
pub fn flexrh(alignment: &str, is_inline: bool) -> String {
    stylemix_core::flexrh(Alignment::from_tag(alignment), is_inline)
}

/// Flexbox column container rules for an alignment tag.
#[wasm_bindgen]
pub fn flexv(alignment: &str, is_inline: bool) -> String {
    stylemix_core::flexv(Alignment::from_tag(alignment), is_inline)
}

/// Flexbox reversed column container rules for an alignment tag.
#[wasm_bindgen]
pub fn flexrv(alignment: &str, is_inline: bool) -> String {
    stylemix_core::flexrv(Alignment::from_tag(alignment), is_inline)
}

/// Font shorthand rules.
///
/// `size` and `weight` accept a number or a string; `null` or
/// `undefined` keeps the defaults (`1.6rem`, `400`).
#[wasm_bindgen]
pub fn font(
    family: &str,
    size: JsValue,
    weight: JsValue,
    style: Option<String>,
) -> Result<String, JsError> {
    let mut styles = stylemix_core::font(family);
    if !is_absent(&size) {
        styles = styles.size(rem_value(&size)?);
    }
    if !is_absent(&weight) {
        styles = styles.weight(weight_value(&weight)?);
    }
    if let Some(style) = style {
        styles = styles.style(style);
    }
    Ok(styles.css())
}

/// Transition shorthand rules.
///
/// Arguments accept a number, a string, or an array of either; `null`
/// or `undefined` for `timing_function` and `delay` keeps the defaults
/// (`linear`, `0ms`).
#[wasm_bindgen]
pub fn transition(
    property: JsValue,
    duration: JsValue,
    timing_function: JsValue,
    delay: JsValue,
) -> Result<String, JsError> {
    let timing_function = if is_absent(&timing_function) {
        PropertyValue::from("linear")
    } else {
        property_value(&timing_function)?
    };
    let delay = if is_absent(&delay) {
        PropertyValue::from(0.0)
    } else {
        property_value(&delay)?
    };
    Ok(stylemix_core::animations::transition(
        property_value(&property)?,
        property_value(&duration)?,
        timing_function,
        delay,
    ))
}

/// `(min-width: …)` strictly above the given width.
#[wasm_bindgen]
pub fn gtw(width: JsValue) -> Result<String, JsError> {
    Ok(stylemix_core::media::gtw(unit_input(&width)?))
}

/// `(min-width: …)` at or above the given width.
#[wasm_bindgen]
pub fn gtew(min_width: JsValue) -> Result<String, JsError> {
    Ok(stylemix_core::media::gtew(unit_input(&min_width)?))
}

/// `(max-width: …)` strictly below the given width.
#[wasm_bindgen]
pub fn ltw(width: JsValue) -> Result<String, JsError> {
    Ok(stylemix_core::media::ltw(unit_input(&width)?))
}

/// `(max-width: …)` at or below the given width.
#[wasm_bindgen]
pub fn ltew(max_width: JsValue) -> Result<String, JsError> {
    Ok(stylemix_core::media::ltew(unit_input(&max_width)?))
}

/// Inclusive width range condition.
#[wasm_bindgen]
pub fn clampw(min_width: JsValue, max_width: JsValue) -> Result<String, JsError> {
    Ok(stylemix_core::media::clampw(
        unit_input(&min_width)?,
        unit_input(&max_width)?,
    ))
}

/// `(min-height: …)` strictly above the given height.
#[wasm_bindgen]
pub fn gth(height: JsValue) -> Result<String, JsError> {
    Ok(stylemix_core::media::gth(unit_input(&height)?))
}

/// `(min-height: …)` at or above the given height.
#[wasm_bindgen]
pub fn gteh(min_height: JsValue) -> Result<String, JsError> {
    Ok(stylemix_core::media::gteh(unit_input(&min_height)?))
}

/// `(max-height: …)` strictly below the given height.
#[wasm_bindgen]
pub fn lth(height: JsValue) -> Result<String, JsError> {
    Ok(stylemix_core::media::lth(unit_input(&height)?))
}

/// `(max-height: …)` at or below the given height.
#[wasm_bindgen]
pub fn lteh(max_height: JsValue) -> Result<String, JsError> {
    Ok(stylemix_core::media::lteh(unit_input(&max_height)?))
}

/// Inclusive height range condition.
#[wasm_bindgen]
pub fn clamph(min_height: JsValue, max_height: JsValue) -> Result<String, JsError> {
    Ok(stylemix_core::media::clamph(
        unit_input(&min_height)?,
        unit_input(&max_height)?,
    ))
}

/// Named device-class conditions as a JS object.
///
/// Accepts an optional breakpoint table `{ mobile: { min, max }, … }`;
/// `null` or `undefined` uses the default table. Returns an object with
/// keys `mobile`, `gtMobile`, `gteMobile`, `tablet`, … through `lteTv`.
#[wasm_bindgen]
pub fn media(breakpoints: JsValue) -> Result<JsValue, JsError> {
    let table: Breakpoints = if is_absent(&breakpoints) {
        Breakpoints::default()
    } else {
        serde_wasm_bindgen::from_value(breakpoints)
            .map_err(|e| JsError::new(&e.to_string()))?
    };
    let queries = stylemix_core::MediaQueries::new(table);

    let conditions = js_sys::Object::new();
    for (key, value) in [
        ("mobile", queries.mobile()),
        ("gtMobile", queries.gt_mobile()),
        ("gteMobile", queries.gte_mobile()),
        ("tablet", queries.tablet()),
        ("gtTablet", queries.gt_tablet()),
        ("gteTablet", queries.gte_tablet()),
        ("ltTablet", queries.lt_tablet()),
        ("lteTablet", queries.lte_tablet()),
        ("notebook", queries.notebook()),
        ("gtNotebook", queries.gt_notebook()),
        ("gteNotebook", queries.gte_notebook()),
        ("ltNotebook", queries.lt_notebook()),
        ("lteNotebook", queries.lte_notebook()),
        ("desktop", queries.desktop()),
        ("gtDesktop", queries.gt_desktop()),
        ("gteDesktop", queries.gte_desktop()),
        ("ltDesktop", queries.lt_desktop()),
        ("lteDesktop", queries.lte_desktop()),
        ("tv", queries.tv()),
        ("ltTv", queries.lt_tv()),
        ("lteTv", queries.lte_tv()),
    ] {
        js_sys::Reflect::set(&conditions, &key.into(), &value.into())
            .map_err(|_| JsError::new("Failed to set condition property"))?;
    }

    Ok(conditions.into())
}

/// The browser reset sheet.
#[wasm_bindgen]
pub fn normalize() -> String {
    stylemix_core::normalize().to_string()
}

/// The reset sheet plus every preset class.
#[wasm_bindgen]
pub fn stylesheet() -> String {
    stylemix_core::classes::stylesheet()
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Native tests (non-WASM), covering the exports that avoid JsValue
    // =========================================================================

    #[test]
    fn test_abs_delegates_to_core() {
        assert_eq!(abs("tl"), stylemix_core::abs(Alignment::Tl));
        assert_eq!(fixed("br"), stylemix_core::fixed(Alignment::Br));
    }

    #[test]
    fn test_unknown_tags_center() {
        assert_eq!(abs("zz"), abs("cc"));
        assert_eq!(flexh("zz", false), flexh("cc", false));
    }

    #[test]
    fn test_flex_exports() {
        assert!(flexh("cc", false).contains("display: flex;"));
        assert!(flexh("cc", true).contains("display: inline-flex;"));
        assert!(flexrv("tl", false).contains("flex-direction: column-reverse;"));
    }

    #[test]
    fn test_normalize_and_stylesheet() {
        assert!(normalize().contains("box-sizing: border-box;"));
        let sheet = stylesheet();
        assert!(sheet.starts_with(normalize().as_str()));
        assert!(sheet.contains(".fhcc {"));
    }

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }
}
