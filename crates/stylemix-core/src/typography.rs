//! Font shorthand and `@font-face` builders.
//!
//! [`font`] produces the block of `font-*` declarations for an element
//! and [`font_face`] produces a complete `@font-face` rule. Both are
//! builders: construct with the required fields, chain the optional
//! ones, then render with `css()` or `to_string()`.
//!
//! Bare numbers passed for size, line height, or letter spacing are
//! treated as `rem`. Format, style, and weight of a font file can be
//! inferred from its path, which `font_face` does for every field not
//! set explicitly.

use std::fmt;

use crate::format_number;

/// Named font weights and their numeric values.
pub const FONT_WEIGHTS: [(&str, u16); 9] = [
    ("thin", 100),
    ("extraLight", 200),
    ("light", 300),
    ("normal", 400),
    ("medium", 500),
    ("semiBold", 600),
    ("bold", 700),
    ("extraBold", 800),
    ("black", 900),
];

/// Looks up a named weight, e.g. `"bold"` to `700`.
pub fn font_weight(name: &str) -> Option<u16> {
    FONT_WEIGHTS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, weight)| *weight)
}

/// Infers the `format()` hint from a font file extension.
///
/// Recognizes `eot`, `woff2`, `woff`, `ttf`, `otf`, and `svg`, keeping
/// any query string or fragment after the extension out of the way.
/// Falls back to `opentype`.
pub fn font_format_from_path(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("");

    if ext.starts_with("eot") {
        "eot"
    } else if ext.starts_with("woff2") {
        "woff2"
    } else if ext.starts_with("woff") {
        "woff"
    } else if ext.starts_with("ttf") {
        "truetype"
    } else if ext.starts_with("otf") {
        "opentype"
    } else if ext.starts_with("svg") {
        "svg"
    } else {
        "opentype"
    }
}

/// Infers `italic` or `oblique` from a font file name, `normal` otherwise.
///
/// Only the basename is searched, so style words in directory names do
/// not leak into the result.
pub fn font_style_from_path(path: &str) -> &'static str {
    let basename = path.rsplit('/').next().unwrap_or("").to_lowercase();

    if basename.contains("italic") {
        "italic"
    } else if basename.contains("oblique") {
        "oblique"
    } else {
        "normal"
    }
}

/// Infers the numeric weight from a font file name, `400` otherwise.
///
/// Compound names are checked before their substrings, so
/// `Roboto-ExtraBold.ttf` resolves to 800 rather than 700.
pub fn font_weight_from_path(path: &str) -> u16 {
    let basename = path.rsplit('/').next().unwrap_or("").to_lowercase();

    if basename.contains("thin") {
        100
    } else if basename.contains("extralight") {
        200
    } else if basename.contains("light") {
        300
    } else if basename.contains("regular") || basename.contains("normal") {
        400
    } else if basename.contains("medium") {
        500
    } else if basename.contains("semibold") {
        600
    } else if basename.contains("extrabold") {
        800
    } else if basename.contains("bold") {
        700
    } else if basename.contains("black") {
        900
    } else {
        400
    }
}

/// Dimension that renders bare numbers with a `rem` suffix.
#[derive(Debug, Clone, PartialEq)]
pub enum RemValue {
    Number(f64),
    Text(String),
}

impl RemValue {
    fn css(&self) -> String {
        match self {
            RemValue::Number(n) => format!("{}rem", format_number(*n)),
            RemValue::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for RemValue {
    fn from(value: f64) -> Self {
        RemValue::Number(value)
    }
}

impl From<i32> for RemValue {
    fn from(value: i32) -> Self {
        RemValue::Number(value as f64)
    }
}

impl From<&str> for RemValue {
    fn from(value: &str) -> Self {
        RemValue::Text(value.to_string())
    }
}

impl From<String> for RemValue {
    fn from(value: String) -> Self {
        RemValue::Text(value)
    }
}

/// Font weight given numerically or by name.
#[derive(Debug, Clone, PartialEq)]
pub enum FontWeight {
    Number(u16),
    Name(String),
}

impl FontWeight {
    /// Numeric form for known names, the name itself otherwise.
    fn resolved(&self) -> String {
        match self {
            FontWeight::Number(n) => n.to_string(),
            FontWeight::Name(name) => match font_weight(name) {
                Some(weight) => weight.to_string(),
                None => name.clone(),
            },
        }
    }

    fn verbatim(&self) -> String {
        match self {
            FontWeight::Number(n) => n.to_string(),
            FontWeight::Name(name) => name.clone(),
        }
    }
}

impl From<u16> for FontWeight {
    fn from(value: u16) -> Self {
        FontWeight::Number(value)
    }
}

impl From<&str> for FontWeight {
    fn from(value: &str) -> Self {
        FontWeight::Name(value.to_string())
    }
}

impl From<String> for FontWeight {
    fn from(value: String) -> Self {
        FontWeight::Name(value)
    }
}

/// Builder for a block of `font-*` declarations.
///
/// ```text
/// font("Roboto").size(1.4).weight("bold").css()
/// ```
///
/// renders
///
/// ```text
/// font-family: Roboto; font-size: 1.4rem; font-style: normal;
/// font-weight: 700; font-variant: normal; line-height: normal;
/// letter-spacing: normal;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: String,
    size: RemValue,
    weight: FontWeight,
    style: String,
    line_height: RemValue,
    letter_spacing: RemValue,
    variant: String,
}

/// Starts a [`Font`] with the given family and default values.
///
/// An empty family renders as `sans-serif`.
pub fn font(family: impl Into<String>) -> Font {
    Font {
        family: family.into(),
        size: RemValue::Text("1.6rem".to_string()),
        weight: FontWeight::Number(400),
        style: "normal".to_string(),
        line_height: RemValue::Text("normal".to_string()),
        letter_spacing: RemValue::Text("normal".to_string()),
        variant: "normal".to_string(),
    }
}

impl Font {
    pub fn size(mut self, size: impl Into<RemValue>) -> Self {
        self.size = size.into();
        self
    }

    /// Named weights resolve through [`FONT_WEIGHTS`]; unknown names
    /// pass through untouched.
    pub fn weight(mut self, weight: impl Into<FontWeight>) -> Self {
        self.weight = weight.into();
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn line_height(mut self, line_height: impl Into<RemValue>) -> Self {
        self.line_height = line_height.into();
        self
    }

    pub fn letter_spacing(mut self, letter_spacing: impl Into<RemValue>) -> Self {
        self.letter_spacing = letter_spacing.into();
        self
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn css(&self) -> String {
        let family = if self.family.is_empty() {
            "sans-serif"
        } else {
            self.family.as_str()
        };
        crate::format(&format!(
            "
            font-family: {family};
            font-size: {size};
            font-style: {style};
            font-weight: {weight};
            font-variant: {variant};
            line-height: {line_height};
            letter-spacing: {letter_spacing};
            ",
            size = self.size.css(),
            style = self.style,
            weight = self.weight.resolved(),
            variant = self.variant,
            line_height = self.line_height.css(),
            letter_spacing = self.letter_spacing.css(),
        ))
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// Builder for a complete `@font-face` rule.
///
/// Style, weight, and format are inferred from the source path unless
/// set explicitly. An explicit weight renders verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct FontFace {
    family: String,
    src: String,
    weight: Option<FontWeight>,
    style: Option<String>,
    display: Option<String>,
}

/// Starts a [`FontFace`] for the given family and source path.
pub fn font_face(family: impl Into<String>, src: impl Into<String>) -> FontFace {
    FontFace {
        family: family.into(),
        src: src.into(),
        weight: None,
        style: None,
        display: None,
    }
}

impl FontFace {
    pub fn weight(mut self, weight: impl Into<FontWeight>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn css(&self) -> String {
        let style = match &self.style {
            Some(style) => style.clone(),
            None => font_style_from_path(&self.src).to_string(),
        };
        let weight = match &self.weight {
            Some(weight) => weight.verbatim(),
            None => font_weight_from_path(&self.src).to_string(),
        };
        let display = self.display.as_deref().unwrap_or("auto");
        crate::format(&format!(
            "
            @font-face {{
              font-family: {family};
              src: url('{src}') format('{format}');
              font-style: {style};
              font-weight: {weight};
              font-display: {display};
            }}
            ",
            family = self.family,
            src = self.src,
            format = font_format_from_path(&self.src),
        ))
    }
}

impl fmt::Display for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}
