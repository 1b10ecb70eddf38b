//! Stylemix Core
//!
//! Generates CSS rule strings from typed inputs: absolute/fixed positioning
//! and flexbox mixins keyed by two-letter alignment tags, media query
//! conditions with named device breakpoints, font and `@font-face` blocks
//! with path-based inference, color and unit helpers, a browser normalize
//! sheet, and a preset utility-class registry for prebuilt stylesheets.
//!
//! ```text
//! abs(Alignment::Tl) → "bottom: unset; left: 0; margin: 0; right: unset; top: 0; position: absolute;"
//! ```
//!
//! Rule bodies are single-line `"; "`-separated declaration lists produced
//! by [`format`]. Generators are total: unrecognized alignment tags fall
//! back to centered, unknown weight names pass through, and no function
//! panics on malformed input.

pub mod align;
pub mod animations;
pub mod classes;
pub mod color;
pub mod container;
pub mod images;
pub mod media;
pub mod normalize;
pub mod selectors;
pub mod typography;
pub mod units;

use std::sync::LazyLock;

use regex::Regex;

pub use align::{abs, fixed, Alignment, ParseAlignmentError};
pub use container::{flexh, flexrh, flexrv, flexv, FlexDirection, FlexPair};
pub use media::{Breakpoint, Breakpoints, MediaQueries};
pub use normalize::normalize;
pub use typography::{font, font_face, Font, FontFace};
pub use units::{parse_unit, to_css_property, PropertyValue, UnitInput};

static COLLAPSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\n+|\r+)\s+").unwrap());

/// Collapse a multi-line CSS template into a single-line rule body.
///
/// Every newline run plus the indentation that follows it becomes a single
/// space, and the result is trimmed. Declarations written as an indented
/// block therefore come out as `"prop: value; prop: value;"`.
pub fn format(css: &str) -> String {
    COLLAPSE.replace_all(css, " ").trim().to_string()
}

/// Format a number, removing `.0` for integers.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
