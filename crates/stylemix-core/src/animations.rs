//! Transition shorthand builder.

use crate::units::{to_css_property, PropertyValue};

/// Builds the four `transition-*` declarations.
///
/// Every argument accepts a single value or a list; lists render
/// comma-separated. Bare numbers for duration and delay are
/// milliseconds.
///
/// ```text
/// transition("opacity", 200, "ease-in", 0)
/// ```
///
/// renders
///
/// ```text
/// transition-property: opacity; transition-duration: 200ms;
/// transition-timing-function: ease-in; transition-delay: 0ms;
/// ```
pub fn transition(
    property: impl Into<PropertyValue>,
    duration: impl Into<PropertyValue>,
    timing_function: impl Into<PropertyValue>,
    delay: impl Into<PropertyValue>,
) -> String {
    crate::format(&format!(
        "
        transition-property: {property};
        transition-duration: {duration};
        transition-timing-function: {timing_function};
        transition-delay: {delay};
        ",
        property = to_css_property(property, None),
        duration = to_css_property(duration, Some("ms")),
        timing_function = to_css_property(timing_function, None),
        delay = to_css_property(delay, Some("ms")),
    ))
}
