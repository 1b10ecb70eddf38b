//! Media query condition builders.
//!
//! Free functions build width/height/aspect-ratio conditions from any
//! dimension input. Named device-class conditions hang off
//! [`MediaQueries`], which is constructed from an explicit
//! [`Breakpoints`] table; there is no global table to mutate, so two
//! instances with different tables can coexist.
//!
//! The `gt`/`lt` builders adjust the parsed value by one in whatever
//! unit the input carried, so `gtw(639)` targets everything strictly
//! wider than 639px via `(min-width: 640px)`.

use serde::{Deserialize, Serialize};

use crate::format_number;
use crate::units::{parse_unit, UnitInput};

/// Inclusive pixel range of one device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min: u32,
    pub max: u32,
}

/// Pixel ranges for every device class, mobile through tv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub mobile: Breakpoint,
    pub tablet: Breakpoint,
    pub notebook: Breakpoint,
    pub desktop: Breakpoint,
    pub tv: Breakpoint,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Breakpoints {
            mobile: Breakpoint { min: 0, max: 639 },
            tablet: Breakpoint { min: 640, max: 1024 },
            notebook: Breakpoint { min: 1025, max: 1439 },
            desktop: Breakpoint { min: 1440, max: 1919 },
            tv: Breakpoint { min: 1920, max: 100_000 },
        }
    }
}

/// Matches viewports in portrait orientation.
pub const PORTRAIT: &str = "(orientation: portrait)";

/// Matches viewports in landscape orientation.
pub const LANDSCAPE: &str = "(orientation: landscape)";

/// Viewports strictly wider than `width`.
///
/// ```css
/// (min-width: 640px)
/// ```
pub fn gtw(width: impl Into<UnitInput>) -> String {
    let (value, unit) = parse_unit(width, "px");
    format!("(min-width: {}{unit})", format_number(value + 1.0))
}

/// Viewports at least `width` wide.
pub fn gtew(min_width: impl Into<UnitInput>) -> String {
    let (value, unit) = parse_unit(min_width, "px");
    format!("(min-width: {}{unit})", format_number(value))
}

/// Viewports strictly narrower than `width`.
pub fn ltw(width: impl Into<UnitInput>) -> String {
    let (value, unit) = parse_unit(width, "px");
    format!("(max-width: {}{unit})", format_number(value - 1.0))
}

/// Viewports at most `width` wide.
pub fn ltew(max_width: impl Into<UnitInput>) -> String {
    let (value, unit) = parse_unit(max_width, "px");
    format!("(max-width: {}{unit})", format_number(value))
}

/// Viewports between `min_width` and `max_width` inclusive.
pub fn clampw(
    min_width: impl Into<UnitInput>,
    max_width: impl Into<UnitInput>,
) -> String {
    let (min_value, min_unit) = parse_unit(min_width, "px");
    let (max_value, max_unit) = parse_unit(max_width, "px");
    format!(
        "(min-width: {}{min_unit}) and (max-width: {}{max_unit})",
        format_number(min_value),
        format_number(max_value)
    )
}

/// Viewports strictly taller than `height`.
pub fn gth(height: impl Into<UnitInput>) -> String {
    let (value, unit) = parse_unit(height, "px");
    format!("(min-height: {}{unit})", format_number(value + 1.0))
}

/// Viewports at least `height` tall.
pub fn gteh(min_height: impl Into<UnitInput>) -> String {
    let (value, unit) = parse_unit(min_height, "px");
    format!("(min-height: {}{unit})", format_number(value))
}

/// Viewports strictly shorter than `height`.
pub fn lth(height: impl Into<UnitInput>) -> String {
    let (value, unit) = parse_unit(height, "px");
    format!("(max-height: {}{unit})", format_number(value - 1.0))
}

/// Viewports at most `height` tall.
pub fn lteh(max_height: impl Into<UnitInput>) -> String {
    let (value, unit) = parse_unit(max_height, "px");
    format!("(max-height: {}{unit})", format_number(value))
}

/// Viewports between `min_height` and `max_height` inclusive.
pub fn clamph(
    min_height: impl Into<UnitInput>,
    max_height: impl Into<UnitInput>,
) -> String {
    let (min_value, min_unit) = parse_unit(min_height, "px");
    let (max_value, max_unit) = parse_unit(max_height, "px");
    format!(
        "(min-height: {}{min_unit}) and (max-height: {}{max_unit})",
        format_number(min_value),
        format_number(max_value)
    )
}

/// Viewports with exactly this aspect ratio, e.g. `"16/9"`.
pub fn ar(aspect_ratio: impl std::fmt::Display) -> String {
    format!("(aspect-ratio: {aspect_ratio})")
}

/// Viewports at least this wide per unit height.
pub fn gtear(aspect_ratio: impl std::fmt::Display) -> String {
    format!("(min-aspect-ratio: {aspect_ratio})")
}

/// Viewports at most this wide per unit height.
pub fn ltear(aspect_ratio: impl std::fmt::Display) -> String {
    format!("(max-aspect-ratio: {aspect_ratio})")
}

/// Named device-class conditions derived from a [`Breakpoints`] table.
///
/// Every method reads the table the instance was built with, so changing
/// tables means building another instance. Mobile has no `lt`/`lte`
/// variants and tv no `gt`/`gte`, since nothing exists beyond either end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaQueries {
    breakpoints: Breakpoints,
}

impl MediaQueries {
    pub fn new(breakpoints: Breakpoints) -> Self {
        MediaQueries { breakpoints }
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    fn between(range: Breakpoint) -> String {
        format!(
            "(min-width: {}px) and (max-width: {}px)",
            range.min, range.max
        )
    }

    fn above(px: u32) -> String {
        format!("(min-width: {px}px)")
    }

    fn below(px: u32) -> String {
        format!("(max-width: {px}px)")
    }

    /// Viewports inside the mobile range.
    pub fn mobile(&self) -> String {
        Self::between(self.breakpoints.mobile)
    }

    /// Viewports above the mobile range.
    pub fn gt_mobile(&self) -> String {
        Self::above(self.breakpoints.mobile.max + 1)
    }

    /// Viewports at or above the start of the mobile range.
    pub fn gte_mobile(&self) -> String {
        Self::above(self.breakpoints.mobile.min)
    }

    /// Viewports inside the tablet range.
    pub fn tablet(&self) -> String {
        Self::between(self.breakpoints.tablet)
    }

    pub fn gt_tablet(&self) -> String {
        Self::above(self.breakpoints.tablet.max + 1)
    }

    pub fn gte_tablet(&self) -> String {
        Self::above(self.breakpoints.tablet.min)
    }

    /// Viewports below the tablet range.
    pub fn lt_tablet(&self) -> String {
        Self::below(self.breakpoints.tablet.min.saturating_sub(1))
    }

    /// Viewports at or below the end of the tablet range.
    pub fn lte_tablet(&self) -> String {
        Self::below(self.breakpoints.tablet.max)
    }

    /// Viewports inside the notebook range.
    pub fn notebook(&self) -> String {
        Self::between(self.breakpoints.notebook)
    }

    pub fn gt_notebook(&self) -> String {
        Self::above(self.breakpoints.notebook.max + 1)
    }

    pub fn gte_notebook(&self) -> String {
        Self::above(self.breakpoints.notebook.min)
    }

    pub fn lt_notebook(&self) -> String {
        Self::below(self.breakpoints.notebook.min.saturating_sub(1))
    }

    pub fn lte_notebook(&self) -> String {
        Self::below(self.breakpoints.notebook.max)
    }

    /// Viewports inside the desktop range.
    pub fn desktop(&self) -> String {
        Self::between(self.breakpoints.desktop)
    }

    pub fn gt_desktop(&self) -> String {
        Self::above(self.breakpoints.desktop.max + 1)
    }

    pub fn gte_desktop(&self) -> String {
        Self::above(self.breakpoints.desktop.min)
    }

    pub fn lt_desktop(&self) -> String {
        Self::below(self.breakpoints.desktop.min.saturating_sub(1))
    }

    pub fn lte_desktop(&self) -> String {
        Self::below(self.breakpoints.desktop.max)
    }

    /// Viewports inside the tv range.
    pub fn tv(&self) -> String {
        Self::between(self.breakpoints.tv)
    }

    pub fn lt_tv(&self) -> String {
        Self::below(self.breakpoints.tv.min.saturating_sub(1))
    }

    pub fn lte_tv(&self) -> String {
        Self::below(self.breakpoints.tv.max)
    }
}
