//! Absolute and fixed positioning mixins.
//!
//! Positions are keyed by a two-letter alignment tag: vertical axis first
//! (`t`op, `c`enter, `b`ottom, `s`tretch), then horizontal (`l`eft,
//! `c`enter, `r`ight, `s`tretch). Each axis independently pins edges and
//! picks a margin component, so all sixteen grid cells come out of one
//! table instead of one switch arm per tag.

/// One cell of the 4x4 alignment grid, e.g. `Tl` for top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Tl,
    Tc,
    Tr,
    Ts,
    Cl,
    #[default]
    Cc,
    Cr,
    Cs,
    Bl,
    Bc,
    Br,
    Bs,
    Sl,
    Sc,
    Sr,
    Ss,
}

/// Error returned by the strict alignment parser.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown alignment tag: {tag}")]
pub struct ParseAlignmentError {
    pub tag: String,
}

/// Position of content along one axis of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Start,
    Center,
    End,
    Stretch,
}

impl Alignment {
    /// Every tag in grid order, top row first.
    pub const ALL: [Alignment; 16] = [
        Alignment::Tl,
        Alignment::Tc,
        Alignment::Tr,
        Alignment::Ts,
        Alignment::Cl,
        Alignment::Cc,
        Alignment::Cr,
        Alignment::Cs,
        Alignment::Bl,
        Alignment::Bc,
        Alignment::Br,
        Alignment::Bs,
        Alignment::Sl,
        Alignment::Sc,
        Alignment::Sr,
        Alignment::Ss,
    ];

    /// The two-letter tag, e.g. `"tl"`.
    pub fn tag(self) -> &'static str {
        match self {
            Alignment::Tl => "tl",
            Alignment::Tc => "tc",
            Alignment::Tr => "tr",
            Alignment::Ts => "ts",
            Alignment::Cl => "cl",
            Alignment::Cc => "cc",
            Alignment::Cr => "cr",
            Alignment::Cs => "cs",
            Alignment::Bl => "bl",
            Alignment::Bc => "bc",
            Alignment::Br => "br",
            Alignment::Bs => "bs",
            Alignment::Sl => "sl",
            Alignment::Sc => "sc",
            Alignment::Sr => "sr",
            Alignment::Ss => "ss",
        }
    }

    /// Parse a tag leniently. Unrecognized tags fall back to centered,
    /// so generator entry points never fail on bad input.
    pub fn from_tag(tag: &str) -> Alignment {
        Alignment::ALL
            .iter()
            .copied()
            .find(|a| a.tag() == tag)
            .unwrap_or_default()
    }

    pub(crate) fn vertical(self) -> Axis {
        match self {
            Alignment::Tl | Alignment::Tc | Alignment::Tr | Alignment::Ts => Axis::Start,
            Alignment::Cl | Alignment::Cc | Alignment::Cr | Alignment::Cs => Axis::Center,
            Alignment::Bl | Alignment::Bc | Alignment::Br | Alignment::Bs => Axis::End,
            Alignment::Sl | Alignment::Sc | Alignment::Sr | Alignment::Ss => Axis::Stretch,
        }
    }

    pub(crate) fn horizontal(self) -> Axis {
        match self {
            Alignment::Tl | Alignment::Cl | Alignment::Bl | Alignment::Sl => Axis::Start,
            Alignment::Tc | Alignment::Cc | Alignment::Bc | Alignment::Sc => Axis::Center,
            Alignment::Tr | Alignment::Cr | Alignment::Br | Alignment::Sr => Axis::End,
            Alignment::Ts | Alignment::Cs | Alignment::Bs | Alignment::Ss => Axis::Stretch,
        }
    }
}

impl std::str::FromStr for Alignment {
    type Err = ParseAlignmentError;

    /// Strict companion to [`Alignment::from_tag`] for callers that
    /// validate input up front.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alignment::ALL
            .iter()
            .copied()
            .find(|a| a.tag() == s)
            .ok_or_else(|| ParseAlignmentError { tag: s.to_string() })
    }
}

/// Absolute positioning pinned to the grid cell named by `alignment`.
///
/// ```css
/// bottom: unset; left: 0; margin: 0; right: unset; top: 0; position: absolute;
/// ```
pub fn abs(alignment: Alignment) -> String {
    pinned(alignment, "absolute")
}

/// Fixed positioning pinned to the grid cell named by `alignment`.
pub fn fixed(alignment: Alignment) -> String {
    pinned(alignment, "fixed")
}

fn pinned(alignment: Alignment, position: &str) -> String {
    let (top, bottom, v_margin) = edges(alignment.vertical());
    let (left, right, h_margin) = edges(alignment.horizontal());
    let margin = if v_margin == h_margin {
        v_margin.to_string()
    } else {
        format!("{v_margin} {h_margin}")
    };

    crate::format(&format!(
        "
        bottom: {bottom};
        left: {left};
        margin: {margin};
        right: {right};
        top: {top};
        position: {position};
        "
    ))
}

/// Near edge, far edge, and margin component for one axis.
/// Start pins the near edge, End the far edge, Center and Stretch both;
/// only Center centers with an auto margin.
fn edges(axis: Axis) -> (&'static str, &'static str, &'static str) {
    match axis {
        Axis::Start => ("0", "unset", "0"),
        Axis::Center => ("0", "0", "auto"),
        Axis::End => ("unset", "0", "0"),
        Axis::Stretch => ("0", "0", "0"),
    }
}

/// Set both horizontal margins to `value`.
pub fn horizontal_margin(value: &str) -> String {
    crate::format(&format!(
        "
        margin-left: {value};
        margin-right: {value};
        "
    ))
}

/// Set both vertical margins to `value`.
pub fn vertical_margin(value: &str) -> String {
    crate::format(&format!(
        "
        margin-top: {value};
        margin-bottom: {value};
        "
    ))
}

/// Set both horizontal paddings to `value`.
pub fn horizontal_padding(value: &str) -> String {
    crate::format(&format!(
        "
        padding-left: {value};
        padding-right: {value};
        "
    ))
}

/// Set both vertical paddings to `value`.
pub fn vertical_padding(value: &str) -> String {
    crate::format(&format!(
        "
        padding-top: {value};
        padding-bottom: {value};
        "
    ))
}

pub use self::{
    horizontal_margin as hm, horizontal_padding as hp, vertical_margin as vm,
    vertical_padding as vp,
};
