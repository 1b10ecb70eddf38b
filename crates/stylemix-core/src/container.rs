//! Flexbox container mixins and static display fragments.
//!
//! Flex mixins share the alignment grid with the positioning module: the
//! tag's two components map onto the main and cross axes of the chosen
//! flex direction, and reversed directions mirror the main axis so
//! content still lands on the side the tag names.

use crate::align::{Alignment, Axis};
use crate::format;

/// CSS flex-direction, selecting which axis is main.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    /// The CSS keyword.
    pub fn css(self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::RowReverse => "row-reverse",
            FlexDirection::Column => "column",
            FlexDirection::ColumnReverse => "column-reverse",
        }
    }

    fn is_reversed(self) -> bool {
        matches!(self, FlexDirection::RowReverse | FlexDirection::ColumnReverse)
    }

    fn is_column(self) -> bool {
        matches!(self, FlexDirection::Column | FlexDirection::ColumnReverse)
    }
}

/// The `align-items` / `justify-content` pair for one alignment under
/// one flex direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexPair {
    pub align_items: &'static str,
    pub justify_content: &'static str,
}

/// Resolve the flex pair for an alignment under a direction.
///
/// Row directions read the main axis from the horizontal component and
/// the cross axis from the vertical one; column directions transpose.
/// Reversed directions swap Start and End on the main axis before
/// mapping. Stretch means `stretch` on the cross axis and
/// `space-between` on the main axis.
pub fn flex_pair(alignment: Alignment, direction: FlexDirection) -> FlexPair {
    let (main, cross) = if direction.is_column() {
        (alignment.vertical(), alignment.horizontal())
    } else {
        (alignment.horizontal(), alignment.vertical())
    };
    let main = if direction.is_reversed() {
        mirror(main)
    } else {
        main
    };

    FlexPair {
        align_items: cross_css(cross),
        justify_content: main_css(main),
    }
}

fn mirror(axis: Axis) -> Axis {
    match axis {
        Axis::Start => Axis::End,
        Axis::End => Axis::Start,
        other => other,
    }
}

fn cross_css(axis: Axis) -> &'static str {
    match axis {
        Axis::Start => "flex-start",
        Axis::Center => "center",
        Axis::End => "flex-end",
        Axis::Stretch => "stretch",
    }
}

fn main_css(axis: Axis) -> &'static str {
    match axis {
        Axis::Start => "flex-start",
        Axis::Center => "center",
        Axis::End => "flex-end",
        Axis::Stretch => "space-between",
    }
}

/// Row flex container aligned by `alignment`.
///
/// ```css
/// align-items: flex-start; justify-content: flex-start; box-sizing: border-box;
/// display: flex; flex-direction: row; flex-wrap: nowrap;
/// ```
pub fn flexh(alignment: Alignment, is_inline: bool) -> String {
    flex(alignment, FlexDirection::Row, is_inline)
}

/// Reverse-row flex container aligned by `alignment`.
pub fn flexrh(alignment: Alignment, is_inline: bool) -> String {
    flex(alignment, FlexDirection::RowReverse, is_inline)
}

/// Column flex container aligned by `alignment`.
pub fn flexv(alignment: Alignment, is_inline: bool) -> String {
    flex(alignment, FlexDirection::Column, is_inline)
}

/// Reverse-column flex container aligned by `alignment`.
pub fn flexrv(alignment: Alignment, is_inline: bool) -> String {
    flex(alignment, FlexDirection::ColumnReverse, is_inline)
}

fn flex(alignment: Alignment, direction: FlexDirection, is_inline: bool) -> String {
    let pair = flex_pair(alignment, direction);
    let display = if is_inline { "inline-flex" } else { "flex" };

    format(&format!(
        "
        align-items: {};
        justify-content: {};
        box-sizing: border-box;
        display: {display};
        flex-direction: {};
        flex-wrap: nowrap;
        ",
        pair.align_items,
        pair.justify_content,
        direction.css()
    ))
}

/// Border-box block element.
pub const BOX: &str = "box-sizing: border-box; display: block;";

/// Border-box inline-block element.
pub const IBOX: &str = "box-sizing: border-box; display: inline-block;";

/// Block element filling its parent.
pub const FILLED: &str =
    "box-sizing: border-box; display: block; height: 100%; width: 100%;";

/// Block element covering its parent, clipping overflow.
pub const COVER: &str = "box-sizing: border-box; display: block; height: auto; min-height: 100%; overflow: hidden; width: 100%;";

/// An `img` stretched to cover its parent.
pub const COVER_IMAGE: &str = "box-sizing: border-box; display: block; height: 100%; object-fit: cover; width: 100%;";

/// A `video` stretched to cover its parent.
pub const COVER_VIDEO: &str = "box-sizing: border-box; display: block; height: 100%; object-fit: cover; width: 100%;";

/// Single-pixel PNG mask, for compositing workarounds.
pub const MASK: &str = "mask-image: url(data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAIAAACQd1PeAAAAGXRFWHRTb2Z0d2FyZQBBZG9iZSBJbWFnZVJlYWR5ccllPAAAAA5JREFUeNpiYGBgAAgwAAAEAAGbA+oJAAAAAElFTkSuQmCC); overflow: hidden;";

/// Horizontal momentum scrolling.
pub const HSCROLL: &str = "-webkit-overflow-scrolling: touch; overflow-x: scroll;";

/// Vertical momentum scrolling.
pub const VSCROLL: &str = "-webkit-overflow-scrolling: touch; overflow-y: scroll;";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_parses(css: &str) {
        let wrapped = format!(".probe {{ {css} }}");
        let result = lightningcss::stylesheet::StyleSheet::parse(
            &wrapped,
            lightningcss::stylesheet::ParserOptions::default(),
        );
        assert!(result.is_ok(), "invalid CSS: {css}");
    }

    fn mirrored(justify: &'static str) -> &'static str {
        match justify {
            "flex-start" => "flex-end",
            "flex-end" => "flex-start",
            other => other,
        }
    }

    // =========================================================================
    // Pair tables
    // =========================================================================

    #[test]
    fn test_flexh_pair_table() {
        let expected = [
            (Alignment::Tl, "flex-start", "flex-start"),
            (Alignment::Tc, "flex-start", "center"),
            (Alignment::Tr, "flex-start", "flex-end"),
            (Alignment::Ts, "flex-start", "space-between"),
            (Alignment::Cl, "center", "flex-start"),
            (Alignment::Cc, "center", "center"),
            (Alignment::Cr, "center", "flex-end"),
            (Alignment::Cs, "center", "space-between"),
            (Alignment::Bl, "flex-end", "flex-start"),
            (Alignment::Bc, "flex-end", "center"),
            (Alignment::Br, "flex-end", "flex-end"),
            (Alignment::Bs, "flex-end", "space-between"),
            (Alignment::Sl, "stretch", "flex-start"),
            (Alignment::Sc, "stretch", "center"),
            (Alignment::Sr, "stretch", "flex-end"),
            (Alignment::Ss, "stretch", "space-between"),
        ];
        for (alignment, align_items, justify_content) in expected {
            let pair = flex_pair(alignment, FlexDirection::Row);
            assert_eq!(pair.align_items, align_items, "tag {}", alignment.tag());
            assert_eq!(
                pair.justify_content,
                justify_content,
                "tag {}",
                alignment.tag()
            );
        }
    }

    #[test]
    fn test_flexv_pair_table() {
        let expected = [
            (Alignment::Tl, "flex-start", "flex-start"),
            (Alignment::Tc, "center", "flex-start"),
            (Alignment::Tr, "flex-end", "flex-start"),
            (Alignment::Ts, "stretch", "flex-start"),
            (Alignment::Cl, "flex-start", "center"),
            (Alignment::Cc, "center", "center"),
            (Alignment::Cr, "flex-end", "center"),
            (Alignment::Cs, "stretch", "center"),
            (Alignment::Bl, "flex-start", "flex-end"),
            (Alignment::Bc, "center", "flex-end"),
            (Alignment::Br, "flex-end", "flex-end"),
            (Alignment::Bs, "stretch", "flex-end"),
            (Alignment::Sl, "flex-start", "space-between"),
            (Alignment::Sc, "center", "space-between"),
            (Alignment::Sr, "flex-end", "space-between"),
            (Alignment::Ss, "stretch", "space-between"),
        ];
        for (alignment, align_items, justify_content) in expected {
            let pair = flex_pair(alignment, FlexDirection::Column);
            assert_eq!(pair.align_items, align_items, "tag {}", alignment.tag());
            assert_eq!(
                pair.justify_content,
                justify_content,
                "tag {}",
                alignment.tag()
            );
        }
    }

    #[test]
    fn test_reversed_row_mirrors_main_axis() {
        for alignment in Alignment::ALL {
            let row = flex_pair(alignment, FlexDirection::Row);
            let reversed = flex_pair(alignment, FlexDirection::RowReverse);
            assert_eq!(reversed.align_items, row.align_items);
            assert_eq!(reversed.justify_content, mirrored(row.justify_content));
        }
    }

    #[test]
    fn test_reversed_column_mirrors_main_axis() {
        for alignment in Alignment::ALL {
            let column = flex_pair(alignment, FlexDirection::Column);
            let reversed = flex_pair(alignment, FlexDirection::ColumnReverse);
            assert_eq!(reversed.align_items, column.align_items);
            assert_eq!(reversed.justify_content, mirrored(column.justify_content));
        }
    }

    // =========================================================================
    // Full emission
    // =========================================================================

    #[test]
    fn test_flexh_emission() {
        assert_eq!(
            flexh(Alignment::Tl, false),
            "align-items: flex-start; justify-content: flex-start; box-sizing: border-box; display: flex; flex-direction: row; flex-wrap: nowrap;"
        );
    }

    #[test]
    fn test_flexh_inline() {
        assert_eq!(
            flexh(Alignment::Cc, true),
            "align-items: center; justify-content: center; box-sizing: border-box; display: inline-flex; flex-direction: row; flex-wrap: nowrap;"
        );
    }

    #[test]
    fn test_flexrh_emission() {
        assert_eq!(
            flexrh(Alignment::Tl, false),
            "align-items: flex-start; justify-content: flex-end; box-sizing: border-box; display: flex; flex-direction: row-reverse; flex-wrap: nowrap;"
        );
    }

    #[test]
    fn test_flexv_emission() {
        assert_eq!(
            flexv(Alignment::Ts, false),
            "align-items: stretch; justify-content: flex-start; box-sizing: border-box; display: flex; flex-direction: column; flex-wrap: nowrap;"
        );
    }

    #[test]
    fn test_flexrv_emission() {
        assert_eq!(
            flexrv(Alignment::Ss, false),
            "align-items: stretch; justify-content: space-between; box-sizing: border-box; display: flex; flex-direction: column-reverse; flex-wrap: nowrap;"
        );
    }

    #[test]
    fn test_all_flex_variants_produce_valid_css() {
        for alignment in Alignment::ALL {
            for is_inline in [false, true] {
                assert_parses(&flexh(alignment, is_inline));
                assert_parses(&flexrh(alignment, is_inline));
                assert_parses(&flexv(alignment, is_inline));
                assert_parses(&flexrv(alignment, is_inline));
            }
        }
    }

    // =========================================================================
    // Static fragments
    // =========================================================================

    #[test]
    fn test_box_fragments() {
        assert_eq!(BOX, "box-sizing: border-box; display: block;");
        assert_eq!(IBOX, "box-sizing: border-box; display: inline-block;");
        assert_eq!(
            FILLED,
            "box-sizing: border-box; display: block; height: 100%; width: 100%;"
        );
    }

    #[test]
    fn test_cover_clips_overflow() {
        assert!(COVER.contains("overflow: hidden;"));
        assert!(COVER.contains("min-height: 100%;"));
        assert!(COVER.contains("height: auto;"));
    }

    #[test]
    fn test_cover_media_fragments() {
        assert!(COVER_IMAGE.contains("object-fit: cover;"));
        assert_eq!(COVER_IMAGE, COVER_VIDEO);
    }

    #[test]
    fn test_static_fragments_are_valid_css() {
        for fragment in [
            BOX, IBOX, FILLED, COVER, COVER_IMAGE, COVER_VIDEO, MASK, HSCROLL, VSCROLL,
        ] {
            assert_parses(fragment);
        }
    }
}
