//! Ready-made class registry.
//!
//! Every generator output is also offered as a short-named preset
//! class, so a project can drop the whole set into a stylesheet and
//! use `class="fhcc"` instead of calling [`flexh`](crate::flexh) from
//! a CSS-in-JS layer. [`stylesheet`] bundles the reset sheet with all
//! presets into one document.
//!
//! Naming follows the generators: alignment tags name the absolute
//! positioning classes (`tl`, `cc`), an `f` prefix marks the fixed
//! variants (`ftl`), flex classes combine direction and tag (`fhcc`,
//! `frvbs`), and an `i` prefix marks their inline versions (`ifhcc`).

use crate::align::{abs, fixed, Alignment};
use crate::container::{
    flexh, flexrh, flexrv, flexv, BOX, COVER, COVER_IMAGE, COVER_VIDEO, FILLED,
    HSCROLL, IBOX, MASK, VSCROLL,
};
use crate::normalize::normalize;

/// Returns every preset class as a `(name, rules)` pair.
///
/// The order is stable: absolute and fixed positioning classes first,
/// then the static boxes, the flex grid, the scroll helpers, and the
/// image helpers.
pub fn all() -> Vec<(String, String)> {
    let mut entries = Vec::with_capacity(169);

    for alignment in Alignment::ALL {
        entries.push((alignment.tag().to_string(), abs(alignment)));
    }
    for alignment in Alignment::ALL {
        entries.push((format!("f{}", alignment.tag()), fixed(alignment)));
    }

    for (name, rules) in [
        ("box", BOX),
        ("ibox", IBOX),
        ("filled", FILLED),
        ("cover", COVER),
    ] {
        entries.push((name.to_string(), rules.to_string()));
    }

    let directions = [
        ("fh", flexh as fn(Alignment, bool) -> String),
        ("frh", flexrh),
        ("fv", flexv),
        ("frv", flexrv),
    ];
    for (prefix, build) in directions {
        for alignment in Alignment::ALL {
            entries.push((
                format!("{prefix}{}", alignment.tag()),
                build(alignment, false),
            ));
        }
    }
    for (prefix, build) in directions {
        for alignment in Alignment::ALL {
            entries.push((
                format!("i{prefix}{}", alignment.tag()),
                build(alignment, true),
            ));
        }
    }

    for (name, rules) in [
        ("hscroll", HSCROLL),
        ("vscroll", VSCROLL),
        ("cvi", COVER_IMAGE),
        ("cvv", COVER_VIDEO),
        ("mask", MASK),
    ] {
        entries.push((name.to_string(), rules.to_string()));
    }

    entries
}

/// Looks up one preset by class name.
pub fn get(name: &str) -> Option<String> {
    all()
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, rules)| rules)
}

/// Renders the reset sheet followed by one rule per preset class.
pub fn stylesheet() -> String {
    let mut sheet = String::from(normalize());
    for (name, rules) in all() {
        sheet.push_str(&format!("\n.{name} {{\n  {rules}\n}}\n"));
    }
    sheet
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_all_has_stable_size() {
        assert_eq!(all().len(), 169);
    }

    #[test]
    fn test_all_names_are_unique() {
        let names: HashSet<String> = all().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names.len(), 169);
    }

    #[test]
    fn test_positioning_classes_delegate_to_generators() {
        assert_eq!(get("tl"), Some(abs(Alignment::Tl)));
        assert_eq!(get("cc"), Some(abs(Alignment::Cc)));
        assert_eq!(get("ftl"), Some(fixed(Alignment::Tl)));
        assert_eq!(get("fss"), Some(fixed(Alignment::Ss)));
    }

    #[test]
    fn test_flex_classes_delegate_to_generators() {
        assert_eq!(get("fhtl"), Some(flexh(Alignment::Tl, false)));
        assert_eq!(get("frhcc"), Some(flexrh(Alignment::Cc, false)));
        assert_eq!(get("fvbs"), Some(flexv(Alignment::Bs, false)));
        assert_eq!(get("ifhtl"), Some(flexh(Alignment::Tl, true)));
        assert_eq!(get("ifrvss"), Some(flexrv(Alignment::Ss, true)));
    }

    #[test]
    fn test_static_classes() {
        assert_eq!(get("box"), Some(BOX.to_string()));
        assert_eq!(get("filled"), Some(FILLED.to_string()));
        assert_eq!(get("hscroll"), Some(HSCROLL.to_string()));
        assert_eq!(get("cvi"), Some(COVER_IMAGE.to_string()));
        assert_eq!(get("mask"), Some(MASK.to_string()));
    }

    #[test]
    fn test_get_unknown_name() {
        assert_eq!(get("fhxx"), None);
        assert_eq!(get(""), None);
    }

    #[test]
    fn test_stylesheet_bundles_reset_and_presets() {
        let sheet = stylesheet();
        assert!(sheet.starts_with(normalize()));
        assert!(sheet.contains(".tl {"));
        assert!(sheet.contains(".fhcc {"));
        assert!(sheet.contains(".ifrvss {"));
        assert!(sheet.contains(".mask {"));
    }

    #[test]
    fn test_stylesheet_is_valid_css() {
        let sheet = stylesheet();
        let result = lightningcss::stylesheet::StyleSheet::parse(
            &sheet,
            lightningcss::stylesheet::ParserOptions::default(),
        );
        assert!(result.is_ok());
    }
}
