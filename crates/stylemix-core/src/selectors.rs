//! Selector constants for common rule targets.
//!
//! Most are plain CSS selectors. [`HOVER_WITHOUT_TOUCH`] uses the `&`
//! nesting placeholder and expects a preprocessor or native CSS nesting
//! to resolve it.

/// Hover state, suppressed while the `html` tag carries a `touch` class.
pub const HOVER_WITHOUT_TOUCH: &str = "html:not(.touch) &:hover";

/// Every immediate child except the last.
pub const EACH_BUT_LAST_CHILD: &str = "> *:not(:last-child)";

/// Every immediate child except the first.
pub const EACH_BUT_FIRST_CHILD: &str = "> *:not(:first-child)";

/// Lists at nesting depth one.
pub const UL1: &str = "ul";
/// Unordered lists at nesting depth two.
pub const UL2: &str = "ul ul, ol ul";
/// Unordered lists at nesting depth three.
pub const UL3: &str = "ul ul ul, ul ol ul, ol ul ul, ol ol ul";

/// Ordered lists at nesting depth one.
pub const OL1: &str = "ol";
/// Ordered lists at nesting depth two.
pub const OL2: &str = "ul ol, ol ol";
/// Ordered lists at nesting depth three.
pub const OL3: &str = "ul ul ol, ul ol ol, ol ul ol, ol ol ol";

/// Lists that directly follow a paragraph or another list.
pub const P2L: &str = "p + ul, p + ol, ul + ul, ul + ol, ol + ul, ol + ol";

/// Paragraphs that directly follow a paragraph or a list.
pub const P2P: &str = "p + p, ul + p, ol + p";

/// Any element directly following an `h1`.
pub const H12A: &str = "h1 + *";
/// Any element directly following an `h2`.
pub const H22A: &str = "h2 + *";
/// Any element directly following an `h3`.
pub const H32A: &str = "h3 + *";
/// Any element directly following an `h4`.
pub const H42A: &str = "h4 + *";
/// Any element directly following an `h5`.
pub const H52A: &str = "h5 + *";
/// Any element directly following an `h6`.
pub const H62A: &str = "h6 + *";

/// Any element directly following any heading.
pub const H2A: &str = "h1 + *, h2 + *, h3 + *, h4 + *, h5 + *, h6 + *";

/// An `h1` directly following any element.
pub const A2H1: &str = "* + h1";
/// An `h2` directly following any element.
pub const A2H2: &str = "* + h2";
/// An `h3` directly following any element.
pub const A2H3: &str = "* + h3";
/// An `h4` directly following any element.
pub const A2H4: &str = "* + h4";
/// An `h5` directly following any element.
pub const A2H5: &str = "* + h5";
/// An `h6` directly following any element.
pub const A2H6: &str = "* + h6";

/// Any heading directly following any element.
pub const A2H: &str = "* + h1, * + h2, * + h3, * + h4, * + h5, * + h6";

/// All six heading levels.
pub const H: &str = "h1, h2, h3, h4, h5, h6";

/// Short alias for [`HOVER_WITHOUT_TOUCH`].
pub const HWOT: &str = HOVER_WITHOUT_TOUCH;

/// Short alias for [`EACH_BUT_LAST_CHILD`].
pub const EBLC: &str = EACH_BUT_LAST_CHILD;

/// Short alias for [`EACH_BUT_FIRST_CHILD`].
pub const EBFC: &str = EACH_BUT_FIRST_CHILD;
