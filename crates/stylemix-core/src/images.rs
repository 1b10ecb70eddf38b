//! Background image helpers.

/// Centered, non-repeating background that covers the element.
pub fn cover_background(src: &str) -> String {
    crate::format(&format!(
        "
        background-image: url('{src}');
        background-position: center;
        background-repeat: no-repeat;
        background-size: cover;
        "
    ))
}

/// Centered, non-repeating background contained within the element.
pub fn contained_background(src: &str) -> String {
    crate::format(&format!(
        "
        background-image: url('{src}');
        background-position: center;
        background-repeat: no-repeat;
        background-size: contain;
        "
    ))
}

pub use self::{contained_background as cnbg, cover_background as cvbg};
