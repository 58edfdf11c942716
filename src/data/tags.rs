//! HTML tag classification tables
//!
//! Tag names are compared in lowercase; the DOM adapter lowercases every
//! element name on conversion.

use phf::phf_set;

/// Element that starts a table and bounds row/cell extraction
pub const TABLE_TAG: &str = "table";

/// Element that declares a table row
pub const ROW_TAG: &str = "tr";

/// Elements that declare a table cell
pub static CELL_TAGS: phf::Set<&'static str> = phf_set! {
    "td",
    "th",
};

/// Elements whose content never renders as text
pub static NON_RENDERED_TAGS: phf::Set<&'static str> = phf_set! {
    "script",
    "style",
    "template",
};

/// Elements that separate the words on either side of them when a subtree
/// is rendered to text
pub static WORD_BREAK_TAGS: phf::Set<&'static str> = phf_set! {
    "br",
    "p",
    "div",
    "li",
    "ul",
    "ol",
    "dl",
    "dt",
    "dd",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "pre",
    "blockquote",
    "hr",
    "table",
    "caption",
    "thead",
    "tbody",
    "tfoot",
    "tr",
    "td",
    "th",
};

/// Whether `tag` declares a table cell
pub fn is_cell_tag(tag: &str) -> bool {
    CELL_TAGS.contains(tag)
}

/// Whether `tag` never contributes rendered text
pub fn is_non_rendered_tag(tag: &str) -> bool {
    NON_RENDERED_TAGS.contains(tag)
}

/// Whether `tag` separates words when rendered
pub fn is_word_break_tag(tag: &str) -> bool {
    WORD_BREAK_TAGS.contains(tag)
}
