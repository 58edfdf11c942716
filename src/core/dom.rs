//! Owned HTML element tree
//!
//! The table engine never parses markup itself. HTML is handed to
//! `html5ever`, and the resulting `RcDom` is converted into an owned
//! [`DomNode`] tree that the extractors can borrow freely.
//!
//! ## Example
//!
//! ```rust
//! use webtable::core::dom::parse_html;
//!
//! let root = parse_html("<table><tr><td>One</td></tr></table>");
//! assert_eq!(root.text_content(), "One");
//! ```

use std::io::Read;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::data::tags::{is_non_rendered_tag, is_word_break_tag};
use crate::utils::error::TableResult;
use crate::utils::text::normalize_whitespace;

/// Kind of a DOM node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomNodeType {
    Document,
    Element {
        /// Lowercase tag name
        tag_name: String,
        /// Attributes in source order, names lowercase
        attributes: Vec<(String, String)>,
    },
    Text {
        content: String,
    },
}

/// A node of the owned element tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomNode {
    pub node_type: DomNodeType,
    pub children: Vec<DomNode>,
}

impl DomNode {
    /// Create a document root with the given children
    pub fn document(children: Vec<DomNode>) -> Self {
        DomNode {
            node_type: DomNodeType::Document,
            children,
        }
    }

    /// Create an element with no attributes or children
    pub fn element(tag_name: &str) -> Self {
        DomNode {
            node_type: DomNodeType::Element {
                tag_name: tag_name.to_ascii_lowercase(),
                attributes: Vec::new(),
            },
            children: Vec::new(),
        }
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        DomNode {
            node_type: DomNodeType::Text {
                content: content.into(),
            },
            children: Vec::new(),
        }
    }

    /// Add an attribute (ignored on non-element nodes)
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        if let DomNodeType::Element { attributes, .. } = &mut self.node_type {
            attributes.push((name.to_ascii_lowercase(), value.into()));
        }
        self
    }

    /// Append one child
    pub fn with_child(mut self, child: DomNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children
    pub fn with_children(mut self, children: impl IntoIterator<Item = DomNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn tag_name(&self) -> Option<&str> {
        match &self.node_type {
            DomNodeType::Element { tag_name, .. } => Some(tag_name),
            _ => None,
        }
    }

    /// Whether this is an element with the given (lowercase) tag name
    pub fn is_element_named(&self, tag: &str) -> bool {
        self.tag_name() == Some(tag)
    }

    pub fn is_element(&self) -> bool {
        matches!(self.node_type, DomNodeType::Element { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self.node_type, DomNodeType::Text { .. })
    }

    /// Attribute lookup, case-insensitive on the name
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        match &self.node_type {
            DomNodeType::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Render this subtree to text.
    ///
    /// Script, style and template content is skipped, block-level elements
    /// and `<br>` separate words, and whitespace runs (including `&nbsp;`)
    /// collapse to a single space. The result is trimmed.
    pub fn text_content(&self) -> String {
        let mut raw = String::new();
        self.collect_text(&mut raw);
        normalize_whitespace(&raw)
    }

    fn collect_text(&self, out: &mut String) {
        match &self.node_type {
            DomNodeType::Text { content } => out.push_str(content),
            DomNodeType::Element { tag_name, .. } => {
                if is_non_rendered_tag(tag_name) {
                    return;
                }
                let breaks = is_word_break_tag(tag_name);
                if breaks {
                    out.push(' ');
                }
                for child in &self.children {
                    child.collect_text(out);
                }
                if breaks {
                    out.push(' ');
                }
            }
            DomNodeType::Document => {
                for child in &self.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

// ============================================================================
// html5ever adapter
// ============================================================================

fn parse_options() -> ParseOpts {
    ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Parse an HTML document. Malformed markup is recovered by the parser.
pub fn parse_html(html: &str) -> DomNode {
    let dom = parse_document(RcDom::default(), parse_options()).one(html);
    convert_handle(&dom.document).unwrap_or_else(|| DomNode::document(Vec::new()))
}

/// Parse an HTML document from a UTF-8 byte stream
pub fn parse_html_reader<R: Read>(mut reader: R) -> TableResult<DomNode> {
    let dom = parse_document(RcDom::default(), parse_options())
        .from_utf8()
        .read_from(&mut reader)?;
    Ok(convert_handle(&dom.document).unwrap_or_else(|| DomNode::document(Vec::new())))
}

fn convert_handle(handle: &Handle) -> Option<DomNode> {
    let node_type = match &handle.data {
        NodeData::Document => DomNodeType::Document,
        NodeData::Element { name, attrs, .. } => {
            let attributes = attrs
                .borrow()
                .iter()
                .map(|attr| {
                    (
                        attr.name.local.to_string(),
                        attr.value.to_string(),
                    )
                })
                .collect();
            DomNodeType::Element {
                tag_name: name.local.to_string(),
                attributes,
            }
        }
        NodeData::Text { contents } => DomNodeType::Text {
            content: contents.borrow().to_string(),
        },
        _ => return None,
    };

    // Template contents live outside `children` in rcdom and are inert.
    let children = handle
        .children
        .borrow()
        .iter()
        .filter_map(convert_handle)
        .collect();

    Some(DomNode {
        node_type,
        children,
    })
}
