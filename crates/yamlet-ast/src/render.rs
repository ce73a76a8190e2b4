//! Tree-to-text rendering.

use crate::element::Element;
use crate::node::{Node, NodeKey};
use crate::scalar::Scalar;

/// Encodes primitives and mapping keys into textual literals.
///
/// Quoting, escaping, and literal formatting live behind this seam; the
/// renderer consults it for every leaf and every named mapping key.
/// Implicit position keys render as plain decimal without it.
pub trait ScalarCodec {
    /// Encode a primitive into its literal text.
    fn encode(&self, scalar: &Scalar) -> String;

    /// Encode a mapping key, quoting it when bare text would misread.
    fn encode_key(&self, key: &str) -> String;
}

/// Renders a tree back to indented block text.
///
/// Children render in insertion order; the sequence-vs-mapping marker
/// is decided once per node from its derived kind and applied to every
/// child of that node. Indentation is two spaces per level.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a, C: ScalarCodec> {
    codec: &'a C,
}

impl<'a, C: ScalarCodec> Renderer<'a, C> {
    /// Create a renderer over the given codec.
    pub fn new(codec: &'a C) -> Self {
        Renderer { codec }
    }

    /// Render `node` to text. The result carries no trailing newline.
    pub fn render(&self, node: &Node) -> String {
        self.render_at(node, 0)
    }

    fn render_at(&self, node: &Node, indent: usize) -> String {
        let pad = "  ".repeat(indent);
        let associative = node.is_associative();
        let mut out = String::new();

        for (key, element) in node.entries() {
            for comment in element.comments() {
                out.push_str(&pad);
                out.push_str(comment.text());
                out.push('\n');
            }

            match element {
                Element::Node(child) => {
                    out.push_str(&pad);
                    out.push_str(&self.marker(associative, key));
                    out.push('\n');
                    out.push_str(&self.render_at(child, indent + 1));
                    out.push('\n');
                }
                Element::Comment(comment) => {
                    out.push_str(&pad);
                    out.push_str(comment.text());
                    out.push('\n');
                }
                Element::Blank(_) => out.push('\n'),
                Element::Value(value) => {
                    out.push_str(&pad);
                    out.push_str(&self.marker(associative, key));
                    out.push(' ');
                    if !value.value().is_null() {
                        out.push_str(&self.codec.encode(value.value()));
                    }
                    out.push('\n');
                }
            }
        }

        trim_trailing_newlines(out)
    }

    fn marker(&self, associative: bool, key: Option<&NodeKey>) -> String {
        match (associative, key) {
            (false, _) | (true, None) => "-".to_string(),
            (true, Some(NodeKey::Name(name))) => format!("{}:", self.codec.encode_key(name)),
            (true, Some(NodeKey::Index(i))) => format!("{i}:"),
        }
    }
}

fn trim_trailing_newlines(mut text: String) -> String {
    while text.ends_with('\n') {
        text.pop();
    }
    text
}
