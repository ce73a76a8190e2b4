//! Scalar codec for the yamlet document tree.
//!
//! This crate is the concrete side of the [`ScalarCodec`] seam in
//! `yamlet-ast`: it decides when a string needs quoting, escapes quoted
//! forms, renders the other primitives canonically, and reads literals
//! back into primitives for parser implementations.
//!
//! # Example
//!
//! ```rust
//! use yamlet_ast::Node;
//! use yamlet_codec::render_to_string;
//!
//! let mut doc = Node::new();
//! doc.set("name", "true");
//! doc.set("count", 3);
//!
//! assert_eq!(render_to_string(&doc), "name: 'true'\ncount: 3");
//! ```
//!
//! [`ScalarCodec`]: yamlet_ast::ScalarCodec

mod codec;
mod decode;

pub use codec::{ScalarStyle, YamlCodec};
pub use decode::decode;

use yamlet_ast::{Node, Renderer};

/// Render a tree with the default codec.
pub fn render_to_string(node: &Node) -> String {
    Renderer::new(&YamlCodec::new()).render(node)
}
