//! Round-trip document tree for block-style, indentation-based text.
//!
//! This crate provides an ordered document tree that holds data values
//! together with the comments and blank-line layout around them, so a
//! document can be read, queried, edited, merged, and written back with
//! its annotations intact.
//!
//! # Key features
//!
//! - **Dotted-path addressing**: `get`/`set`/`has`/`remove` take paths
//!   like `"build.targets"`, with `\.` escaping a literal dot.
//!   Reads never mutate; writes auto-create missing structure.
//! - **Derived shape**: whether a node is a sequence or a mapping is
//!   inferred from its keys, never stored. Comments and blank lines are
//!   layout and never occupy a position.
//! - **Recursive merge**: layer one tree over another; nodes merge
//!   field-wise, everything else is last-write-wins.
//! - **Codec-driven rendering**: the renderer walks the tree and asks a
//!   [`ScalarCodec`] for every literal, so quoting policy stays
//!   pluggable.
//!
//! # Architecture
//!
//! The crate is organized around these core concepts:
//!
//! - [`Node`]: the ordered composite, with path addressing and merging
//! - [`Value`], [`Comment`], [`BlankLine`]: the leaf kinds, unified by
//!   [`Element`] and annotated through [`Annotated`]
//! - [`TreeValue`]: plain nested data, both insertion input and the
//!   output of [`Node::to_data`]
//! - [`Renderer`] and the [`ScalarCodec`] / [`DocumentParser`] seams to
//!   the external codec and parser collaborators
//!
//! # Example
//!
//! ```rust
//! use yamlet_ast::{Annotated, Node};
//!
//! let mut doc = Node::new();
//! doc.set("title", "My Document");
//! doc.set("build.targets", vec!["web", "pdf"]);
//! doc.add_comment("generated file, edit with care");
//!
//! assert!(doc.has("build.targets"));
//! let data = doc.to_data();
//! assert!(data.as_map().unwrap().contains_key("title"));
//! ```

mod comments;
mod data;
mod element;
mod error;
mod node;
mod parse;
mod path;
mod render;
mod scalar;

pub use comments::{Annotated, Comment, Comments};
pub use data::TreeValue;
pub use element::{BlankLine, Element, Value};
pub use error::AccessError;
pub use node::{Node, NodeKey};
pub use parse::DocumentParser;
pub use path::escape_key;
pub use render::{Renderer, ScalarCodec};
pub use scalar::Scalar;
