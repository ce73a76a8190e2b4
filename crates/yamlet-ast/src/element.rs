//! Leaf entities and the uniform child element.

use crate::comments::{Annotated, Comment, Comments};
use crate::node::Node;
use crate::scalar::Scalar;
use serde::{Serialize, Serializer};

/// A leaf holding one primitive value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Value {
    raw: Scalar,
    comments: Comments,
}

impl Value {
    /// Create a value from a primitive.
    pub fn new(raw: impl Into<Scalar>) -> Self {
        Value {
            raw: raw.into(),
            comments: Comments::new(),
        }
    }

    /// Create a value holding nothing.
    pub fn null() -> Self {
        Value::default()
    }

    /// Store a new primitive as-is. The attached comments are untouched.
    pub fn set_value(&mut self, raw: impl Into<Scalar>) {
        self.raw = raw.into();
    }

    /// The stored primitive.
    pub fn value(&self) -> &Scalar {
        &self.raw
    }

    /// Consume the value, keeping only its primitive.
    pub fn into_scalar(self) -> Scalar {
        self.raw
    }
}

impl Annotated for Value {
    fn comments(&self) -> &Comments {
        &self.comments
    }

    fn comments_mut(&mut self) -> &mut Comments {
        &mut self.comments
    }
}

impl Serialize for Value {
    // Exports see the primitive, never the wrapper.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// A blank separator line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlankLine {
    comments: Comments,
}

impl BlankLine {
    /// Create a blank line.
    pub fn new() -> Self {
        BlankLine::default()
    }
}

impl Annotated for BlankLine {
    fn comments(&self) -> &Comments {
        &self.comments
    }

    fn comments_mut(&mut self) -> &mut Comments {
        &mut self.comments
    }
}

/// Any child of a [`Node`]: a nested composite, a leaf value, a comment
/// line, or a blank line.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A nested composite.
    Node(Node),
    /// A leaf value.
    Value(Value),
    /// A standalone comment line.
    Comment(Comment),
    /// A blank separator line.
    Blank(BlankLine),
}

impl Element {
    /// Check if this is a nested node.
    pub fn is_node(&self) -> bool {
        matches!(self, Element::Node(_))
    }

    /// Check if this is a leaf value.
    pub fn is_value(&self) -> bool {
        matches!(self, Element::Value(_))
    }

    /// Check if this is a comment line.
    pub fn is_comment(&self) -> bool {
        matches!(self, Element::Comment(_))
    }

    /// Check if this is a blank line.
    pub fn is_blank(&self) -> bool {
        matches!(self, Element::Blank(_))
    }

    /// Get the nested node if this is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Element::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Get the nested node mutably if this is one.
    pub fn as_node_mut(&mut self) -> Option<&mut Node> {
        match self {
            Element::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Get the leaf value if this is one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Element::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Get the leaf value mutably if this is one.
    pub fn as_value_mut(&mut self) -> Option<&mut Value> {
        match self {
            Element::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Shortcut to the leaf's primitive.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        self.as_value().map(Value::value)
    }

    /// Human-readable kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Element::Node(_) => "node",
            Element::Value(_) => "value",
            Element::Comment(_) => "comment",
            Element::Blank(_) => "blank line",
        }
    }

    /// Comment lines rendered above this element.
    ///
    /// Comment children have none of their own; comments-on-comments
    /// are not modeled.
    pub fn comments(&self) -> &[Comment] {
        match self {
            Element::Node(node) => node.comments().lines(),
            Element::Value(value) => value.comments().lines(),
            Element::Blank(blank) => blank.comments().lines(),
            Element::Comment(_) => &[],
        }
    }

    /// Mutable access to the attached comments, for the kinds that
    /// carry them.
    pub fn comments_mut(&mut self) -> Option<&mut Comments> {
        match self {
            Element::Node(node) => Some(node.comments_mut()),
            Element::Value(value) => Some(value.comments_mut()),
            Element::Blank(blank) => Some(blank.comments_mut()),
            Element::Comment(_) => None,
        }
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(node)
    }
}

impl From<Value> for Element {
    fn from(value: Value) -> Self {
        Element::Value(value)
    }
}

impl From<Comment> for Element {
    fn from(comment: Comment) -> Self {
        Element::Comment(comment)
    }
}

impl From<BlankLine> for Element {
    fn from(blank: BlankLine) -> Self {
        Element::Blank(blank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_keeps_comments_across_updates() {
        let mut value = Value::new("draft");
        value.add_comment("reviewed");
        value.set_value("final");
        assert_eq!(value.value(), &Scalar::Str("final".to_string()));
        assert_eq!(value.comments().len(), 1);
    }

    #[test]
    fn test_set_and_remove_comments_through_the_capability() {
        let mut value = Value::new(1);
        value.add_comment("old");
        value.set_comments(["a", "b"]);
        assert_eq!(value.comments().len(), 2);
        assert_eq!(value.comments().lines()[0].text(), "# a");
        value.remove_comments();
        assert!(value.comments().is_empty());
    }

    #[test]
    fn test_null_value() {
        assert!(Value::null().value().is_null());
        assert!(Value::new(Scalar::Null).value().is_null());
    }

    #[test]
    fn test_element_accessors() {
        let element = Element::from(Value::new(3));
        assert!(element.is_value());
        assert!(!element.is_node());
        assert_eq!(element.as_scalar(), Some(&Scalar::Int(3)));
        assert!(element.as_node().is_none());
        assert_eq!(element.kind_name(), "value");
    }

    #[test]
    fn test_comment_element_has_no_attached_comments() {
        let mut element = Element::from(Comment::new("note"));
        assert!(element.comments().is_empty());
        assert!(element.comments_mut().is_none());
    }

    #[test]
    fn test_blank_line_carries_comments() {
        let mut blank = BlankLine::new();
        blank.add_comment("spacer");
        let element = Element::from(blank);
        assert_eq!(element.comments().len(), 1);
    }
}
