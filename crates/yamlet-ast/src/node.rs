//! The composite tree: ordered children, dotted-path addressing,
//! merging, and data projection.

use crate::comments::{Annotated, Comment, Comments};
use crate::data::TreeValue;
use crate::element::{BlankLine, Element, Value};
use crate::error::AccessError;
use crate::path::{self, canonical_index, escape_key};
use crate::scalar::Scalar;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Key of a data child: an explicit name or an implicit position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKey {
    /// Implicit 0-based position.
    Index(usize),
    /// Explicit mapping key, stored unescaped.
    Name(String),
}

impl NodeKey {
    /// Get the position if this is an implicit key.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            NodeKey::Index(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the name if this is an explicit key.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            NodeKey::Name(name) => Some(name),
            _ => None,
        }
    }

    /// A segment addresses a position when it is a canonical decimal
    /// numeral, and a name otherwise.
    fn from_segment(segment: &str) -> NodeKey {
        match canonical_index(segment) {
            Some(i) => NodeKey::Index(i),
            None => NodeKey::Name(segment.to_string()),
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Index(i) => write!(f, "{i}"),
            NodeKey::Name(name) => f.write_str(name),
        }
    }
}

/// One slot in a node: an optional key and the child element.
///
/// Positionally-inserted comments and blank lines are keyless: they are
/// layout, not data, and never occupy an index.
#[derive(Debug, Clone, PartialEq)]
struct Entry {
    key: Option<NodeKey>,
    element: Element,
}

/// An ordered composite of keyed children and layout markers.
///
/// Insertion order is preserved and semantically significant: it drives
/// both the sequence-vs-mapping decision and render order. Whether a
/// node is sequence-like is derived from its keys, never stored; see
/// [`is_sequence`].
///
/// Children are addressed by dotted paths (`"build.targets"`), where
/// `\.` escapes a literal dot inside one segment.
///
/// [`is_sequence`]: Node::is_sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    entries: Vec<Entry>,
    comments: Comments,
}

impl Node {
    /// Create an empty node.
    pub fn new() -> Self {
        Node::default()
    }

    /// Number of children, layout markers included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the node has no children at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw ordered children, layout markers included.
    pub fn entries(&self) -> impl Iterator<Item = (Option<&NodeKey>, &Element)> {
        self.entries.iter().map(|e| (e.key.as_ref(), &e.element))
    }

    // ---- insertion ----------------------------------------------------

    /// Insert `element` under `key`, or positionally when `key` is
    /// `None` or empty. An existing entry at `key` is silently
    /// overwritten in place: last write wins.
    ///
    /// To annotate the element, attach comments through [`Annotated`]
    /// before inserting it.
    pub fn append_element(&mut self, element: impl Into<Element>, key: Option<&str>) -> &mut Self {
        match key {
            Some(k) if !k.is_empty() => {
                self.insert_keyed(NodeKey::from_segment(k), element.into());
            }
            _ => self.insert_positional(element.into()),
        }
        self
    }

    /// Insert a nested node. Key handling as in [`append_element`].
    ///
    /// [`append_element`]: Node::append_element
    pub fn append_node(&mut self, node: Node, key: Option<&str>) -> &mut Self {
        self.append_element(node, key)
    }

    /// Insert plain data.
    ///
    /// A scalar wraps in a [`Value`] carrying `comments` and lands under
    /// `key`. An aggregate always creates a new child node inserted
    /// positionally (the requested `key` applies to scalar input only)
    /// with `comments` attached to that node and every entry assigned
    /// through its own key or index.
    pub fn append_value(
        &mut self,
        value: impl Into<TreeValue>,
        key: Option<&str>,
        comments: Vec<Comment>,
    ) -> &mut Self {
        match value.into() {
            TreeValue::Scalar(raw) => {
                let mut leaf = Value::new(raw);
                leaf.comments_mut().set(comments);
                self.append_element(leaf, key);
            }
            TreeValue::Seq(items) => {
                let mut child = Node::new();
                child.comments_mut().set(comments);
                for (i, item) in items.into_iter().enumerate() {
                    child.set(&i.to_string(), item);
                }
                self.insert_positional(Element::Node(child));
            }
            TreeValue::Map(entries) => {
                let mut child = Node::new();
                child.comments_mut().set(comments);
                for (k, v) in entries {
                    child.set(&k, v);
                }
                self.insert_positional(Element::Node(child));
            }
        }
        self
    }

    /// Insert a standalone comment line.
    pub fn append_comment(&mut self, comment: impl Into<Comment>) -> &mut Self {
        self.append_element(comment.into(), None)
    }

    /// Insert a blank separator line.
    pub fn append_blank_line(&mut self) -> &mut Self {
        self.append_element(BlankLine::new(), None)
    }

    // ---- path-addressed access ----------------------------------------

    /// Check if `path` resolves to an element.
    pub fn has(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Look up an element by dotted path.
    ///
    /// Read-only: intermediate segments resolve into existing child
    /// nodes only, and an unresolvable segment yields `None` without
    /// creating any structure.
    pub fn get(&self, path: &str) -> Option<&Element> {
        let mut segments = path::split(path);
        let last = segments.pop()?;
        let mut node = self;
        for segment in &segments {
            node = node.child(segment)?.as_node()?;
        }
        node.child(&last)
    }

    /// Mutable variant of [`get`].
    ///
    /// [`get`]: Node::get
    pub fn get_mut(&mut self, path: &str) -> Option<&mut Element> {
        let mut segments = path::split(path);
        let last = segments.pop()?;
        let mut node: &mut Node = self;
        for segment in &segments {
            node = match node.child_mut(segment) {
                Some(Element::Node(inner)) => inner,
                _ => return None,
            };
        }
        node.child_mut(&last)
    }

    /// Assign plain data at `path`, creating intermediate nodes as
    /// needed.
    ///
    /// An intermediate segment holding anything but a node is
    /// overwritten by a fresh empty node. At the final segment a scalar
    /// updates an existing [`Value`] in place, keeping its comments,
    /// or places a new one; an aggregate replaces the slot with a new
    /// node and assigns each of its entries under its own dot-escaped
    /// key. Never fails: a path with no segments is a no-op.
    pub fn set(&mut self, path: &str, value: impl Into<TreeValue>) {
        let mut segments = path::split(path);
        let Some(last) = segments.pop() else {
            return;
        };
        let mut node: &mut Node = self;
        for segment in &segments {
            node = node.child_node_or_create(segment);
        }
        node.set_local(&last, value.into());
    }

    /// Place a pre-built [`Value`] at `path`.
    ///
    /// Intermediate handling as in [`set`]. An existing value at the
    /// final segment takes over the new primitive in place, keeping its
    /// own comments; otherwise `value` is inserted as given.
    ///
    /// [`set`]: Node::set
    pub fn set_value(&mut self, path: &str, value: Value) {
        let mut segments = path::split(path);
        let Some(last) = segments.pop() else {
            return;
        };
        let mut node: &mut Node = self;
        for segment in &segments {
            node = node.child_node_or_create(segment);
        }
        let key = NodeKey::from_segment(&last);
        match node.find(&key) {
            Some(i) => {
                if let Element::Value(existing) = &mut node.entries[i].element {
                    existing.set_value(value.into_scalar());
                } else {
                    node.entries[i].element = Element::Value(value);
                }
            }
            None => node.entries.push(Entry {
                key: Some(key),
                element: Element::Value(value),
            }),
        }
    }

    /// Remove the element at `path`, returning it.
    ///
    /// A path that does not resolve is a silent no-op.
    pub fn remove(&mut self, path: &str) -> Option<Element> {
        let mut segments = path::split(path);
        let last = segments.pop()?;
        let mut node: &mut Node = self;
        for segment in &segments {
            node = match node.child_mut(segment) {
                Some(Element::Node(inner)) => inner,
                _ => return None,
            };
        }
        let key = NodeKey::from_segment(&last);
        let i = node.find(&key)?;
        Some(node.entries.remove(i).element)
    }

    /// Scalar at `path`, with a diagnostic on failure.
    pub fn get_scalar(&self, path: &str) -> Result<&Scalar, AccessError> {
        match self.get(path) {
            None => Err(AccessError::NotFound {
                path: path.to_string(),
            }),
            Some(Element::Value(value)) => Ok(value.value()),
            Some(other) => Err(AccessError::KindMismatch {
                path: path.to_string(),
                expected: "value",
                found: other.kind_name(),
            }),
        }
    }

    /// Nested node at `path`, with a diagnostic on failure.
    pub fn get_node(&self, path: &str) -> Result<&Node, AccessError> {
        match self.get(path) {
            None => Err(AccessError::NotFound {
                path: path.to_string(),
            }),
            Some(Element::Node(node)) => Ok(node),
            Some(other) => Err(AccessError::KindMismatch {
                path: path.to_string(),
                expected: "node",
                found: other.kind_name(),
            }),
        }
    }

    // ---- shape and projection -----------------------------------------

    /// Check if the keyed children form the positional run `0..n`.
    ///
    /// Layout markers (comments and blank lines) are skipped: they
    /// never occupy a position. The empty node counts as a sequence.
    pub fn is_sequence(&self) -> bool {
        let mut expected = 0usize;
        for entry in &self.entries {
            if matches!(entry.element, Element::Comment(_) | Element::Blank(_)) {
                continue;
            }
            match &entry.key {
                Some(NodeKey::Index(i)) if *i == expected => expected += 1,
                _ => return false,
            }
        }
        true
    }

    /// Check if the node renders with explicit keys.
    pub fn is_associative(&self) -> bool {
        !self.is_sequence()
    }

    /// Project to plain nested data.
    ///
    /// Comment and blank-line entries are dropped entirely; they never
    /// appear in the projection and never occupy a sequence position.
    pub fn to_data(&self) -> TreeValue {
        if self.is_sequence() {
            TreeValue::Seq(
                self.entries
                    .iter()
                    .filter_map(|entry| data_of(&entry.element))
                    .collect(),
            )
        } else {
            let mut map = IndexMap::new();
            for entry in &self.entries {
                let Some(data) = data_of(&entry.element) else {
                    continue;
                };
                let Some(key) = &entry.key else {
                    continue;
                };
                map.insert(key.to_string(), data);
            }
            TreeValue::Map(map)
        }
    }

    // ---- merging -------------------------------------------------------

    /// Recursively merge `other` into this node.
    ///
    /// Entries merge by key: when both sides hold nodes at a key the
    /// merge recurses, otherwise `other`'s element replaces this one
    /// outright, comments and blank lines included, with no special
    /// casing. Keys present only here are untouched; `other`'s keyless
    /// layout markers are appended. The argument wins on every
    /// conflict, so the operation is not commutative.
    pub fn merge(&mut self, other: Node) -> &mut Self {
        for entry in other.entries {
            let Some(key) = entry.key else {
                self.entries.push(entry);
                continue;
            };
            match self.find(&key) {
                Some(i) => match (&mut self.entries[i].element, entry.element) {
                    (Element::Node(mine), Element::Node(theirs)) => {
                        mine.merge(theirs);
                    }
                    (slot, theirs) => *slot = theirs,
                },
                None => self.entries.push(Entry {
                    key: Some(key),
                    element: entry.element,
                }),
            }
        }
        self
    }

    // ---- internals -----------------------------------------------------

    fn find(&self, key: &NodeKey) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.key.as_ref() == Some(key))
    }

    fn next_index(&self) -> usize {
        self.entries
            .iter()
            .filter_map(|entry| entry.key.as_ref().and_then(NodeKey::as_index))
            .max()
            .map_or(0, |i| i + 1)
    }

    fn insert_keyed(&mut self, key: NodeKey, element: Element) {
        match self.find(&key) {
            Some(i) => self.entries[i].element = element,
            None => self.entries.push(Entry {
                key: Some(key),
                element,
            }),
        }
    }

    fn insert_positional(&mut self, element: Element) {
        let key = match element {
            Element::Comment(_) | Element::Blank(_) => None,
            _ => Some(NodeKey::Index(self.next_index())),
        };
        self.entries.push(Entry { key, element });
    }

    fn child(&self, segment: &str) -> Option<&Element> {
        let key = NodeKey::from_segment(segment);
        self.find(&key).map(|i| &self.entries[i].element)
    }

    fn child_mut(&mut self, segment: &str) -> Option<&mut Element> {
        let key = NodeKey::from_segment(segment);
        self.find(&key).map(|i| &mut self.entries[i].element)
    }

    /// Resolve `segment` to a child node, creating one (displacing any
    /// non-node occupant) as needed.
    fn child_node_or_create(&mut self, segment: &str) -> &mut Node {
        let key = NodeKey::from_segment(segment);
        let at = match self.find(&key) {
            Some(i) => i,
            None => {
                self.entries.push(Entry {
                    key: Some(key),
                    element: Element::Node(Node::new()),
                });
                self.entries.len() - 1
            }
        };
        if !self.entries[at].element.is_node() {
            self.entries[at].element = Element::Node(Node::new());
        }
        match &mut self.entries[at].element {
            Element::Node(node) => node,
            _ => unreachable!("slot was just ensured to hold a node"),
        }
    }

    fn set_local(&mut self, segment: &str, value: TreeValue) {
        let key = NodeKey::from_segment(segment);
        match value {
            TreeValue::Scalar(raw) => match self.find(&key) {
                Some(i) => {
                    if let Element::Value(existing) = &mut self.entries[i].element {
                        existing.set_value(raw);
                    } else {
                        self.entries[i].element = Element::Value(Value::new(raw));
                    }
                }
                None => self.entries.push(Entry {
                    key: Some(key),
                    element: Element::Value(Value::new(raw)),
                }),
            },
            TreeValue::Seq(items) => {
                let mut child = Node::new();
                for (i, item) in items.into_iter().enumerate() {
                    child.set(&i.to_string(), item);
                }
                self.insert_keyed(key, Element::Node(child));
            }
            TreeValue::Map(entries) => {
                let mut child = Node::new();
                for (k, v) in entries {
                    child.set(&escape_key(&k), v);
                }
                self.insert_keyed(key, Element::Node(child));
            }
        }
    }
}

fn data_of(element: &Element) -> Option<TreeValue> {
    match element {
        Element::Node(node) => Some(node.to_data()),
        Element::Value(value) => Some(TreeValue::Scalar(value.value().clone())),
        Element::Comment(_) | Element::Blank(_) => None,
    }
}

impl Annotated for Node {
    fn comments(&self) -> &Comments {
        &self.comments
    }

    fn comments_mut(&mut self) -> &mut Comments {
        &mut self.comments
    }
}

impl Serialize for Node {
    // Exports see the data projection; comments and blank lines are
    // layout and stay out of it.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_data().serialize(serializer)
    }
}
