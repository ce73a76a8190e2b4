//! Plain nested data: aggregate input for insertion and the output of
//! tree projection.

use crate::scalar::Scalar;
use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Plain nested data with no comment or layout information.
///
/// This is both what insertion and assignment operations accept (the
/// variant decides between leaf and composite handling at the call
/// site) and what [`crate::Node::to_data`] projects a tree into.
/// Mapping entries keep their insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeValue {
    /// A primitive leaf.
    Scalar(Scalar),
    /// An ordered sequence.
    Seq(Vec<TreeValue>),
    /// A keyed mapping, in insertion order.
    Map(IndexMap<String, TreeValue>),
}

impl TreeValue {
    /// The absent value.
    pub fn null() -> Self {
        TreeValue::Scalar(Scalar::Null)
    }

    /// Check if this is a primitive.
    pub fn is_scalar(&self) -> bool {
        matches!(self, TreeValue::Scalar(_))
    }

    /// Check if this is a sequence.
    pub fn is_seq(&self) -> bool {
        matches!(self, TreeValue::Seq(_))
    }

    /// Check if this is a mapping.
    pub fn is_map(&self) -> bool {
        matches!(self, TreeValue::Map(_))
    }

    /// Get the primitive if this is one.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            TreeValue::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Get the items if this is a sequence.
    pub fn as_seq(&self) -> Option<&[TreeValue]> {
        match self {
            TreeValue::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Get the entries if this is a mapping.
    pub fn as_map(&self) -> Option<&IndexMap<String, TreeValue>> {
        match self {
            TreeValue::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl Default for TreeValue {
    fn default() -> Self {
        TreeValue::null()
    }
}

impl From<Scalar> for TreeValue {
    fn from(scalar: Scalar) -> Self {
        TreeValue::Scalar(scalar)
    }
}

impl From<&str> for TreeValue {
    fn from(value: &str) -> Self {
        TreeValue::Scalar(Scalar::from(value))
    }
}

impl From<String> for TreeValue {
    fn from(value: String) -> Self {
        TreeValue::Scalar(Scalar::from(value))
    }
}

impl From<i32> for TreeValue {
    fn from(value: i32) -> Self {
        TreeValue::Scalar(Scalar::from(value))
    }
}

impl From<i64> for TreeValue {
    fn from(value: i64) -> Self {
        TreeValue::Scalar(Scalar::from(value))
    }
}

impl From<f64> for TreeValue {
    fn from(value: f64) -> Self {
        TreeValue::Scalar(Scalar::from(value))
    }
}

impl From<bool> for TreeValue {
    fn from(value: bool) -> Self {
        TreeValue::Scalar(Scalar::from(value))
    }
}

impl<T: Into<TreeValue>> From<Vec<T>> for TreeValue {
    fn from(items: Vec<T>) -> Self {
        TreeValue::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<TreeValue>> From<IndexMap<String, T>> for TreeValue {
    fn from(entries: IndexMap<String, T>) -> Self {
        TreeValue::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<'a, T: Into<TreeValue>> FromIterator<(&'a str, T)> for TreeValue {
    fn from_iter<I: IntoIterator<Item = (&'a str, T)>>(iter: I) -> Self {
        TreeValue::Map(
            iter.into_iter()
                .map(|(k, v)| (k.to_string(), v.into()))
                .collect(),
        )
    }
}

impl Serialize for TreeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TreeValue::Scalar(scalar) => scalar.serialize(serializer),
            TreeValue::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            TreeValue::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
