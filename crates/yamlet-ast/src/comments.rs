//! Comment lines and the shared comment-holding capability.

use serde::{Serialize, Serializer};

/// A single normalized comment line.
///
/// Construction from raw text trims surrounding whitespace and
/// guarantees a leading `#` (a `"# "` prefix is added when absent).
/// Comment lines carry no comments of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    text: String,
}

impl Comment {
    /// Create a comment from raw text, normalizing it.
    pub fn new(text: impl Into<String>) -> Self {
        Comment {
            text: normalize(&text.into()),
        }
    }

    /// Replace the comment text, re-normalizing it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = normalize(&text.into());
    }

    /// The normalized comment line, leading `#` included.
    pub fn text(&self) -> &str {
        &self.text
    }
}

fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("# {}", trimmed)
    }
}

impl From<&str> for Comment {
    fn from(text: &str) -> Self {
        Comment::new(text)
    }
}

impl From<String> for Comment {
    fn from(text: String) -> Self {
        Comment::new(text)
    }
}

impl Serialize for Comment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Ordered comment lines attached to a tree entity.
///
/// Insertion order is render order. Duplicates are allowed; the holder
/// normalizes structure, not content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comments {
    lines: Vec<Comment>,
}

impl Comments {
    /// Create an empty holder.
    pub fn new() -> Self {
        Comments::default()
    }

    /// Append one comment; raw strings are normalized on the way in.
    pub fn add(&mut self, comment: impl Into<Comment>) {
        self.lines.push(comment.into());
    }

    /// Replace the whole holder, re-adding each entry through [`add`]
    /// so raw strings in the list are normalized the same way.
    ///
    /// [`add`]: Comments::add
    pub fn set<I, C>(&mut self, comments: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Comment>,
    {
        self.lines.clear();
        for comment in comments {
            self.add(comment);
        }
    }

    /// Drop every comment.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The ordered comment lines; empty slice when there are none.
    pub fn lines(&self) -> &[Comment] {
        &self.lines
    }

    /// Iterate the comment lines in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Comment> {
        self.lines.iter()
    }

    /// Check if the holder is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of comment lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

impl<'a> IntoIterator for &'a Comments {
    type Item = &'a Comment;
    type IntoIter = std::slice::Iter<'a, Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// The shared comment capability.
///
/// Every tree entity that can be annotated embeds a [`Comments`] holder
/// and exposes it through this trait, so callers and the renderer treat
/// the entity kinds uniformly.
pub trait Annotated {
    /// The attached comments.
    fn comments(&self) -> &Comments;

    /// Mutable access to the attached comments.
    fn comments_mut(&mut self) -> &mut Comments;

    /// Append one comment line; raw strings are normalized.
    fn add_comment(&mut self, comment: impl Into<Comment>)
    where
        Self: Sized,
    {
        self.comments_mut().add(comment);
    }

    /// Replace all comments, normalizing raw strings.
    fn set_comments<I, C>(&mut self, comments: I)
    where
        Self: Sized,
        I: IntoIterator<Item = C>,
        C: Into<Comment>,
    {
        self.comments_mut().set(comments);
    }

    /// Drop every attached comment.
    fn remove_comments(&mut self) {
        self.comments_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_missing_hash() {
        assert_eq!(Comment::new("hello").text(), "# hello");
        assert_eq!(Comment::new("  padded  ").text(), "# padded");
    }

    #[test]
    fn test_keeps_existing_hash() {
        assert_eq!(Comment::new("# already").text(), "# already");
        assert_eq!(Comment::new("#tight").text(), "#tight");
        assert_eq!(Comment::new("   # indented").text(), "# indented");
    }

    #[test]
    fn test_set_text_renormalizes() {
        let mut comment = Comment::new("# one");
        comment.set_text("two");
        assert_eq!(comment.text(), "# two");
    }

    #[test]
    fn test_holder_preserves_order_and_duplicates() {
        let mut comments = Comments::new();
        comments.add("first");
        comments.add("second");
        comments.add("first");
        let texts: Vec<&str> = comments.iter().map(Comment::text).collect();
        assert_eq!(texts, vec!["# first", "# second", "# first"]);
    }

    #[test]
    fn test_set_renormalizes_each_entry() {
        let mut comments = Comments::new();
        comments.add("old");
        comments.set(["a", "# b"]);
        let texts: Vec<&str> = comments.iter().map(Comment::text).collect();
        assert_eq!(texts, vec!["# a", "# b"]);
    }

    #[test]
    fn test_clear() {
        let mut comments = Comments::new();
        comments.add("x");
        comments.clear();
        assert!(comments.is_empty());
        assert_eq!(comments.len(), 0);
    }
}
