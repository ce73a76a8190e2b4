//! The seam to an external document parser.

use crate::data::TreeValue;
use crate::node::Node;

/// External collaborator that turns source text into a populated tree.
///
/// The tree model owns no grammar. Implementations drive the insertion
/// operations on [`Node`] while reading their input and hand back the
/// finished root. Failures keep whatever type the implementation
/// reports; the tree model neither wraps nor inspects them.
pub trait DocumentParser {
    /// The implementation's own failure type, propagated unchanged.
    type Error;

    /// Parse one block-style document into a tree.
    fn parse(&mut self, text: &str) -> Result<Node, Self::Error>;
}

impl Node {
    /// Replace this tree with the result of parsing `text` and return
    /// the parsed document's data projection.
    ///
    /// Parse failures propagate unchanged and leave this tree as it
    /// was.
    pub fn parse_with<P: DocumentParser>(
        &mut self,
        parser: &mut P,
        text: &str,
    ) -> Result<TreeValue, P::Error> {
        *self = parser.parse(text)?;
        Ok(self.to_data())
    }
}
