//! YAML node representation with style and comment metadata.
//!
//! This module provides the core data structure for representing YAML
//! documents in yamlnav. Every value in a document is a `YamlNode` carrying a
//! `NodeKind` tag, an optional scalar value, its children, and opaque
//! formatting metadata (style plus three comment slots) that survives edits
//! untouched.
//!
//! # Example
//!
//! ```
//! use yamlnav::document::node::{NodeKind, YamlNode};
//!
//! // Build `{name: yamlnav, tags: [yaml, path]}`
//! let node = YamlNode::mapping(vec![
//!     (YamlNode::scalar("name"), YamlNode::scalar("yamlnav")),
//!     (
//!         YamlNode::scalar("tags"),
//!         YamlNode::sequence(vec![YamlNode::scalar("yaml"), YamlNode::scalar("path")]),
//!     ),
//! ]);
//!
//! assert_eq!(node.kind(), NodeKind::Mapping);
//! assert_eq!(node.content().len(), 4); // keys and values interleaved
//! ```

/// The shape of a node in the document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A leaf value; the node's `value` string holds its text.
    Scalar,
    /// An ordered list of value nodes.
    Sequence,
    /// Key/value pairs stored as a flat, alternating child list.
    Mapping,
    /// The outer wrapper around a parsed document's single top-level value.
    Document,
}

/// Formatting style attached to a node.
///
/// Styles are carried opaquely: navigation never inspects them, and an update
/// copies the replacement's style verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeStyle {
    /// Unquoted scalar, or block-style collection.
    #[default]
    Plain,
    /// Single-quoted scalar.
    SingleQuoted,
    /// Double-quoted scalar.
    DoubleQuoted,
    /// Literal block scalar (`|`).
    Literal,
    /// Folded block scalar (`>`).
    Folded,
    /// Flow-style collection (`[a, b]` / `{a: b}`).
    Flow,
}

/// A single node in a YAML document tree.
///
/// A tree is a single connected ownership graph: every non-root node is
/// exclusively owned by its parent's `content` entry. Mapping children
/// alternate key-node, value-node; keys are scalar nodes whose `value` string
/// is all that path matching ever looks at. Duplicate keys are permitted and
/// never deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlNode {
    pub(crate) kind: NodeKind,
    pub(crate) value: String,
    pub(crate) content: Vec<YamlNode>,
    pub(crate) style: NodeStyle,
    pub(crate) head_comment: String,
    pub(crate) line_comment: String,
    pub(crate) foot_comment: String,
}

impl YamlNode {
    /// Creates an empty node of the given kind, with default metadata.
    pub fn empty(kind: NodeKind) -> Self {
        Self {
            kind,
            value: String::new(),
            content: Vec::new(),
            style: NodeStyle::default(),
            head_comment: String::new(),
            line_comment: String::new(),
            foot_comment: String::new(),
        }
    }

    /// Creates a scalar node holding `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlnav::document::node::{NodeKind, YamlNode};
    ///
    /// let node = YamlNode::scalar("42");
    /// assert_eq!(node.kind(), NodeKind::Scalar);
    /// assert_eq!(node.value(), "42");
    /// ```
    pub fn scalar(value: impl Into<String>) -> Self {
        let mut node = Self::empty(NodeKind::Scalar);
        node.value = value.into();
        node
    }

    /// Creates a sequence node from its elements.
    pub fn sequence(items: Vec<YamlNode>) -> Self {
        let mut node = Self::empty(NodeKind::Sequence);
        node.content = items;
        node
    }

    /// Creates a mapping node from key/value pairs.
    ///
    /// The pairs are flattened into the alternating `content` layout. Keys
    /// are stored as given; passing the same key twice produces a mapping
    /// with duplicate keys, which is legal.
    pub fn mapping(entries: Vec<(YamlNode, YamlNode)>) -> Self {
        let mut node = Self::empty(NodeKind::Mapping);
        node.content.reserve(entries.len() * 2);
        for (key, value) in entries {
            node.content.push(key);
            node.content.push(value);
        }
        node
    }

    /// Wraps a top-level value in a document node.
    pub fn document(child: YamlNode) -> Self {
        let mut node = Self::empty(NodeKind::Document);
        node.content.push(child);
        node
    }

    /// Returns the node's kind tag.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the scalar value string (empty for non-scalars).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the node's children.
    pub fn content(&self) -> &[YamlNode] {
        &self.content
    }

    /// Returns the node's formatting style.
    pub fn style(&self) -> NodeStyle {
        self.style
    }

    /// Sets the node's formatting style.
    pub fn set_style(&mut self, style: NodeStyle) {
        self.style = style;
    }

    /// Returns the comment block above the node.
    pub fn head_comment(&self) -> &str {
        &self.head_comment
    }

    /// Returns the comment on the same line as the node.
    pub fn line_comment(&self) -> &str {
        &self.line_comment
    }

    /// Returns the comment block below the node.
    pub fn foot_comment(&self) -> &str {
        &self.foot_comment
    }

    /// Sets the comment block above the node.
    pub fn set_head_comment(&mut self, comment: impl Into<String>) {
        self.head_comment = comment.into();
    }

    /// Sets the comment on the same line as the node.
    pub fn set_line_comment(&mut self, comment: impl Into<String>) {
        self.line_comment = comment.into();
    }

    /// Sets the comment block below the node.
    pub fn set_foot_comment(&mut self, comment: impl Into<String>) {
        self.foot_comment = comment.into();
    }

    /// Returns true if this node is a document wrapper.
    pub fn is_document(&self) -> bool {
        self.kind == NodeKind::Document
    }

    /// Unwraps a document node, returning its sole top-level value.
    ///
    /// Non-document nodes (and a degenerate document with no child) are
    /// returned as-is.
    pub fn as_value(&self) -> &YamlNode {
        if self.is_document() {
            self.content.first().unwrap_or(self)
        } else {
            self
        }
    }

    /// Mutable counterpart of [`as_value`](Self::as_value).
    pub fn as_value_mut(&mut self) -> &mut YamlNode {
        if self.is_document() && !self.content.is_empty() {
            &mut self.content[0]
        } else {
            self
        }
    }

    /// Iterates over a mapping's key/value pairs.
    ///
    /// Yields nothing for non-mapping nodes. A trailing key with no paired
    /// value (malformed content) is skipped.
    pub fn entries(&self) -> impl Iterator<Item = (&YamlNode, &YamlNode)> {
        let pairs: &[YamlNode] = if self.kind == NodeKind::Mapping {
            &self.content
        } else {
            &[]
        };
        pairs.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Replaces this node with a fresh empty node of `kind`, discarding all
    /// prior value, content, style, and comments.
    ///
    /// This is the coercion primitive: a path expression asserts a shape, and
    /// whatever was stored here is lost if it does not conform.
    pub fn replace_with_empty(&mut self, kind: NodeKind) {
        *self = Self::empty(kind);
    }

    /// Overwrites every field of this node with those of `other`, in place.
    ///
    /// Node identity is preserved: the parent still owns this slot, but the
    /// value, kind, content, style, and all three comments now mirror
    /// `other`. No partial merge.
    pub fn overwrite_from(&mut self, other: &YamlNode) {
        self.kind = other.kind;
        self.value = other.value.clone();
        self.content = other.content.clone();
        self.style = other.style;
        self.head_comment = other.head_comment.clone();
        self.line_comment = other.line_comment.clone();
        self.foot_comment = other.foot_comment.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_content_alternates() {
        let node = YamlNode::mapping(vec![
            (YamlNode::scalar("a"), YamlNode::scalar("1")),
            (YamlNode::scalar("b"), YamlNode::scalar("2")),
        ]);

        assert_eq!(node.content().len(), 4);
        assert_eq!(node.content()[0].value(), "a");
        assert_eq!(node.content()[1].value(), "1");
        assert_eq!(node.content()[2].value(), "b");
        assert_eq!(node.content()[3].value(), "2");
    }

    #[test]
    fn test_duplicate_keys_are_kept() {
        let node = YamlNode::mapping(vec![
            (YamlNode::scalar("x"), YamlNode::scalar("1")),
            (YamlNode::scalar("x"), YamlNode::scalar("2")),
        ]);

        let keys: Vec<&str> = node.entries().map(|(k, _)| k.value()).collect();
        assert_eq!(keys, vec!["x", "x"]);
    }

    #[test]
    fn test_document_unwrap() {
        let doc = YamlNode::document(YamlNode::scalar("top"));
        assert!(doc.is_document());
        assert_eq!(doc.as_value().value(), "top");

        let plain = YamlNode::scalar("top");
        assert!(std::ptr::eq(plain.as_value(), &plain));
    }

    #[test]
    fn test_replace_with_empty_discards_everything() {
        let mut node = YamlNode::mapping(vec![(YamlNode::scalar("a"), YamlNode::scalar("1"))]);
        node.set_head_comment("# header");
        node.set_style(NodeStyle::Flow);

        node.replace_with_empty(NodeKind::Sequence);

        assert_eq!(node.kind(), NodeKind::Sequence);
        assert!(node.content().is_empty());
        assert_eq!(node.head_comment(), "");
        assert_eq!(node.style(), NodeStyle::Plain);
    }

    #[test]
    fn test_overwrite_from_copies_all_fields() {
        let mut target = YamlNode::scalar("old");
        let mut replacement = YamlNode::sequence(vec![YamlNode::scalar("1")]);
        replacement.set_style(NodeStyle::Flow);
        replacement.set_head_comment("# above");
        replacement.set_line_comment("# beside");
        replacement.set_foot_comment("# below");

        target.overwrite_from(&replacement);

        assert_eq!(target, replacement);
    }

    #[test]
    fn test_entries_skips_non_mappings() {
        let node = YamlNode::sequence(vec![YamlNode::scalar("a"), YamlNode::scalar("b")]);
        assert_eq!(node.entries().count(), 0);
    }
}
