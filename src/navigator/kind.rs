//! Shape inference for path traversal.
//!
//! While descending a path, each node must have the kind the remaining
//! segments can traverse: a numeric next segment needs a sequence, a key
//! needs a mapping, an exhausted path needs a leaf. `infer_kind` makes that
//! decision and `coerce` enforces it, destructively, on the write side.

use tracing::debug;

use super::matcher;
use crate::document::node::{NodeKind, YamlNode};

/// Decides what kind a node being descended into must have, given the
/// remaining path `tail` and the node's existing kind (if any).
pub fn infer_kind(tail: &[&str], hint: Option<NodeKind>) -> NodeKind {
    let Some(&next) = tail.first() else {
        // The path terminates here: a leaf, unless something already exists.
        return hint.unwrap_or(NodeKind::Scalar);
    };
    if next == matcher::APPEND || next.parse::<i64>().is_ok() {
        return NodeKind::Sequence;
    }
    if next == matcher::SPLAT {
        if let Some(hinted @ (NodeKind::Sequence | NodeKind::Mapping)) = hint {
            return hinted;
        }
    }
    NodeKind::Mapping
}

/// Forces `node` to the required kind.
///
/// A node whose kind already conforms is untouched. Otherwise it is replaced
/// with a fresh empty node of the required kind and all prior content, value,
/// and metadata are lost.
pub fn coerce(node: &mut YamlNode, required: NodeKind) {
    if node.kind() != required {
        debug!(actual = ?node.kind(), ?required, "replacing node to satisfy path shape");
        node.replace_with_empty(required);
    }
}
