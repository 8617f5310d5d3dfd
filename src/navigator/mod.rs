//! Path-based navigation over YAML document trees.
//!
//! A path is an ordered list of already-tokenized segments; each segment is
//! one of:
//!
//! - a literal mapping key (`name`)
//! - a prefix wildcard (`ab*`) matching every key starting with `ab`
//! - a 0-based sequence index (`2`)
//! - `*` — every child at this level
//! - `+` — append a new trailing element to a sequence (write side only)
//!
//! [`Navigator`] exposes the three operations built on those paths: `get`
//! reads matching nodes, `update` overwrites them, `delete` removes them from
//! their containers. A path can fan out to many nodes (splats, wildcards,
//! duplicate keys); all are handled in document order.
//!
//! # Examples
//!
//! ```
//! use yamlnav::document::parser::parse_document;
//! use yamlnav::navigator::{Matches, Navigator};
//!
//! let mut doc = parse_document("a:\n  b: 1\n").unwrap();
//! let nav = Navigator::new();
//!
//! nav.update(&mut doc, &["a", "c"], &yamlnav::document::node::YamlNode::scalar("5"))
//!     .unwrap();
//!
//! match nav.get(&doc, &["a", "c"]).unwrap() {
//!     Matches::One(node) => assert_eq!(node.value(), "5"),
//!     other => panic!("expected one match, got {:?}", other),
//! }
//! ```

pub mod error;
pub mod kind;
pub mod matcher;
pub mod visitor;

pub use error::NavigationError;

use tracing::debug;

use crate::document::node::{NodeKind, YamlNode};
use visitor::{lookup, visit_mut};

/// The nodes a path resolved to, borrowed from the tree.
///
/// This is a read-only view: the matched nodes stay owned by their parents in
/// the source tree, and the view cannot be inserted back into a document.
#[derive(Debug, PartialEq)]
pub enum Matches<'a> {
    /// The path resolved to nothing.
    None,
    /// Exactly one node matched.
    One(&'a YamlNode),
    /// Several nodes matched, in document order.
    Many(Vec<&'a YamlNode>),
}

impl<'a> Matches<'a> {
    fn from_nodes(nodes: Vec<&'a YamlNode>) -> Self {
        match nodes.len() {
            0 => Matches::None,
            1 => Matches::One(nodes[0]),
            _ => Matches::Many(nodes),
        }
    }

    /// Returns true if the path resolved to nothing.
    pub fn is_none(&self) -> bool {
        matches!(self, Matches::None)
    }

    /// Number of matched nodes.
    pub fn len(&self) -> usize {
        match self {
            Matches::None => 0,
            Matches::One(_) => 1,
            Matches::Many(nodes) => nodes.len(),
        }
    }

    /// Returns true if there are no matched nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first matched node, if any.
    pub fn first(&self) -> Option<&'a YamlNode> {
        match self {
            Matches::None => None,
            Matches::One(node) => Some(node),
            Matches::Many(nodes) => nodes.first().copied(),
        }
    }

    /// Iterates over the matched nodes in document order.
    pub fn iter(&self) -> impl Iterator<Item = &'a YamlNode> + '_ {
        let nodes: &[&'a YamlNode] = match self {
            Matches::None => &[],
            Matches::One(node) => std::slice::from_ref(node),
            Matches::Many(nodes) => nodes,
        };
        nodes.iter().copied()
    }
}

/// Read, overwrite, and delete nodes addressed by path segments.
#[derive(Debug, Default)]
pub struct Navigator;

impl Navigator {
    /// Creates a navigator.
    pub fn new() -> Self {
        Self
    }

    /// Resolves `path` and returns the matching nodes.
    ///
    /// The returned references point into the live tree. Reading never
    /// mutates: a path through structure that does not exist resolves to
    /// [`Matches::None`] and the document is left exactly as it was.
    pub fn get<'a>(
        &self,
        root: &'a YamlNode,
        path: &[&str],
    ) -> Result<Matches<'a>, NavigationError> {
        let nodes = lookup(root, path)?;
        debug!(matches = nodes.len(), "lookup finished");
        Ok(Matches::from_nodes(nodes))
    }

    /// Overwrites every node matched by `path` with `replacement`.
    ///
    /// Missing mapping entries along the path are created, `+` appends to
    /// sequences, and kind-mismatched nodes are coerced to the shape the
    /// path requires; see the module docs for the matching rules. Each
    /// matched node is overwritten in place (value, kind, content, style,
    /// and all three comments), preserving its identity in the tree.
    pub fn update(
        &self,
        root: &mut YamlNode,
        path: &[&str],
        replacement: &YamlNode,
    ) -> Result<(), NavigationError> {
        visit_mut(root, path, true, &mut |node: &mut YamlNode| {
            debug!("overwriting matched node");
            node.overwrite_from(replacement);
            Ok(())
        })
    }

    /// Removes every node matched by `path` from its container.
    ///
    /// The final segment names the target inside each container the rest of
    /// the path resolves to: an index for sequences (out of range is a
    /// no-op), a literal or prefix-wildcard key for mappings (every matching
    /// pair is removed). Containers of any other kind are left alone.
    pub fn delete(&self, root: &mut YamlNode, path: &[&str]) -> Result<(), NavigationError> {
        let Some((&target, container_path)) = path.split_last() else {
            return Err(NavigationError::EmptyDeletePath);
        };
        debug!(target, "deleting from matching containers");
        visit_mut(root, container_path, true, &mut |container: &mut YamlNode| {
            remove_from_container(container, target)
        })
    }
}

fn remove_from_container(
    container: &mut YamlNode,
    target: &str,
) -> Result<(), NavigationError> {
    match container.kind() {
        NodeKind::Sequence => {
            let index = matcher::parse_index(target)?;
            match matcher::sequence_slot(index, container.content.len()) {
                Some(slot) => {
                    debug!(index, "removing sequence element");
                    container.content.remove(slot);
                }
                None => {
                    debug!(index, len = container.content.len(), "index out of range");
                }
            }
            Ok(())
        }
        NodeKind::Mapping => {
            // Collect matching key positions against the unmodified content,
            // then remove pairs back to front so earlier removals cannot
            // shift the positions still to be applied.
            let matched: Vec<usize> = (0..container.content.len())
                .step_by(2)
                .filter(|&key_index| {
                    key_index + 1 < container.content.len()
                        && matcher::key_matches(target, container.content[key_index].value())
                })
                .collect();
            for &key_index in matched.iter().rev() {
                debug!(key = container.content[key_index].value(), "removing mapping entry");
                container.content.drain(key_index..key_index + 2);
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
