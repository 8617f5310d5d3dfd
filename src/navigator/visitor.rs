//! The traversal engine.
//!
//! Everything the public operations do is built on two walks over the same
//! matching rules:
//!
//! - [`lookup`] resolves a path read-only, collecting borrowed references to
//!   every matched node in document order. It never changes the tree.
//! - [`visit_mut`] is the write-side recursion: it invokes a callback on
//!   every matched node and, when `allow_create` is set, materializes missing
//!   mapping entries and appended elements and coerces nodes whose kind
//!   disagrees with the remaining path.
//!
//! A single call can fan out to zero, one, or many matches through splats,
//! prefix wildcards, and duplicate mapping keys. The first callback error
//! aborts the remaining visits and is returned unchanged; mutations already
//! applied stay in place.

use tracing::debug;

use super::error::NavigationError;
use super::kind::{coerce, infer_kind};
use super::matcher::{self, key_matches, parse_index, sequence_slot};
use crate::document::node::{NodeKind, YamlNode};

/// Resolves `path` against `root` without mutating anything.
///
/// Returns the matched nodes in document order. The only error is a segment
/// that addresses a sequence position but is not a valid integer.
pub fn lookup<'a>(
    root: &'a YamlNode,
    path: &[&str],
) -> Result<Vec<&'a YamlNode>, NavigationError> {
    let mut frontier = vec![root.as_value()];
    for &head in path {
        debug!(segment = head, frontier = frontier.len(), "expanding segment");
        let mut next = Vec::new();
        for node in frontier {
            expand(node, head, &mut next)?;
        }
        frontier = next;
    }
    Ok(frontier)
}

fn expand<'a>(
    node: &'a YamlNode,
    head: &str,
    out: &mut Vec<&'a YamlNode>,
) -> Result<(), NavigationError> {
    match node.kind() {
        NodeKind::Mapping => {
            for (key, value) in node.entries() {
                if head == matcher::SPLAT || key_matches(head, key.value()) {
                    out.push(value.as_value());
                }
            }
        }
        NodeKind::Sequence => {
            if head == matcher::SPLAT {
                out.extend(node.content().iter().map(YamlNode::as_value));
            } else if head == matcher::APPEND {
                // Appending is a write-side operation; on read it matches
                // nothing.
            } else {
                let index = parse_index(head)?;
                if let Some(slot) = sequence_slot(index, node.content().len()) {
                    out.push(node.content()[slot].as_value());
                }
            }
        }
        // A path cannot descend through a leaf.
        _ => {}
    }
    Ok(())
}

/// Walks `path` from `node`, invoking `visitor` on every matched node.
///
/// With `allow_create`, missing mapping entries are inserted, `+` appends a
/// fresh sequence element, and nodes are coerced to the kind the remaining
/// path requires before descending. Without it, the walk only follows
/// structure that already exists and leaves the tree untouched apart from
/// whatever `visitor` itself does.
pub fn visit_mut<F>(
    node: &mut YamlNode,
    path: &[&str],
    allow_create: bool,
    visitor: &mut F,
) -> Result<(), NavigationError>
where
    F: FnMut(&mut YamlNode) -> Result<(), NavigationError>,
{
    let node = node.as_value_mut();
    match path.split_first() {
        Some((&head, tail)) => {
            debug!(segment = head, "diving into segment");
            recurse(node, head, tail, allow_create, visitor)
        }
        None => visitor(node),
    }
}

fn recurse<F>(
    node: &mut YamlNode,
    head: &str,
    tail: &[&str],
    allow_create: bool,
    visitor: &mut F,
) -> Result<(), NavigationError>
where
    F: FnMut(&mut YamlNode) -> Result<(), NavigationError>,
{
    match node.kind() {
        NodeKind::Mapping => {
            if head == matcher::SPLAT {
                splat_mapping(node, tail, allow_create, visitor)
            } else {
                recurse_mapping(node, head, tail, allow_create, visitor)
            }
        }
        NodeKind::Sequence => {
            if head == matcher::SPLAT {
                splat_sequence(node, tail, allow_create, visitor)
            } else if head == matcher::APPEND {
                append_sequence(node, tail, allow_create, visitor)
            } else {
                recurse_sequence(node, head, tail, allow_create, visitor)
            }
        }
        // A path cannot descend through a leaf.
        _ => Ok(()),
    }
}

/// Visits every value entry of a mapping. Values sit at odd positions.
fn splat_mapping<F>(
    node: &mut YamlNode,
    tail: &[&str],
    allow_create: bool,
    visitor: &mut F,
) -> Result<(), NavigationError>
where
    F: FnMut(&mut YamlNode) -> Result<(), NavigationError>,
{
    let mut index = 1;
    while index < node.content.len() {
        if allow_create {
            let required = infer_kind(tail, Some(node.content[index].kind()));
            coerce(&mut node.content[index], required);
        }
        visit_mut(&mut node.content[index], tail, allow_create, visitor)?;
        index += 2;
    }
    Ok(())
}

fn recurse_mapping<F>(
    node: &mut YamlNode,
    head: &str,
    tail: &[&str],
    allow_create: bool,
    visitor: &mut F,
) -> Result<(), NavigationError>
where
    F: FnMut(&mut YamlNode) -> Result<(), NavigationError>,
{
    let mut visited = false;
    let mut index = 0;
    // Keys sit at even positions; each match visits the paired value.
    while index + 1 < node.content.len() {
        if key_matches(head, node.content[index].value()) {
            debug!(key = node.content[index].value(), "matched mapping key");
            if allow_create {
                let required = infer_kind(tail, Some(node.content[index + 1].kind()));
                coerce(&mut node.content[index + 1], required);
            }
            visit_mut(&mut node.content[index + 1], tail, allow_create, visitor)?;
            visited = true;
        }
        index += 2;
    }
    if visited || !allow_create {
        return Ok(());
    }

    // Nothing matched: insert the entry the path asks for and keep going.
    debug!(key = head, "no matching key, inserting entry");
    node.content.push(YamlNode::scalar(head));
    node.content.push(YamlNode::empty(infer_kind(tail, None)));
    let last = node.content.len() - 1;
    visit_mut(&mut node.content[last], tail, allow_create, visitor)
}

fn splat_sequence<F>(
    node: &mut YamlNode,
    tail: &[&str],
    allow_create: bool,
    visitor: &mut F,
) -> Result<(), NavigationError>
where
    F: FnMut(&mut YamlNode) -> Result<(), NavigationError>,
{
    for index in 0..node.content.len() {
        if allow_create {
            let required = infer_kind(tail, Some(node.content[index].kind()));
            coerce(&mut node.content[index], required);
        }
        visit_mut(&mut node.content[index], tail, allow_create, visitor)?;
    }
    Ok(())
}

fn append_sequence<F>(
    node: &mut YamlNode,
    tail: &[&str],
    allow_create: bool,
    visitor: &mut F,
) -> Result<(), NavigationError>
where
    F: FnMut(&mut YamlNode) -> Result<(), NavigationError>,
{
    if !allow_create {
        return Ok(());
    }
    debug!(len = node.content.len(), "appending element to sequence");
    node.content.push(YamlNode::empty(infer_kind(tail, None)));
    let last = node.content.len() - 1;
    visit_mut(&mut node.content[last], tail, allow_create, visitor)
}

fn recurse_sequence<F>(
    node: &mut YamlNode,
    head: &str,
    tail: &[&str],
    allow_create: bool,
    visitor: &mut F,
) -> Result<(), NavigationError>
where
    F: FnMut(&mut YamlNode) -> Result<(), NavigationError>,
{
    let index = parse_index(head)?;
    let Some(slot) = sequence_slot(index, node.content.len()) else {
        debug!(index, len = node.content.len(), "index out of range");
        return Ok(());
    };
    if allow_create {
        let required = infer_kind(tail, Some(node.content[slot].kind()));
        coerce(&mut node.content[slot], required);
    }
    visit_mut(&mut node.content[slot], tail, allow_create, visitor)
}
