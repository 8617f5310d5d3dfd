//! Rendering the document tree back to YAML text.
//!
//! The inverse of the parser: nodes are converted to yaml-rust2 values and
//! emitted. Scalar strings are re-typed through `Yaml::from_str` so that
//! `42`, `true`, and `null` come out as the values they look like rather
//! than quoted strings. Comments and styles are not emitted; yaml-rust2's
//! emitter has no representation for them.

use anyhow::{Context, Result};
use yaml_rust2::yaml::Hash;
use yaml_rust2::{Yaml, YamlEmitter};

use super::node::{NodeKind, YamlNode};

/// Renders a tree (document-wrapped or bare) as YAML text.
///
/// The emitter's leading `---` document marker is stripped; the result ends
/// without a trailing newline.
pub fn render_document(node: &YamlNode) -> Result<String> {
    let yaml = to_yaml(node.as_value());
    let mut out = String::new();
    YamlEmitter::new(&mut out)
        .dump(&yaml)
        .context("failed to emit YAML")?;
    let body = out.strip_prefix("---").unwrap_or(&out).trim_start();
    Ok(body.to_string())
}

fn to_yaml(node: &YamlNode) -> Yaml {
    match node.kind() {
        NodeKind::Scalar => Yaml::from_str(node.value()),
        NodeKind::Sequence => Yaml::Array(node.content().iter().map(to_yaml).collect()),
        NodeKind::Mapping => {
            // Duplicate keys collapse here: the emitter's map keeps the last
            // value seen for a key.
            let mut hash = Hash::new();
            for (key, value) in node.entries() {
                hash.insert(Yaml::from_str(key.value()), to_yaml(value));
            }
            Yaml::Hash(hash)
        }
        NodeKind::Document => node
            .content()
            .first()
            .map(to_yaml)
            .unwrap_or(Yaml::Null),
    }
}
