//! YAML parsing into the document tree.
//!
//! This module converts text into the internal node representation using
//! yaml-rust2. Only the first document of a multi-document stream is taken;
//! the result is always wrapped in a document node. yaml-rust2 does not
//! surface comments or scalar styles, so parsed nodes carry default metadata;
//! both are preserved once set programmatically or through an update.
//!
//! # Example
//!
//! ```
//! use yamlnav::document::parser::parse_document;
//!
//! let doc = parse_document("name: yamlnav\n").unwrap();
//! assert!(doc.is_document());
//! ```

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use yaml_rust2::{Yaml, YamlLoader};

use super::node::YamlNode;

/// Parses a YAML string into a document-wrapped tree.
///
/// An empty input parses as a document holding a null scalar.
pub fn parse_document(source: &str) -> Result<YamlNode> {
    let docs = YamlLoader::load_from_str(source).context("failed to parse YAML")?;
    let top = docs.into_iter().next().unwrap_or(Yaml::Null);
    Ok(YamlNode::document(from_yaml(&top)?))
}

/// Loads and parses a YAML file from the filesystem.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are not
/// valid YAML.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<YamlNode> {
    let source = fs::read_to_string(path.as_ref())
        .with_context(|| format!("failed to read {}", path.as_ref().display()))?;
    parse_document(&source)
}

fn from_yaml(yaml: &Yaml) -> Result<YamlNode> {
    Ok(match yaml {
        Yaml::Hash(entries) => {
            let mut pairs = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                pairs.push((YamlNode::scalar(key_string(key)?), from_yaml(value)?));
            }
            YamlNode::mapping(pairs)
        }
        Yaml::Array(items) => {
            let children = items.iter().map(from_yaml).collect::<Result<Vec<_>>>()?;
            YamlNode::sequence(children)
        }
        Yaml::String(s) => YamlNode::scalar(s.clone()),
        // Reals keep their original spelling; integers and booleans render
        // canonically.
        Yaml::Real(raw) => YamlNode::scalar(raw.clone()),
        Yaml::Integer(n) => YamlNode::scalar(n.to_string()),
        Yaml::Boolean(b) => YamlNode::scalar(b.to_string()),
        Yaml::Null => YamlNode::scalar("null"),
        Yaml::Alias(_) => bail!("YAML aliases are not supported"),
        Yaml::BadValue => bail!("malformed YAML value"),
    })
}

fn key_string(yaml: &Yaml) -> Result<String> {
    Ok(match yaml {
        Yaml::String(s) => s.clone(),
        Yaml::Real(raw) => raw.clone(),
        Yaml::Integer(n) => n.to_string(),
        Yaml::Boolean(b) => b.to_string(),
        Yaml::Null => "null".to_string(),
        _ => bail!("mapping keys must be scalars"),
    })
}
