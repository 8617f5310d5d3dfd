//! yamlnav — structural YAML navigation.
//!
//! Addresses and mutates arbitrary locations inside a YAML document tree
//! using paths of pre-tokenized segments: literal keys, prefix wildcards
//! (`ab*`), numeric indices, splats (`*`), and the append marker (`+`).
//!
//! Three operations are exposed through [`navigator::Navigator`]:
//!
//! - `get` — resolve a path read-only and borrow the matching node(s)
//! - `update` — overwrite every matching node in place, creating missing
//!   structure along the way
//! - `delete` — remove every matching node from its container
//!
//! # Example
//!
//! ```
//! use yamlnav::document::node::YamlNode;
//! use yamlnav::document::parser::parse_document;
//! use yamlnav::navigator::{Matches, Navigator};
//!
//! let mut doc = parse_document("servers:\n  - host: a\n  - host: b\n").unwrap();
//! let nav = Navigator::new();
//!
//! // Overwrite every host via a splat.
//! nav.update(&mut doc, &["servers", "*", "host"], &YamlNode::scalar("localhost"))
//!     .unwrap();
//!
//! let hosts = nav.get(&doc, &["servers", "*", "host"]).unwrap();
//! assert_eq!(hosts.len(), 2);
//! assert!(hosts.iter().all(|h| h.value() == "localhost"));
//! ```

pub mod document;
pub mod navigator;

pub use document::node::{NodeKind, NodeStyle, YamlNode};
pub use navigator::{Matches, NavigationError, Navigator};
