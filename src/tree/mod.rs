//! Ordered configuration tree and the pure merge routine.
//!
//! Packaging plugins carry their configuration as a nested tree of named
//! nodes with scalar leaf values. [`ConfigNode`] models that tree: children
//! are an ordered list, may repeat the same tag (module lists do), and order
//! matters. Hosts exchange these trees as structured data, hence the serde
//! derives.
//!
//! # Merge Semantics
//!
//! [`merge`] splices a freshly generated container into a possibly-absent
//! existing configuration and must never clobber unrelated sibling data:
//!
//! - an absent configuration becomes a fresh `configuration` root holding
//!   the generated container
//! - when the configuration already has a child with the generated
//!   container's tag, every generated child is appended, in order, to the
//!   end of that child's children; existing children are never reordered,
//!   replaced, or removed
//! - a generated *scalar* (e.g. a `classifier` override) replaces the value
//!   of a matching existing scalar, the deep-overlay rule; containers always
//!   follow the append rule
//!
//! The merge is a pure function. Call sites that need the same splice in
//! several configuration instances - the packaging plugin's primary
//! configuration plus each execution configuration - apply it independently
//! to each instance; no tree is shared between them.

use serde::{Deserialize, Serialize};

/// Tag of the root node wrapping plugin configuration content.
pub const CONFIGURATION_TAG: &str = "configuration";

/// A node in a packaging configuration tree.
///
/// Carries a tag name, an optional scalar value, and an ordered list of
/// children. Children may repeat tag names; lookup by tag returns the first
/// match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigNode {
    /// Tag name
    pub name: String,
    /// Scalar value, for leaf nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Ordered children; tags may repeat
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ConfigNode>,
}

impl ConfigNode {
    /// Creates an empty container node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            children: Vec::new(),
        }
    }

    /// Creates a scalar leaf node.
    pub fn scalar(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    /// Returns the first child with the given tag, if any.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&ConfigNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Returns the first child with the given tag, mutably.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut ConfigNode> {
        self.children.iter_mut().find(|child| child.name == name)
    }

    /// Appends a child to the end of the ordered children list.
    pub fn add_child(&mut self, child: ConfigNode) {
        self.children.push(child);
    }

    /// True when the node is a scalar leaf: it has a value and no children.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.value.is_some() && self.children.is_empty()
    }
}

/// Merges a generated container into a possibly-absent configuration.
///
/// `generated` is a synthetic container (e.g. tagged `modules`) or a scalar
/// override (e.g. `classifier`), produced once per processing pass. The
/// returned tree is rooted at `configuration`; the same contract applies
/// uniformly to every call site.
#[must_use]
pub fn merge(existing: Option<ConfigNode>, generated: &ConfigNode) -> ConfigNode {
    let mut root = match existing {
        Some(root) => root,
        None => ConfigNode::new(CONFIGURATION_TAG),
    };

    match root.child_mut(&generated.name) {
        None => root.add_child(generated.clone()),
        Some(target) => {
            if generated.is_scalar() {
                // Deep overlay: scalar override replaces the value in place.
                target.value.clone_from(&generated.value);
            } else {
                for child in &generated.children {
                    overlay_child(target, child);
                }
            }
        }
    }

    root
}

/// Applies one generated child to a matched existing container.
///
/// Scalars overlay a same-tag scalar's value; everything else appends,
/// preserving existing children untouched.
fn overlay_child(target: &mut ConfigNode, generated: &ConfigNode) {
    if generated.is_scalar() {
        if let Some(existing) = target.child_mut(&generated.name) {
            if existing.is_scalar() {
                existing.value.clone_from(&generated.value);
                return;
            }
        }
    }
    target.add_child(generated.clone());
}
