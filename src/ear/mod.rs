//! EAR module descriptor generation.
//!
//! Turns EAR module specification strings into configuration subtrees ready
//! to splice into a packaging plugin's `modules` section. A specification
//! `g:a:ejb:module.jar` becomes:
//!
//! ```text
//! <ejbModule>
//!   <groupId>g</groupId>
//!   <artifactId>a</artifactId>
//!   <uri>module.jar</uri>
//! </ejbModule>
//! ```
//!
//! Web modules additionally carry a `contextRoot` child when the
//! specification provides a fifth field; no default is synthesized when it
//! does not.

use crate::core::Result;
use crate::spec::EarModuleSpec;
use crate::tree::ConfigNode;
use tracing::debug;

/// Tag of the container holding generated module nodes.
pub const MODULES_TAG: &str = "modules";

/// Builds the configuration subtree for one EAR module specification.
///
/// The node is tagged `<type>Module` with ordered children `groupId`,
/// `artifactId`, `uri`, and - for web modules with a context root -
/// `contextRoot`.
///
/// # Errors
///
/// Returns [`crate::core::ProfiledepError::MalformedSpec`] for a
/// specification with fewer than 4 fields; no partial node is produced.
pub fn build_module(spec: &str) -> Result<ConfigNode> {
    let parsed = EarModuleSpec::parse(spec)?;
    debug!(spec, kind = %parsed.kind, "building EAR module descriptor");

    let mut node = ConfigNode::new(format!("{}Module", parsed.kind));
    node.add_child(ConfigNode::scalar("groupId", parsed.group_id));
    node.add_child(ConfigNode::scalar("artifactId", parsed.artifact_id));
    node.add_child(ConfigNode::scalar("uri", parsed.uri));
    if let Some(context_root) = parsed.context_root {
        node.add_child(ConfigNode::scalar("contextRoot", context_root));
    }

    Ok(node)
}

/// Builds the `modules` container from a sequence of specifications.
///
/// Modules appear in input order. The first malformed specification fails
/// the whole container.
///
/// # Errors
///
/// Propagates the [`crate::core::ProfiledepError::MalformedSpec`] of the
/// first bad specification.
pub fn build_modules<'a, I>(specs: I) -> Result<ConfigNode>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut container = ConfigNode::new(MODULES_TAG);
    for spec in specs {
        container.add_child(build_module(spec)?);
    }
    Ok(container)
}
