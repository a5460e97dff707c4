//! Build-lifecycle orchestration over a caller-owned project model.
//!
//! The host build tool owns the session, the project, and the plugin
//! machinery. This module models just enough of them - as plain,
//! serde-deserializable data - to express the three augmentation operations
//! the lifecycle invokes:
//!
//! - [`attach_profile_artifacts`] - the participant path: resolve the
//!   packaging classifier, splice it into the packaging plugin's primary and
//!   execution configurations, then strict-collect profile artifacts and
//!   append them to the project's dependencies
//! - [`inject_profile_artifacts`] - the legacy direct path: tolerant
//!   per-specification resolution, log-and-skip on failure
//! - [`attach_ear_modules`] - build the `modules` container from profile
//!   properties and merge it into the packaging configurations
//!
//! Configuration trees are never shared: the same pure
//! [`merge`](crate::tree::merge) is applied independently to the primary
//! configuration and to each execution configuration.

use crate::core::{ProfiledepError, ResolvedArtifact, Result};
use crate::ear;
use crate::profile::{self, Profile};
use crate::resolver::{self, ArtifactFactory, ProvidedScopeFilter};
use crate::tree::{self, ConfigNode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Project property naming the prefix under which profile dependencies live.
pub const PREFIX_PROPERTY: &str = "profiledep.prefix";

/// Property naming the packaging classifier for profile builds.
///
/// Looked up, in order, in the plugin configuration, the session user
/// properties, and the active profiles.
pub const CLASSIFIER_PROPERTY: &str = "profilebuild.classifier";

/// The project as seen by the augmentation operations.
///
/// A snapshot owned by the caller; each run operates on fresh data and
/// mutates only `plugins` (configuration splicing) and `dependencies`
/// (artifact injection).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Packaging type, e.g. `ear` or `war`; selects the packaging plugin
    pub packaging: String,
    /// Project-level properties
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    /// Active profiles, in activation order
    #[serde(default)]
    pub profiles: Vec<Profile>,
    /// Declared build plugins
    #[serde(default)]
    pub plugins: Vec<PackagingPlugin>,
    /// Project dependencies; augmented in place
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

/// A build plugin declaration with its configuration trees.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingPlugin {
    /// Plugin artifact id, e.g. `maven-ear-plugin`
    pub artifact_id: String,
    /// Primary configuration, absent when the declaration has none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ConfigNode>,
    /// Declared executions, each with its own configuration
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub executions: Vec<PluginExecution>,
}

/// One plugin execution and its execution-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginExecution {
    /// Execution identifier
    pub id: String,
    /// Execution-specific configuration, absent when not declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ConfigNode>,
}

/// Session-scoped state supplied by the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// User-supplied properties for this invocation
    #[serde(default)]
    pub user_properties: BTreeMap<String, String>,
}

/// A dependency descriptor ready for injection into the project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    /// Group identifier
    pub group_id: String,
    /// Artifact identifier
    pub artifact_id: String,
    /// Version string
    pub version: String,
    /// Variant discriminator, when the resolved artifact carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    /// Artifact type
    #[serde(rename = "type")]
    pub kind: String,
    /// Dependency scope
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl Dependency {
    /// Converts a resolved artifact into an injectable dependency.
    #[must_use]
    pub fn from_artifact(artifact: &ResolvedArtifact) -> Self {
        Self {
            group_id: artifact.group_id().to_string(),
            artifact_id: artifact.artifact_id().to_string(),
            version: artifact.version().to_string(),
            classifier: artifact.classifier().map(str::to_string),
            kind: artifact.kind().to_string(),
            scope: artifact.scope().map(str::to_string),
        }
    }
}

/// Attaches profile artifacts as project dependencies (participant path).
///
/// Reads the dependency prefix from the [`PREFIX_PROPERTY`] project
/// property, resolves the packaging classifier, splices it into the
/// packaging plugin's primary and execution configurations, then
/// strict-collects every artifact specification found under the prefix and
/// appends the surviving artifacts to the project's dependencies (artifacts
/// with scope `provided` are excluded, with a warning).
///
/// # Errors
///
/// - [`ProfiledepError::MissingPrefix`] when the prefix property is absent
///   or blank
/// - [`ProfiledepError::UnsupportedPackaging`] when no plugin matches the
///   packaging type
/// - [`ProfiledepError::MissingConfig`] when the packaging plugin declares
///   no primary configuration
/// - [`ProfiledepError::MissingClassifier`] when no classifier is available
/// - [`ProfiledepError::ProfileArtifactResolution`] when any specification
///   fails to parse or resolve; the batch aborts and no dependency is added
pub fn attach_profile_artifacts(
    project: &mut Project,
    session: &Session,
    factory: &dyn ArtifactFactory,
) -> Result<()> {
    info!("attaching profile artifacts");

    let prefix = project
        .properties
        .get(PREFIX_PROPERTY)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ProfiledepError::MissingPrefix)?;
    debug!(%prefix, "profile dependency prefix");

    let plugin_index = packaging_plugin_index(project)?;
    if project.plugins[plugin_index].configuration.is_none() {
        return Err(ProfiledepError::MissingConfig {
            plugin: project.plugins[plugin_index].artifact_id.clone(),
        });
    }

    let classifier = resolve_classifier(
        &project.plugins[plugin_index],
        session,
        &project.profiles,
    )?;
    debug!(%classifier, "packaging classifier");

    // Resolve the whole batch before mutating any configuration.
    let specs = profile::spec_strings(&project.profiles, &prefix);
    let artifacts = resolver::collect_artifacts(
        factory,
        specs.iter().map(String::as_str),
        &ProvidedScopeFilter,
    )?;
    debug!(count = artifacts.len(), "resolved profile artifacts");

    let generated = ConfigNode::scalar("classifier", classifier);
    apply_to_configurations(&mut project.plugins[plugin_index], &generated);

    project
        .dependencies
        .extend(artifacts.iter().map(Dependency::from_artifact));

    Ok(())
}

/// Resolves profile artifacts without injecting them (legacy direct path).
///
/// Scans the active profiles under the caller-supplied prefix and resolves
/// each specification tolerantly: failures are logged and skipped, the
/// remaining specifications proceed. Returns the resolved artifacts in
/// encounter order; the caller performs any injection.
///
/// # Errors
///
/// Returns [`ProfiledepError::MissingPrefix`] when `prefix` is blank. An
/// empty active-profile set is not an error and yields an empty result.
pub fn inject_profile_artifacts(
    project: &Project,
    prefix: &str,
    factory: &dyn ArtifactFactory,
) -> Result<Vec<ResolvedArtifact>> {
    info!("attaching profile artifacts");

    if prefix.trim().is_empty() {
        return Err(ProfiledepError::MissingPrefix);
    }
    if project.profiles.is_empty() {
        warn!("no active profiles");
        return Ok(Vec::new());
    }

    let specs = profile::spec_strings(&project.profiles, prefix);
    Ok(resolver::resolve_tolerant(
        factory,
        specs.iter().map(String::as_str),
    ))
}

/// Builds EAR module descriptors from profile properties and splices them
/// into the packaging configurations.
///
/// Every specification found under `prefix` becomes a module node, in
/// emission order, inside a generated `modules` container. The container is
/// merged into the packaging plugin's primary configuration and into each
/// execution configuration independently; existing modules and unrelated
/// siblings are preserved, new modules are appended at the end.
///
/// # Errors
///
/// - [`ProfiledepError::MissingPrefix`] when `prefix` is blank
/// - [`ProfiledepError::UnsupportedPackaging`] when no plugin matches the
///   packaging type
/// - [`ProfiledepError::MalformedSpec`] when any module specification is
///   invalid; nothing is merged in that case
pub fn attach_ear_modules(project: &mut Project, prefix: &str) -> Result<()> {
    if prefix.trim().is_empty() {
        return Err(ProfiledepError::MissingPrefix);
    }

    let specs = profile::spec_strings(&project.profiles, prefix);
    if specs.is_empty() {
        debug!(prefix, "no EAR module specifications under prefix");
        return Ok(());
    }

    let generated = ear::build_modules(specs.iter().map(String::as_str))?;
    let plugin_index = packaging_plugin_index(project)?;
    apply_to_configurations(&mut project.plugins[plugin_index], &generated);

    Ok(())
}

/// Locates the packaging plugin by the `maven-<packaging>-plugin` convention.
fn packaging_plugin_index(project: &Project) -> Result<usize> {
    let plugin_id = format!("maven-{}-plugin", project.packaging);
    debug!(%plugin_id, "looking up packaging plugin");

    project
        .plugins
        .iter()
        .position(|plugin| plugin.artifact_id == plugin_id)
        .ok_or_else(|| ProfiledepError::UnsupportedPackaging {
            packaging: project.packaging.clone(),
        })
}

/// Resolves the packaging classifier.
///
/// Precedence: plugin configuration `classifier` child, then session user
/// property, then the first profile property (with a warning when several
/// profiles define one).
fn resolve_classifier(
    plugin: &PackagingPlugin,
    session: &Session,
    profiles: &[Profile],
) -> Result<String> {
    if let Some(value) = plugin
        .configuration
        .as_ref()
        .and_then(|config| config.child("classifier"))
        .and_then(|node| node.value.clone())
    {
        return Ok(value);
    }

    if let Some(value) = session.user_properties.get(CLASSIFIER_PROPERTY) {
        return Ok(value.clone());
    }

    let profile_values = profile::profile_property(profiles, CLASSIFIER_PROPERTY);
    if profile_values.len() > 1 {
        warn!(
            property = CLASSIFIER_PROPERTY,
            "multiple active profiles define the classifier property"
        );
    }
    profile_values
        .into_iter()
        .next()
        .ok_or(ProfiledepError::MissingClassifier)
}

/// Merges `generated` into the plugin's primary configuration and into each
/// execution configuration, independently.
fn apply_to_configurations(plugin: &mut PackagingPlugin, generated: &ConfigNode) {
    plugin.configuration = Some(tree::merge(plugin.configuration.take(), generated));
    for execution in &mut plugin.executions {
        execution.configuration = Some(tree::merge(execution.configuration.take(), generated));
    }
}
