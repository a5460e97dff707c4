//! Artifact resolution: the factory seam, inclusion filters, and the two
//! resolution paths.
//!
//! Resolution proper is a host concern - the core only parses specification
//! fields and hands them to a caller-supplied [`ArtifactFactory`]. What is
//! core is the *contract* around that seam: field order, the optional scope
//! passed as a separate parameter, and how failures propagate.
//!
//! # Strict vs. Tolerant
//!
//! Two named operations exist instead of one flag-driven function, so each
//! contract stays unambiguous and independently testable:
//!
//! - [`collect_artifacts`] - the set-building path. The first parse or
//!   resolve failure aborts the whole batch with
//!   [`ProfiledepError::ProfileArtifactResolution`]; no partial set is
//!   returned. Filter rejections are logged and skipped, not fatal.
//!   Survivors deduplicate by the [`ResolvedArtifact`] identity tuple.
//! - [`resolve_tolerant`] - the legacy direct path. A failing specification
//!   is logged and skipped; the remaining specifications proceed. Results
//!   keep encounter order and are not deduplicated.
//!
//! This asymmetry is an intentional part of the design, not an
//! inconsistency to unify.

use crate::core::{FactoryError, ProfiledepError, ResolvedArtifact, Result};
use crate::spec::ArtifactSpec;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Capability to turn specification fields into a resolved artifact.
///
/// Implemented by the host build environment. Identical invocations must
/// produce equal [`ResolvedArtifact`]s - set deduplication relies on it.
///
/// The scope is an explicit, separate parameter and the type stays the
/// fourth positional argument even when a scope is present; the scope is
/// never appended to the type field.
pub trait ArtifactFactory {
    /// Creates a resolved artifact from its coordinate fields.
    ///
    /// # Errors
    ///
    /// Returns a [`FactoryError`] when the host-side resolution machinery
    /// cannot produce an artifact for these coordinates.
    fn create_artifact(
        &self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
        kind: &str,
        scope: Option<&str>,
    ) -> std::result::Result<ResolvedArtifact, FactoryError>;
}

/// Inclusion filter applied to resolved artifacts before set insertion.
pub trait ArtifactFilter {
    /// Returns `true` if the artifact should be included.
    fn include(&self, artifact: &ResolvedArtifact) -> bool;
}

/// Standard filter policy: exclude artifacts whose scope is `provided`.
///
/// Provided-scoped artifacts are expected from the runtime environment and
/// must not be injected as packaged dependencies.
pub struct ProvidedScopeFilter;

impl ArtifactFilter for ProvidedScopeFilter {
    fn include(&self, artifact: &ResolvedArtifact) -> bool {
        artifact.scope() != Some("provided")
    }
}

/// Resolves one parsed specification through the factory.
///
/// # Errors
///
/// Wraps a factory failure into [`ProfiledepError::Resolution`] carrying the
/// specification's colon-joined rendering.
pub fn resolve_spec(
    factory: &dyn ArtifactFactory,
    spec: &ArtifactSpec,
) -> Result<ResolvedArtifact> {
    factory
        .create_artifact(
            &spec.group_id,
            &spec.artifact_id,
            &spec.version,
            &spec.kind,
            spec.scope.as_deref(),
        )
        .map_err(|source| ProfiledepError::Resolution {
            spec: spec.to_string(),
            source,
        })
}

/// Builds the deduplicated artifact set from specification strings (strict).
///
/// Each string is parsed and resolved; the first failure aborts the batch.
/// Resolved artifacts the filter rejects are logged and excluded without
/// aborting. Duplicate identities across profiles or properties collapse to
/// one entry silently.
///
/// # Errors
///
/// Returns [`ProfiledepError::ProfileArtifactResolution`] wrapping the parse
/// or resolve failure of the first bad specification; no partial set is
/// returned.
pub fn collect_artifacts<'a, I>(
    factory: &dyn ArtifactFactory,
    specs: I,
    filter: &dyn ArtifactFilter,
) -> Result<HashSet<ResolvedArtifact>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut artifacts = HashSet::new();

    for raw in specs {
        let artifact = ArtifactSpec::parse(raw)
            .and_then(|spec| resolve_spec(factory, &spec))
            .map_err(|source| ProfiledepError::ProfileArtifactResolution {
                spec: raw.to_string(),
                source: Box::new(source),
            })?;

        if !filter.include(&artifact) {
            warn!(artifact = %artifact, "excluding profile artifact");
            continue;
        }

        artifacts.insert(artifact);
    }

    Ok(artifacts)
}

/// Resolves specification strings, skipping the ones that fail (tolerant).
///
/// The legacy direct path: a parse or resolve failure is logged and the
/// offending specification skipped, allowing the remaining specifications to
/// proceed. Results keep encounter order; no filter or deduplication is
/// applied - the caller decides.
pub fn resolve_tolerant<'a, I>(factory: &dyn ArtifactFactory, specs: I) -> Vec<ResolvedArtifact>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut artifacts = Vec::new();

    for raw in specs {
        match ArtifactSpec::parse(raw).and_then(|spec| resolve_spec(factory, &spec)) {
            Ok(artifact) => {
                debug!(artifact = %artifact, "resolved profile artifact");
                artifacts.push(artifact);
            }
            Err(error) => {
                warn!(spec = raw, %error, "fails to define artifact, skipping");
            }
        }
    }

    artifacts
}
