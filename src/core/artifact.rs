//! Resolved artifact descriptor and its identity tuple.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A concrete artifact handle produced by an external factory.
///
/// Identified by the tuple
/// `(group_id, artifact_id, version, classifier, kind, scope)`; equality and
/// hashing are defined over exactly this tuple, which is what makes set-based
/// deduplication of resolved artifacts correct. Two factory invocations with
/// identical inputs must yield equal handles.
///
/// profiledep treats the handle as opaque apart from this identity: it is
/// created by an [`crate::resolver::ArtifactFactory`] implementation and
/// owned by the caller once returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedArtifact {
    group_id: String,
    artifact_id: String,
    version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    classifier: Option<String>,
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
}

impl ResolvedArtifact {
    /// Creates a resolved artifact from its identity fields.
    ///
    /// A `None` scope means the environment-defined default applies; the
    /// core never substitutes one.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        classifier: Option<&str>,
        kind: impl Into<String>,
        scope: Option<&str>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            classifier: classifier.map(str::to_string),
            kind: kind.into(),
            scope: scope.map(str::to_string),
        }
    }

    /// Group identifier.
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Artifact identifier.
    #[must_use]
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Version string (opaque to the core).
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Secondary variant discriminator, when the factory assigned one.
    #[must_use]
    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// Artifact type, e.g. `jar` or `war`.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Dependency scope, when one was specified.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }
}

impl fmt::Display for ResolvedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.version, self.kind
        )?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        if let Some(scope) = &self.scope {
            write!(f, ":{scope}")?;
        }
        Ok(())
    }
}
