//! Deterministic artifact factory for tests.

use crate::core::{FactoryError, ResolvedArtifact};
use crate::resolver::ArtifactFactory;
use std::cell::RefCell;

/// An [`ArtifactFactory`] that manufactures artifacts straight from their
/// coordinates, records every invocation, and optionally fails for a chosen
/// artifact id.
///
/// Identical invocations yield equal artifacts, satisfying the factory
/// contract the deduplicating set builder relies on.
#[derive(Debug, Default)]
pub struct StubFactory {
    fail_on: Option<String>,
    calls: RefCell<Vec<String>>,
}

impl StubFactory {
    /// Creates a factory that succeeds for every coordinate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory that fails whenever the artifact id matches.
    #[must_use]
    pub fn failing_on(artifact_id: impl Into<String>) -> Self {
        Self {
            fail_on: Some(artifact_id.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Returns the recorded invocations as colon-joined coordinate strings,
    /// scope included when one was passed.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ArtifactFactory for StubFactory {
    fn create_artifact(
        &self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
        kind: &str,
        scope: Option<&str>,
    ) -> Result<ResolvedArtifact, FactoryError> {
        let mut call = format!("{group_id}:{artifact_id}:{version}:{kind}");
        if let Some(scope) = scope {
            call.push(':');
            call.push_str(scope);
        }
        self.calls.borrow_mut().push(call);

        if self.fail_on.as_deref() == Some(artifact_id) {
            return Err(FactoryError::new(format!(
                "no artifact for id '{artifact_id}'"
            )));
        }

        Ok(ResolvedArtifact::new(
            group_id,
            artifact_id,
            version,
            None,
            kind,
            scope,
        ))
    }
}
