//! profiledep - profile-driven dependency augmentation
//!
//! A build-time library that augments a project's dependency and module set
//! from properties declared on active build profiles. Profile properties whose
//! keys start with a configured prefix carry compact, colon-delimited artifact
//! specifications; profiledep parses them, resolves each through a
//! caller-supplied artifact factory, deduplicates the results, and hands back
//! dependency descriptors ready for injection. A second grammar describes EAR
//! modules, which are spliced into the packaging plugin's configuration tree
//! without disturbing unrelated configuration.
//!
//! # Architecture Overview
//!
//! profiledep is a library invoked from within a larger build lifecycle, never
//! a standalone executable. Everything tied to that lifecycle - the project
//! model, artifact resolution machinery, configuration persistence - stays on
//! the caller's side of three narrow seams:
//!
//! - an ordered collection of active [`profile::Profile`]s, each exposing a
//!   read-only property bag
//! - an [`resolver::ArtifactFactory`] capability that turns parsed
//!   specification fields into an opaque [`core::ResolvedArtifact`]
//! - an existing [`tree::ConfigNode`] configuration tree to merge generated
//!   subtrees into
//!
//! # Specification Grammars
//!
//! Dependency specifications use 4 or 5 colon-delimited fields, with no
//! escaping of `:` inside fields:
//!
//! ```text
//! groupId:artifactId:version:type[:scope]
//! ```
//!
//! EAR module specifications use 4 fields, plus a context root honored only
//! for web modules:
//!
//! ```text
//! groupId:artifactId:type:uri[:contextRoot]
//! ```
//!
//! Each matching property value may hold several specifications separated by
//! single spaces; matching properties across all active profiles are unioned.
//!
//! # Core Modules
//!
//! - [`core`] - error types and the resolved-artifact identity model
//! - [`spec`] - parsers for both specification grammars
//! - [`profile`] - profile model and prefix-based property scanning
//! - [`resolver`] - factory seam, inclusion filters, strict and tolerant
//!   resolution paths
//! - [`ear`] - EAR module descriptor generation
//! - [`tree`] - ordered configuration tree and the pure merge routine
//! - [`lifecycle`] - orchestration entry points operating on a caller-owned
//!   project model
//!
//! # Example
//!
//! ```rust
//! use profiledep::core::{FactoryError, ResolvedArtifact};
//! use profiledep::profile::Profile;
//! use profiledep::resolver::{self, ArtifactFactory, ProvidedScopeFilter};
//!
//! struct LocalFactory;
//!
//! impl ArtifactFactory for LocalFactory {
//!     fn create_artifact(
//!         &self,
//!         group_id: &str,
//!         artifact_id: &str,
//!         version: &str,
//!         kind: &str,
//!         scope: Option<&str>,
//!     ) -> Result<ResolvedArtifact, FactoryError> {
//!         Ok(ResolvedArtifact::new(group_id, artifact_id, version, None, kind, scope))
//!     }
//! }
//!
//! let profiles = vec![Profile::with_properties(
//!     "integration",
//!     [("profiledep.extra", "org.example:client:1.2:jar org.example:api:1.2:jar:provided")],
//! )];
//!
//! let specs = profiledep::profile::spec_strings(&profiles, "profiledep.");
//! let artifacts = resolver::collect_artifacts(
//!     &LocalFactory,
//!     specs.iter().map(String::as_str),
//!     &ProvidedScopeFilter,
//! )
//! .unwrap();
//!
//! // The provided-scoped artifact is filtered out, the other one survives.
//! assert_eq!(artifacts.len(), 1);
//! ```
//!
//! # Error Handling
//!
//! All failures surface as [`core::ProfiledepError`] variants carrying the
//! offending specification string. The two resolution paths deliberately
//! differ: the strict set-building path aborts the whole batch on the first
//! bad specification, while the tolerant legacy path logs and skips bad
//! specifications so the remaining ones proceed. See [`resolver`] for the
//! rationale.

// Core functionality modules
pub mod core;
pub mod profile;
pub mod resolver;
pub mod spec;

// Configuration tree manipulation
pub mod ear;
pub mod tree;

// Build-lifecycle orchestration
pub mod lifecycle;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
