//! Core types for profiledep
//!
//! This module forms the foundation of profiledep's type system: the error
//! enumeration every fallible operation returns, and the resolved-artifact
//! descriptor whose identity tuple makes set-based deduplication correct.
//!
//! # Error Management
//!
//! profiledep uses strongly-typed errors throughout:
//! - [`ProfiledepError`] - enumerated error types for every failure mode
//! - [`FactoryError`] - the error an external [`crate::resolver::ArtifactFactory`]
//!   reports, wrapped into [`ProfiledepError::Resolution`] at the adapter seam
//! - [`Result`] - crate-wide result alias
//!
//! Errors carry the offending specification string wherever one exists, so a
//! failure deep inside a batch is still attributable to a single property
//! value.
//!
//! # Artifact Identity
//!
//! [`ResolvedArtifact`] is an opaque handle from the caller's perspective:
//! profiledep never inspects it beyond the identity tuple
//! `(group, artifact, version, classifier, type, scope)` over which equality
//! and hashing are defined. Two factory calls with identical inputs must
//! produce equal handles - that contract is what lets duplicate
//! specifications across profiles collapse silently into one set entry.

pub mod artifact;
pub mod error;

pub use artifact::ResolvedArtifact;
pub use error::{FactoryError, ProfiledepError, Result};
