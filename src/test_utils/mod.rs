//! Test utilities for profiledep
//!
//! Fake collaborators and builders for writing tests against the library's
//! seams without a real build environment:
//!
//! - [`StubFactory`] - a deterministic [`crate::resolver::ArtifactFactory`]
//!   that records its invocations and can inject failures per artifact id
//! - [`ProjectBuilder`] - assembles [`crate::lifecycle::Project`] fixtures
//!   with a packaging plugin, profiles, and properties pre-wired
//!
//! Available to integration tests through the `test-utils` feature, the same
//! way the crate's own unit tests use it.

pub mod factory;
pub mod project;

pub use factory::StubFactory;
pub use project::ProjectBuilder;
