//! Error handling for profiledep
//!
//! All failure modes are enumerated in [`ProfiledepError`]. The design keeps
//! two principles from the host-lifecycle contract:
//!
//! 1. **Typed errors at the API surface** - the core is a library invoked
//!    within a larger build lifecycle; callers match on variants rather than
//!    parsing messages or exit codes.
//! 2. **Attributable failures** - every variant that concerns a specification
//!    string carries that string verbatim, so batch failures point at the
//!    exact property value that caused them.
//!
//! # Propagation Policy
//!
//! Per-specification parse/resolve problems are handled differently by the
//! two resolution paths, and that asymmetry is intentional:
//!
//! - the strict set-building path ([`crate::resolver::collect_artifacts`])
//!   wraps the first failure in [`ProfiledepError::ProfileArtifactResolution`]
//!   and aborts the batch with no partial result
//! - the tolerant path ([`crate::resolver::resolve_tolerant`]) logs each bad
//!   specification and continues with the remaining tokens
//!
//! # Examples
//!
//! ```rust
//! use profiledep::core::ProfiledepError;
//! use profiledep::spec::ArtifactSpec;
//!
//! let err = ArtifactSpec::parse("g:a:1.0").unwrap_err();
//! assert!(matches!(err, ProfiledepError::MalformedSpec { .. }));
//! ```

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ProfiledepError>;

/// Error reported by an external artifact factory.
///
/// Factories are host-side collaborators; profiledep only requires that a
/// failed creation surfaces a human-readable reason. The resolver adapter
/// wraps this into [`ProfiledepError::Resolution`] together with the
/// specification string the factory was invoked for.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct FactoryError {
    /// Reason reported by the factory
    message: String,
}

impl FactoryError {
    /// Creates a factory error with the given reason.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The main error type for profiledep operations
///
/// Each variant represents a specific failure mode and carries the context
/// needed to attribute it: the offending specification string, the plugin or
/// packaging type involved, or the wrapped cause.
#[derive(Error, Debug)]
pub enum ProfiledepError {
    /// A specification string violates the colon-delimited grammar
    ///
    /// Raised for a wrong token count (dependency specifications take exactly
    /// 4 or 5 fields, EAR module specifications at least 4) or for an empty
    /// field, e.g. `"a::1.0:jar"`. Always fatal to parsing that one
    /// specification; callers choose whether that aborts a batch or only
    /// skips the token.
    #[error("Invalid artifact specification '{spec}': {reason}")]
    MalformedSpec {
        /// The specification string as found in the property value
        spec: String,
        /// What the grammar check rejected
        reason: String,
    },

    /// The external artifact factory failed for one specification
    #[error("Failed to resolve artifact '{spec}'")]
    Resolution {
        /// The specification string the factory was invoked for
        spec: String,
        /// The factory-side cause
        #[source]
        source: FactoryError,
    },

    /// A parse or resolve failure aborted strict batch collection
    ///
    /// Wraps the underlying [`MalformedSpec`](Self::MalformedSpec) or
    /// [`Resolution`](Self::Resolution) error. The batch produces no partial
    /// result: one bad specification discards even the valid ones.
    #[error("Failed to create profile artifact '{spec}'")]
    ProfileArtifactResolution {
        /// The specification string that aborted the batch
        spec: String,
        /// The parse or resolve failure
        #[source]
        source: Box<ProfiledepError>,
    },

    /// No property prefix is configured for profile dependencies
    #[error("No property prefix configured for profile dependencies")]
    MissingPrefix,

    /// The packaging plugin carries no usable configuration
    #[error("No packaging configuration on plugin '{plugin}'")]
    MissingConfig {
        /// Artifact id of the plugin missing its configuration
        plugin: String,
    },

    /// No packaging plugin matches the project's packaging type
    #[error("Unsupported packaging '{packaging}': no matching packaging plugin declared")]
    UnsupportedPackaging {
        /// The project's packaging type
        packaging: String,
    },

    /// No classifier available from configuration, session, or profiles
    #[error("No packaging classifier available for profile build")]
    MissingClassifier,
}
