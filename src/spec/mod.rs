//! Parsers for the colon-delimited specification grammars.
//!
//! Two grammars exist, both compact textual encodings placed in profile
//! property values:
//!
//! - **Dependency**: `groupId:artifactId:version:type[:scope]` - exactly 4 or
//!   5 fields, parsed by [`ArtifactSpec`]
//! - **EAR module**: `groupId:artifactId:type:uri[:contextRoot]` - at least 4
//!   fields, parsed by [`EarModuleSpec`]; the context root is honored only
//!   when the type is exactly `web`
//!
//! Neither grammar supports escaping of `:` inside a field. That is a known
//! format limitation carried over from the property convention, not something
//! the parsers try to work around.
//!
//! Parsing is pure: the same string always yields field-wise-equal results,
//! and a malformed string never yields a partial value.
//!
//! # Examples
//!
//! ```rust
//! use profiledep::spec::ArtifactSpec;
//!
//! let spec = ArtifactSpec::parse("org.example:api:1.0:jar:test").unwrap();
//! assert_eq!(spec.group_id, "org.example");
//! assert_eq!(spec.scope.as_deref(), Some("test"));
//!
//! assert!(ArtifactSpec::parse("org.example:api:1.0").is_err());
//! ```

use crate::core::{ProfiledepError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Module type for which a context root is meaningful.
const WEB_MODULE_KIND: &str = "web";

/// A parsed dependency specification.
///
/// Fields appear in the string in the fixed order group, artifact, version,
/// type, then an optional scope. The scope is logically associated with the
/// resolved artifact's scope attribute, not a fifth positional type: the
/// [`crate::resolver::ArtifactFactory`] receives it as an explicit, separate
/// parameter while the type stays in fourth position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSpec {
    /// Group identifier
    pub group_id: String,
    /// Artifact identifier
    pub artifact_id: String,
    /// Version string (opaque to the core)
    pub version: String,
    /// Artifact type, e.g. `jar`
    pub kind: String,
    /// Dependency scope; when absent, the environment-defined default applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl ArtifactSpec {
    /// Parses a dependency specification string.
    ///
    /// Splits on `:` and requires exactly 4 or 5 non-empty fields.
    ///
    /// # Errors
    ///
    /// Returns [`ProfiledepError::MalformedSpec`] when the token count is not
    /// 4 or 5, or when any field is empty (e.g. `"a::1.0:jar"`).
    pub fn parse(spec: &str) -> Result<Self> {
        trace!(spec, "parsing artifact specification");

        let tokens: Vec<&str> = spec.split(':').collect();
        if tokens.len() < 4 || tokens.len() > 5 {
            return Err(ProfiledepError::MalformedSpec {
                spec: spec.to_string(),
                reason: format!(
                    "expected 4 or 5 colon-separated fields, got {}",
                    tokens.len()
                ),
            });
        }
        if let Some(position) = tokens.iter().position(|token| token.is_empty()) {
            return Err(ProfiledepError::MalformedSpec {
                spec: spec.to_string(),
                reason: format!("empty field at position {}", position + 1),
            });
        }

        Ok(Self {
            group_id: tokens[0].to_string(),
            artifact_id: tokens[1].to_string(),
            version: tokens[2].to_string(),
            kind: tokens[3].to_string(),
            scope: tokens.get(4).map(|scope| (*scope).to_string()),
        })
    }
}

impl FromStr for ArtifactSpec {
    type Err = ProfiledepError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ArtifactSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.version, self.kind
        )?;
        if let Some(scope) = &self.scope {
            write!(f, ":{scope}")?;
        }
        Ok(())
    }
}

/// A parsed EAR module specification.
///
/// The context root is only meaningful for web modules; for any other type a
/// fifth field is silently ignored, a tolerated laxness of the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarModuleSpec {
    /// Group identifier
    pub group_id: String,
    /// Artifact identifier
    pub artifact_id: String,
    /// Module type, e.g. `ejb` or `web`
    pub kind: String,
    /// URI of the module inside the archive
    pub uri: String,
    /// Context root, present only when the type is `web` and a fifth field
    /// was given; no default is synthesized otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_root: Option<String>,
}

impl EarModuleSpec {
    /// Parses an EAR module specification string.
    ///
    /// Splits on `:` and requires at least 4 non-empty fields in the order
    /// group, artifact, type, uri. When the type is `web` and a non-empty
    /// fifth field exists, it becomes the context root. Fields beyond the
    /// fourth are ignored for non-web types.
    ///
    /// # Errors
    ///
    /// Returns [`ProfiledepError::MalformedSpec`] when fewer than 4 fields
    /// are present or one of the first 4 is empty.
    pub fn parse(spec: &str) -> Result<Self> {
        trace!(spec, "parsing EAR module specification");

        let tokens: Vec<&str> = spec.split(':').collect();
        if tokens.len() < 4 {
            return Err(ProfiledepError::MalformedSpec {
                spec: spec.to_string(),
                reason: format!(
                    "expected at least 4 colon-separated fields, got {}",
                    tokens.len()
                ),
            });
        }
        if let Some(position) = tokens[..4].iter().position(|token| token.is_empty()) {
            return Err(ProfiledepError::MalformedSpec {
                spec: spec.to_string(),
                reason: format!("empty field at position {}", position + 1),
            });
        }

        let kind = tokens[2].to_string();
        let context_root = if kind == WEB_MODULE_KIND {
            tokens
                .get(4)
                .filter(|token| !token.is_empty())
                .map(|token| (*token).to_string())
        } else {
            None
        };

        Ok(Self {
            group_id: tokens[0].to_string(),
            artifact_id: tokens[1].to_string(),
            kind,
            uri: tokens[3].to_string(),
            context_root,
        })
    }
}

impl FromStr for EarModuleSpec {
    type Err = ProfiledepError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
