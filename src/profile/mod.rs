//! Profile model and prefix-based property scanning.
//!
//! A profile is a named, conditionally-activated bundle of build properties.
//! The host lifecycle supplies the ordered set of *active* profiles; this
//! module scans their property bags for keys starting with a configured
//! prefix and tokenizes the matching values into specification strings.
//!
//! The property accessor here is statically typed. The original host-version
//! skew that once forced dynamic property access does not apply to this
//! crate's own data model.
//!
//! # Scanning Contract
//!
//! - Profiles are visited in order; a profile with an absent or empty bag is
//!   skipped with a diagnostic, never fatally.
//! - Key selection is a plain prefix match, not path-segment aware:
//!   a key `profiledep.prefixXYZ` matches the prefix `profiledep.prefix`.
//! - Within one profile, matching keys are emitted in map-iteration order.
//!   Callers must treat cross-key order as non-deterministic; downstream
//!   deduplication makes this safe for the final set semantics.
//! - Values hold one or more specifications separated by single spaces;
//!   empty tokens from repeated spaces are dropped.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// An active build profile with its read-only property bag.
///
/// The bag may be absent entirely, which the scanner treats the same as an
/// empty one apart from the diagnostic it logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile identifier
    pub id: String,
    /// Property bag; `None` when the profile declares no properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, String>>,
}

impl Profile {
    /// Creates a profile with no property bag.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            properties: None,
        }
    }

    /// Creates a profile from key/value property pairs.
    pub fn with_properties<K, V>(
        id: impl Into<String>,
        properties: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            id: id.into(),
            properties: Some(
                properties
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
        }
    }
}

/// A property selected by prefix match, attributed to its profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixedValue {
    /// Identifier of the profile the property came from
    pub profile_id: String,
    /// The full property key (starts with the scanned prefix)
    pub key: String,
    /// The raw property value, possibly holding several specifications
    pub value: String,
}

/// Scans active profiles for properties whose key starts with `prefix`.
///
/// Emission order is profile order, then map-iteration order within a
/// profile. Profiles without properties are skipped with a diagnostic.
pub fn scan(profiles: &[Profile], prefix: &str) -> Vec<PrefixedValue> {
    if profiles.is_empty() {
        warn!("no active profiles");
        return Vec::new();
    }

    let mut matches = Vec::new();
    for profile in profiles {
        let Some(properties) = &profile.properties else {
            debug!(profile = %profile.id, "no profile properties");
            continue;
        };

        for (key, value) in properties {
            if !key.starts_with(prefix) {
                continue;
            }
            debug!(profile = %profile.id, %key, %value, "found matching property");
            matches.push(PrefixedValue {
                profile_id: profile.id.clone(),
                key: key.clone(),
                value: value.clone(),
            });
        }
    }
    matches
}

/// Splits a property value into specification tokens.
///
/// Tokens are separated by single spaces; empty tokens produced by repeated
/// spaces are dropped.
pub fn tokenize(value: &str) -> impl Iterator<Item = &str> {
    value.split(' ').filter(|token| !token.is_empty())
}

/// Returns every specification string reachable under `prefix`, flattened.
///
/// Convenience over [`scan`] plus [`tokenize`], preserving emission order.
pub fn spec_strings(profiles: &[Profile], prefix: &str) -> Vec<String> {
    let mut specs = Vec::new();
    for matched in scan(profiles, prefix) {
        specs.extend(tokenize(&matched.value).map(str::to_string));
    }
    specs
}

/// Returns the values of an exact property key across all active profiles.
///
/// Values are collected in profile order; an empty active set yields an
/// empty result with a warning. Used for single-valued conventions like the
/// packaging classifier, where the caller decides how to treat multiple
/// definitions.
pub fn profile_property(profiles: &[Profile], key: &str) -> Vec<String> {
    if profiles.is_empty() {
        warn!("no active profiles");
        return Vec::new();
    }

    let mut values = Vec::new();
    for profile in profiles {
        let Some(properties) = &profile.properties else {
            debug!(profile = %profile.id, "no profile properties");
            continue;
        };
        if let Some(value) = properties.get(key) {
            values.push(value.clone());
        }
    }
    values
}
