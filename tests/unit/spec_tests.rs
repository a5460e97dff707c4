//! Specification grammar edge cases exercised through the public API.

use profiledep::core::ProfiledepError;
use profiledep::spec::{ArtifactSpec, EarModuleSpec};

#[test]
fn artifact_spec_parses_via_from_str() {
    let spec: ArtifactSpec = "org.example:api:1.0:jar".parse().unwrap();
    assert_eq!(spec.group_id, "org.example");
    assert_eq!(spec.artifact_id, "api");
    assert_eq!(spec.version, "1.0");
    assert_eq!(spec.kind, "jar");
    assert!(spec.scope.is_none());
}

#[test]
fn artifact_spec_scope_is_fifth_field() {
    let spec: ArtifactSpec = "g:a:1.0:jar:test".parse().unwrap();
    assert_eq!(spec.kind, "jar");
    assert_eq!(spec.scope.as_deref(), Some("test"));
}

#[test]
fn artifact_spec_rejects_wrong_field_counts() {
    for raw in ["", "g", "g:a", "g:a:1.0", "g:a:1.0:jar:test:extra"] {
        let err = ArtifactSpec::parse(raw).unwrap_err();
        match err {
            ProfiledepError::MalformedSpec { spec, .. } => assert_eq!(spec, raw),
            other => panic!("unexpected error for '{raw}': {other:?}"),
        }
    }
}

#[test]
fn artifact_spec_rejects_empty_fields_anywhere() {
    for raw in [":a:1.0:jar", "g::1.0:jar", "g:a::jar", "g:a:1.0:", "g:a:1.0:jar:"] {
        assert!(
            ArtifactSpec::parse(raw).is_err(),
            "'{raw}' should be malformed"
        );
    }
}

#[test]
fn artifact_spec_colons_are_not_escapable() {
    // A version containing a colon shifts the field boundaries; the grammar
    // offers no escaping, so the extra field makes the string malformed.
    assert!(ArtifactSpec::parse("g:a:1.0:beta:jar:test").is_err());
}

#[test]
fn artifact_spec_serde_shape() {
    let spec = ArtifactSpec::parse("g:a:1.0:jar").unwrap();
    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["group_id"], "g");
    assert!(
        json.get("scope").is_none(),
        "absent scope is omitted from the serialized form"
    );
}

#[test]
fn ear_spec_context_root_only_for_web() {
    let web: EarModuleSpec = "g:a:web:app.war:/shop".parse().unwrap();
    assert_eq!(web.context_root.as_deref(), Some("/shop"));

    let ejb: EarModuleSpec = "g:a:ejb:mod.jar:/shop".parse().unwrap();
    assert!(ejb.context_root.is_none());
}

#[test]
fn ear_spec_rejects_short_specs() {
    for raw in ["g:a:ejb", "g:a", ""] {
        assert!(EarModuleSpec::parse(raw).is_err());
    }
}
