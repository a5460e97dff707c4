//! Scanner-to-resolver flow across profiles.

use profiledep::core::ProfiledepError;
use profiledep::profile::{self, Profile};
use profiledep::resolver::{self, ArtifactFilter, ProvidedScopeFilter};
use profiledep::test_utils::StubFactory;

#[test]
fn duplicate_specs_across_profiles_collapse_to_one() {
    let profiles = vec![
        Profile::with_properties("one", [("profiledep.a", "g:a:1:jar")]),
        Profile::with_properties("two", [("profiledep.b", "g:a:1:jar")]),
    ];
    let specs = profile::spec_strings(&profiles, "profiledep.");
    assert_eq!(specs.len(), 2);

    let factory = StubFactory::new();
    let set = resolver::collect_artifacts(
        &factory,
        specs.iter().map(String::as_str),
        &ProvidedScopeFilter,
    )
    .unwrap();

    assert_eq!(set.len(), 1, "identical resolved identities deduplicate");
    // Both specifications were still resolved before deduplication.
    assert_eq!(factory.calls().len(), 2);
}

#[test]
fn profiles_without_properties_are_skipped_not_fatal() {
    let profiles = vec![
        Profile::new("bare"),
        Profile::with_properties("real", [("profiledep.deps", "g:a:1:jar")]),
    ];
    let specs = profile::spec_strings(&profiles, "profiledep.");
    assert_eq!(specs, vec!["g:a:1:jar"]);
}

#[test]
fn multiple_specs_in_one_property_value() {
    let profiles = vec![Profile::with_properties(
        "ci",
        [("profiledep.deps", "g:a:1:jar g:b:2:war:runtime  g:c:3:jar")],
    )];
    let specs = profile::spec_strings(&profiles, "profiledep.");
    assert_eq!(specs.len(), 3, "space-separated, repeated spaces dropped");

    let set = resolver::collect_artifacts(
        &StubFactory::new(),
        specs.iter().map(String::as_str),
        &ProvidedScopeFilter,
    )
    .unwrap();
    assert_eq!(set.len(), 3);
}

#[test]
fn provided_scope_is_excluded_by_standard_policy() {
    let factory = StubFactory::new();
    let set = resolver::collect_artifacts(
        &factory,
        ["g:runtime-dep:1:jar:compile", "g:container-dep:1:jar:provided"],
        &ProvidedScopeFilter,
    )
    .unwrap();

    assert_eq!(set.len(), 1);
    assert_eq!(set.iter().next().unwrap().artifact_id(), "runtime-dep");
}

#[test]
fn custom_filter_rejections_warn_but_do_not_abort() {
    struct RejectAll;
    impl ArtifactFilter for RejectAll {
        fn include(&self, _artifact: &profiledep::core::ResolvedArtifact) -> bool {
            false
        }
    }

    let set =
        resolver::collect_artifacts(&StubFactory::new(), ["g:a:1:jar"], &RejectAll).unwrap();
    assert!(set.is_empty());
}

#[test]
fn batch_aborts_with_no_partial_result() {
    let specs = ["g:first:1:jar", "g:a:1.0", "g:last:1:jar"];
    let err = resolver::collect_artifacts(&StubFactory::new(), specs, &ProvidedScopeFilter)
        .unwrap_err();

    match err {
        ProfiledepError::ProfileArtifactResolution { spec, .. } => assert_eq!(spec, "g:a:1.0"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn tolerant_path_reports_survivors_in_encounter_order() {
    let factory = StubFactory::failing_on("gone");
    let resolved = resolver::resolve_tolerant(
        &factory,
        ["g:one:1:jar", "not-a-spec", "g:gone:1:jar", "g:two:2:war:test"],
    );

    let ids: Vec<&str> = resolved.iter().map(|a| a.artifact_id()).collect();
    assert_eq!(ids, vec!["one", "two"]);
    assert_eq!(resolved[1].scope(), Some("test"));
}
