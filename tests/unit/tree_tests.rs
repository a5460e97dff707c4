//! Configuration merge contract.

use profiledep::ear;
use profiledep::tree::{self, ConfigNode, CONFIGURATION_TAG};

fn existing_with_one_module() -> ConfigNode {
    let mut config = ConfigNode::new(CONFIGURATION_TAG);
    config.add_child(ConfigNode::scalar("finalName", "shop"));
    let mut modules = ConfigNode::new("modules");
    modules.add_child(ear::build_module("g:old:ejb:old.jar").unwrap());
    config.add_child(modules);
    config
}

#[test]
fn merge_into_absent_yields_only_generated_content() {
    let generated = ear::build_modules(["g:a:ejb:a.jar"]).unwrap();
    let merged = tree::merge(None, &generated);

    assert_eq!(merged.name, CONFIGURATION_TAG);
    assert_eq!(merged.children.len(), 1);
    assert_eq!(merged.children[0], generated);
}

#[test]
fn merge_preserves_siblings_and_appends_modules() {
    let generated = ear::build_modules(["g:new:web:new.war:/new"]).unwrap();
    let merged = tree::merge(Some(existing_with_one_module()), &generated);

    // The unrelated sibling survives, in place.
    assert_eq!(merged.children[0].name, "finalName");
    assert_eq!(merged.children[0].value.as_deref(), Some("shop"));

    // Original module first, new one appended at the end.
    let modules = merged.child("modules").unwrap();
    assert_eq!(modules.children.len(), 2);
    assert_eq!(modules.children[0].name, "ejbModule");
    assert_eq!(modules.children[1].name, "webModule");
    assert_eq!(
        modules.children[1].child("contextRoot").unwrap().value.as_deref(),
        Some("/new")
    );
}

#[test]
fn merge_applied_twice_appends_twice() {
    // The merge itself is append-oriented; the caller applies it once per
    // processing pass. Two passes append two batches.
    let generated = ear::build_modules(["g:a:ejb:a.jar"]).unwrap();
    let once = tree::merge(Some(existing_with_one_module()), &generated);
    let twice = tree::merge(Some(once), &generated);

    assert_eq!(twice.child("modules").unwrap().children.len(), 3);
}

#[test]
fn scalar_overlay_does_not_touch_containers() {
    let existing = existing_with_one_module();
    let merged = tree::merge(Some(existing), &ConfigNode::scalar("finalName", "store"));

    assert_eq!(merged.children[0].value.as_deref(), Some("store"));
    assert_eq!(
        merged.child("modules").unwrap().children.len(),
        1,
        "modules untouched by a scalar overlay elsewhere"
    );
}

#[test]
fn classifier_overlay_matches_by_tag() {
    let mut existing = ConfigNode::new(CONFIGURATION_TAG);
    existing.add_child(ConfigNode::scalar("classifier", "dev"));

    let merged = tree::merge(Some(existing), &ConfigNode::scalar("classifier", "qa"));
    assert_eq!(merged.children.len(), 1, "replaced, not duplicated");
    assert_eq!(merged.children[0].value.as_deref(), Some("qa"));
}

#[test]
fn config_tree_deserializes_from_host_json() {
    let json = r#"{
        "name": "configuration",
        "children": [
            {"name": "finalName", "value": "shop"},
            {"name": "modules", "children": [
                {"name": "ejbModule", "children": [
                    {"name": "groupId", "value": "g"},
                    {"name": "artifactId", "value": "old"},
                    {"name": "uri", "value": "old.jar"}
                ]}
            ]}
        ]
    }"#;

    let parsed: ConfigNode = serde_json::from_str(json).unwrap();
    assert_eq!(parsed, existing_with_one_module());
}
