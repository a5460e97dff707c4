//! EAR module generation and configuration splicing.

use profiledep::core::ProfiledepError;
use profiledep::ear;
use profiledep::lifecycle;
use profiledep::test_utils::ProjectBuilder;
use profiledep::tree::ConfigNode;

use crate::init_tracing;

#[test]
fn modules_from_profiles_are_spliced_into_packaging_config() {
    init_tracing();

    let mut project = ProjectBuilder::new("ear")
        .plugin_config_child(ConfigNode::scalar("finalName", "shop"))
        .profile(
            "ci",
            &[("profiledep.modules", "g:core:ejb:core.jar g:ui:web:ui.war:/shop")],
        )
        .execution("package")
        .build();

    lifecycle::attach_ear_modules(&mut project, "profiledep.modules").unwrap();

    let plugin = &project.plugins[0];
    let config = plugin.configuration.as_ref().unwrap();

    // Pre-existing configuration survives.
    assert_eq!(
        config.child("finalName").and_then(|n| n.value.as_deref()),
        Some("shop")
    );

    let modules = config.child("modules").unwrap();
    assert_eq!(modules.children.len(), 2);
    assert_eq!(modules.children[0].name, "ejbModule");
    assert_eq!(modules.children[1].name, "webModule");
    assert_eq!(
        modules.children[1].child("contextRoot").and_then(|n| n.value.as_deref()),
        Some("/shop")
    );

    // The execution had no configuration; it gained one with the modules.
    let execution_config = plugin.executions[0].configuration.as_ref().unwrap();
    assert_eq!(execution_config.child("modules").unwrap().children.len(), 2);
}

#[test]
fn generated_modules_append_after_existing_ones() {
    let mut existing_modules = ConfigNode::new("modules");
    existing_modules.add_child(ear::build_module("g:legacy:ejb:legacy.jar").unwrap());

    let mut project = ProjectBuilder::new("ear")
        .plugin_config_child(existing_modules)
        .profile("ci", &[("profiledep.modules", "g:new:ejb:new.jar")])
        .build();

    lifecycle::attach_ear_modules(&mut project, "profiledep.modules").unwrap();

    let modules = project.plugins[0]
        .configuration
        .as_ref()
        .unwrap()
        .child("modules")
        .unwrap();
    let ids: Vec<_> = modules
        .children
        .iter()
        .map(|m| m.child("artifactId").and_then(|n| n.value.clone()).unwrap())
        .collect();
    assert_eq!(ids, vec!["legacy", "new"], "original module stays first");
}

#[test]
fn malformed_module_spec_merges_nothing() {
    let mut project = ProjectBuilder::new("ear")
        .profile(
            "ci",
            &[("profiledep.modules", "g:good:ejb:good.jar g:bad:ejb")],
        )
        .build();
    let before = project.plugins[0].configuration.clone();

    let err = lifecycle::attach_ear_modules(&mut project, "profiledep.modules").unwrap_err();
    assert!(matches!(err, ProfiledepError::MalformedSpec { .. }));
    assert_eq!(
        project.plugins[0].configuration, before,
        "no partial modules spliced in"
    );
}

#[test]
fn no_matching_properties_is_a_quiet_no_op() {
    let mut project = ProjectBuilder::new("ear")
        .profile("ci", &[("unrelated.key", "g:a:ejb:a.jar")])
        .build();
    let before = project.plugins[0].configuration.clone();

    lifecycle::attach_ear_modules(&mut project, "profiledep.modules").unwrap();
    assert_eq!(project.plugins[0].configuration, before);
}

#[test]
fn missing_packaging_plugin_fails_module_attachment() {
    let mut project = ProjectBuilder::new("ear")
        .profile("ci", &[("profiledep.modules", "g:a:ejb:a.jar")])
        .build();
    project.plugins.clear();

    let err = lifecycle::attach_ear_modules(&mut project, "profiledep.modules").unwrap_err();
    assert!(matches!(err, ProfiledepError::UnsupportedPackaging { .. }));
}
