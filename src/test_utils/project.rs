//! Project fixtures for lifecycle tests.

use crate::lifecycle::{PackagingPlugin, PluginExecution, Project, PREFIX_PROPERTY};
use crate::profile::Profile;
use crate::tree::{ConfigNode, CONFIGURATION_TAG};

/// Builder for [`Project`] fixtures.
///
/// Starts from a project whose [`PREFIX_PROPERTY`] is `profiledep.` and
/// whose plugin list holds a `maven-<packaging>-plugin` with an empty
/// primary configuration. Tests mutate the built project directly for the
/// degenerate cases (missing plugin, missing configuration).
#[derive(Debug)]
pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    /// Creates a builder for the given packaging type.
    #[must_use]
    pub fn new(packaging: &str) -> Self {
        let plugin = PackagingPlugin {
            artifact_id: format!("maven-{packaging}-plugin"),
            configuration: Some(ConfigNode::new(CONFIGURATION_TAG)),
            executions: Vec::new(),
        };
        let mut project = Project {
            packaging: packaging.to_string(),
            ..Project::default()
        };
        project
            .properties
            .insert(PREFIX_PROPERTY.to_string(), "profiledep.".to_string());
        project.plugins.push(plugin);

        Self { project }
    }

    /// Sets a project-level property.
    #[must_use]
    pub fn property(mut self, key: &str, value: &str) -> Self {
        self.project
            .properties
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Adds an active profile with the given properties.
    #[must_use]
    pub fn profile(mut self, id: &str, properties: &[(&str, &str)]) -> Self {
        self.project
            .profiles
            .push(Profile::with_properties(id, properties.iter().copied()));
        self
    }

    /// Puts a `classifier` scalar into the packaging plugin's configuration.
    #[must_use]
    pub fn plugin_classifier(mut self, classifier: &str) -> Self {
        let config = self.project.plugins[0]
            .configuration
            .get_or_insert_with(|| ConfigNode::new(CONFIGURATION_TAG));
        config.add_child(ConfigNode::scalar("classifier", classifier));
        self
    }

    /// Adds a configuration child to the packaging plugin's configuration.
    #[must_use]
    pub fn plugin_config_child(mut self, child: ConfigNode) -> Self {
        let config = self.project.plugins[0]
            .configuration
            .get_or_insert_with(|| ConfigNode::new(CONFIGURATION_TAG));
        config.add_child(child);
        self
    }

    /// Declares a plugin execution without its own configuration.
    #[must_use]
    pub fn execution(mut self, id: &str) -> Self {
        self.project.plugins[0].executions.push(PluginExecution {
            id: id.to_string(),
            configuration: None,
        });
        self
    }

    /// Declares a plugin execution with the given configuration.
    #[must_use]
    pub fn execution_with_config(mut self, id: &str, configuration: ConfigNode) -> Self {
        self.project.plugins[0].executions.push(PluginExecution {
            id: id.to_string(),
            configuration: Some(configuration),
        });
        self
    }

    /// Finishes the fixture.
    #[must_use]
    pub fn build(self) -> Project {
        self.project
    }
}
