//! Resolution of raw user configuration into an effective configuration.

use faasgen_core::Version;

use super::ProjectConfig;

/// Default function subdirectory.
pub const DEFAULT_FUNC_DIR: &str = "function";
/// Default handler entry file.
pub const DEFAULT_HANDLER: &str = "handler.js";
/// Pinned default tag of the openfaas/of-watchdog base image.
pub const DEFAULT_WATCHDOG_TAG: &str = "0.7.2";
/// Default author written into the function manifest.
pub const DEFAULT_AUTHOR: &str = "OpenFaaS Ltd";
/// Default license identifier.
pub const DEFAULT_LICENSE: &str = "MIT";

/// Effective configuration with every default filled in.
///
/// Produced once by [`ProjectConfig::resolve`] and passed by reference to
/// each emitter; never mutated afterwards. The raw caller-supplied
/// [`ProjectConfig`] is left untouched by resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub name: String,
    pub version: Version,
    pub description: String,
    pub author: String,
    pub license: String,
    pub func_dir: String,
    pub func_handler: String,
    pub watchdog_tag: String,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    pub peer_dependencies: Vec<String>,
}

impl ProjectConfig {
    /// Fill in defaults, producing the effective configuration.
    pub fn resolve(&self) -> ResolvedConfig {
        ResolvedConfig {
            name: self.project.name.clone(),
            version: self.project.version.clone(),
            description: self.project.description.clone().unwrap_or_default(),
            author: self
                .project
                .author
                .clone()
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            license: self
                .project
                .license
                .clone()
                .unwrap_or_else(|| DEFAULT_LICENSE.to_string()),
            func_dir: self
                .function
                .dir
                .clone()
                .unwrap_or_else(|| DEFAULT_FUNC_DIR.to_string()),
            func_handler: self
                .function
                .handler
                .clone()
                .unwrap_or_else(|| DEFAULT_HANDLER.to_string()),
            watchdog_tag: self
                .docker
                .watchdog_tag
                .clone()
                .unwrap_or_else(|| DEFAULT_WATCHDOG_TAG.to_string()),
            dependencies: self.function.dependencies.clone(),
            dev_dependencies: self.function.dev_dependencies.clone(),
            peer_dependencies: self.function.peer_dependencies.clone(),
        }
    }
}

impl ResolvedConfig {
    /// Create an effective configuration with every default, for callers
    /// that embed the generator without a faasgen.toml.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Version::default(),
            description: String::new(),
            author: DEFAULT_AUTHOR.to_string(),
            license: DEFAULT_LICENSE.to_string(),
            func_dir: DEFAULT_FUNC_DIR.to_string(),
            func_handler: DEFAULT_HANDLER.to_string(),
            watchdog_tag: DEFAULT_WATCHDOG_TAG.to_string(),
            dependencies: Vec::new(),
            dev_dependencies: Vec::new(),
            peer_dependencies: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_func_dir(mut self, dir: impl Into<String>) -> Self {
        self.func_dir = dir.into();
        self
    }

    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.func_handler = handler.into();
        self
    }

    pub fn with_watchdog_tag(mut self, tag: impl Into<String>) -> Self {
        self.watchdog_tag = tag.into();
        self
    }

    pub fn with_dependencies(
        mut self,
        declarations: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.dependencies
            .extend(declarations.into_iter().map(Into::into));
        self
    }

    pub fn with_dev_dependencies(
        mut self,
        declarations: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.dev_dependencies
            .extend(declarations.into_iter().map(Into::into));
        self
    }

    pub fn with_peer_dependencies(
        mut self,
        declarations: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.peer_dependencies
            .extend(declarations.into_iter().map(Into::into));
        self
    }
}
