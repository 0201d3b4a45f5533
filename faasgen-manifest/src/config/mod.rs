//! Project configuration types and parsing for faasgen.toml files.

mod parse;
mod resolve;
mod validate;

use faasgen_core::Version;
pub use resolve::{
    DEFAULT_AUTHOR, DEFAULT_FUNC_DIR, DEFAULT_HANDLER, DEFAULT_LICENSE, DEFAULT_WATCHDOG_TAG,
    ResolvedConfig,
};
use serde::Deserialize;

/// Root configuration parsed from faasgen.toml.
///
/// This is the raw user input. Defaults are not filled in here; call
/// [`ProjectConfig::resolve`] to obtain the effective configuration used by
/// the generator.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Project metadata
    pub project: ProjectSection,

    /// Function layout and dependency declarations
    #[serde(default)]
    pub function: FunctionSection,

    /// Docker image settings
    #[serde(default)]
    pub docker: DockerSection,
}

/// `[project]` section of faasgen.toml
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    /// Name of the function project
    pub name: String,

    /// Version written into the function manifest
    #[serde(default)]
    pub version: Version,

    /// Description written into the function manifest
    pub description: Option<String>,

    /// Author information
    pub author: Option<String>,

    /// License identifier
    pub license: Option<String>,
}

/// `[function]` section of faasgen.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FunctionSection {
    /// Subdirectory holding the function's own manifest and handler
    pub dir: Option<String>,

    /// Handler entry file name
    pub handler: Option<String>,

    /// Runtime dependency declarations (`name@version`)
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Development dependency declarations
    #[serde(default)]
    pub dev_dependencies: Vec<String>,

    /// Peer dependency declarations
    #[serde(default)]
    pub peer_dependencies: Vec<String>,
}

/// `[docker]` section of faasgen.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DockerSection {
    /// Tag of the openfaas/of-watchdog base image
    pub watchdog_tag: Option<String>,
}
