//! Assembly of the generated function's package manifest.

use faasgen_core::Version;
use serde::Serialize;

use crate::{
    config::ResolvedConfig,
    deps::{self, DependencyMap},
};

/// The function's package.json document.
///
/// Assembled once per generation run from the effective configuration plus
/// the three parsed dependency maps, then serialized and never mutated.
/// The three dependency classes are independent: the same package may appear
/// in more than one class with different constraints.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionManifest {
    name: String,
    version: Version,
    description: String,
    main: String,
    scripts: Scripts,
    keywords: Vec<String>,
    author: String,
    license: String,
    dependencies: DependencyMap,
    #[serde(rename = "devDependencies")]
    dev_dependencies: DependencyMap,
    #[serde(rename = "peerDependencies")]
    peer_dependencies: DependencyMap,
}

#[derive(Debug, Clone, Serialize)]
struct Scripts {
    test: String,
}

impl FunctionManifest {
    /// Assemble the manifest from the effective configuration.
    pub fn assemble(config: &ResolvedConfig) -> Self {
        Self {
            name: config.name.clone(),
            version: config.version.clone(),
            description: config.description.clone(),
            main: config.func_handler.clone(),
            scripts: Scripts {
                test: r#"echo "Error: no test specified" && exit 0"#.to_string(),
            },
            keywords: Vec::new(),
            author: config.author.clone(),
            license: config.license.clone(),
            dependencies: deps::parse(&config.dependencies),
            dev_dependencies: deps::parse(&config.dev_dependencies),
            peer_dependencies: deps::parse(&config.peer_dependencies),
        }
    }

    /// Handler entry file recorded in the `main` field.
    pub fn main(&self) -> &str {
        &self.main
    }

    /// Runtime dependency map.
    pub fn dependencies(&self) -> &DependencyMap {
        &self.dependencies
    }

    /// Development dependency map.
    pub fn dev_dependencies(&self) -> &DependencyMap {
        &self.dev_dependencies
    }

    /// Peer dependency map.
    pub fn peer_dependencies(&self) -> &DependencyMap {
        &self.peer_dependencies
    }

    /// Serialize to the package.json text written to disk.
    pub fn to_json(&self) -> String {
        let mut json = serde_json::to_string_pretty(self)
            .expect("function manifest serialization is infallible");
        json.push('\n');
        json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_classes_stay_independent() {
        let config = ResolvedConfig::new("echo")
            .with_dependencies(["koa@2.1.3"])
            .with_dev_dependencies(["typescript@3.3.3"])
            .with_peer_dependencies(["body-parser@1.1.1"]);
        let manifest = FunctionManifest::assemble(&config);

        assert_eq!(
            manifest.dependencies().get("koa").map(String::as_str),
            Some("2.1.3")
        );
        assert_eq!(manifest.dependencies().len(), 1);
        assert_eq!(
            manifest
                .dev_dependencies()
                .get("typescript")
                .map(String::as_str),
            Some("3.3.3")
        );
        assert_eq!(manifest.dev_dependencies().len(), 1);
        assert_eq!(
            manifest
                .peer_dependencies()
                .get("body-parser")
                .map(String::as_str),
            Some("1.1.1")
        );
        assert_eq!(manifest.peer_dependencies().len(), 1);
    }

    #[test]
    fn test_same_package_allowed_in_two_classes() {
        let config = ResolvedConfig::new("echo")
            .with_dependencies(["react@17.0.0"])
            .with_peer_dependencies(["react@^16.8.0"]);
        let manifest = FunctionManifest::assemble(&config);

        assert_eq!(
            manifest.dependencies().get("react").map(String::as_str),
            Some("17.0.0")
        );
        assert_eq!(
            manifest
                .peer_dependencies()
                .get("react")
                .map(String::as_str),
            Some("^16.8.0")
        );
    }

    #[test]
    fn test_main_follows_handler() {
        let config = ResolvedConfig::new("echo").with_handler("index.js");
        let manifest = FunctionManifest::assemble(&config);
        assert_eq!(manifest.main(), "index.js");
    }

    #[test]
    fn test_json_shape() {
        let config = ResolvedConfig::new("echo").with_dependencies(["koa@2.1.3"]);
        let json = FunctionManifest::assemble(&config).to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "echo");
        assert_eq!(value["version"], "0.1.0");
        assert_eq!(value["main"], "handler.js");
        assert_eq!(value["author"], "OpenFaaS Ltd");
        assert_eq!(value["license"], "MIT");
        assert_eq!(value["dependencies"]["koa"], "2.1.3");
        assert_eq!(value["devDependencies"], serde_json::json!({}));
        assert_eq!(value["peerDependencies"], serde_json::json!({}));
        assert!(json.ends_with('\n'));
    }
}
