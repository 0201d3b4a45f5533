//! Starter faasgen.toml emitter.

use std::path::{Path, PathBuf};

use faasgen_core::{GeneratedFile, Overwrite, Version};

/// The faasgen.toml configuration file written by `faasgen init`.
pub struct FaasgenToml {
    pub name: String,
    pub version: Version,
    pub description: String,
}

impl FaasgenToml {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Version::default(),
            description: "An OpenFaaS function".to_string(),
        }
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl GeneratedFile for FaasgenToml {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("faasgen.toml")
    }

    fn overwrite(&self) -> Overwrite {
        Overwrite::IfMissing
    }

    fn render(&self) -> String {
        format!(
            r#"[project]
name = "{}"
version = "{}"
description = "{}"

[function]
# dir = "function"
# handler = "handler.js"
dependencies = []
dev-dependencies = []
peer-dependencies = []

[docker]
# Tag of the openfaas/of-watchdog base image
# watchdog-tag = "0.7.2"
"#,
            self.name, self.version, self.description
        )
    }
}
