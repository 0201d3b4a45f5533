//! Configuration parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{ProjectConfig, validate};
use crate::{Error, Result, error::SourceContext};

impl FromStr for ProjectConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "faasgen.toml")
    }
}

impl ProjectConfig {
    /// Parse a faasgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse a faasgen.toml from a string with a custom filename for error
    /// reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse a configuration from content with the given filename for error
/// reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<ProjectConfig> {
    let source_ctx = SourceContext::new(content, filename);
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate::validate_config(&config, &source_ctx)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let config: ProjectConfig = r#"
            [project]
            name = "echo"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.project.name, "echo");
        assert!(config.function.dir.is_none());
        assert!(config.function.dependencies.is_empty());
        assert!(config.docker.watchdog_tag.is_none());
    }

    #[test]
    fn test_parse_full() {
        let config: ProjectConfig = r#"
            [project]
            name = "echo"
            version = "1.2.3"
            description = "Echoes the request body"
            license = "Apache-2.0"

            [function]
            dir = "fn"
            handler = "index.js"
            dependencies = ["koa@2.1.3"]
            dev-dependencies = ["typescript@3.3.3"]
            peer-dependencies = ["body-parser@1.1.1"]

            [docker]
            watchdog-tag = "0.8.0"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.project.version.to_string(), "1.2.3");
        assert_eq!(config.function.dir.as_deref(), Some("fn"));
        assert_eq!(config.function.handler.as_deref(), Some("index.js"));
        assert_eq!(config.function.dependencies, vec!["koa@2.1.3"]);
        assert_eq!(config.docker.watchdog_tag.as_deref(), Some("0.8.0"));
    }

    #[test]
    fn test_parse_rejects_invalid_toml() {
        let result = "[project".parse::<ProjectConfig>();
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_missing_project_section() {
        let result = "[function]\ndir = \"fn\"".parse::<ProjectConfig>();
        assert!(result.is_err());
    }
}
