//! package.json emitter for the output root.

use std::path::{Path, PathBuf};

use faasgen_core::{GeneratedFile, Overwrite, Version};

// The bootstrap's own runtime stack, pinned independently of the function's
// dependency classes.
const EXPRESS_CONSTRAINT: &str = "^4.16.2";
const BODY_PARSER_CONSTRAINT: &str = "^1.18.2";

/// The wrapper project's package.json at the output root.
///
/// The Dockerfile copies this manifest and runs `npm i` before starting the
/// bootstrap, so it must declare express and body-parser. Written once and
/// then owned by the user.
pub struct RootPackageJson {
    name: String,
    version: Version,
    description: String,
    author: String,
    license: String,
}

impl RootPackageJson {
    pub fn new(
        name: impl Into<String>,
        version: Version,
        description: impl Into<String>,
        author: impl Into<String>,
        license: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            description: description.into(),
            author: author.into(),
            license: license.into(),
        }
    }
}

impl GeneratedFile for RootPackageJson {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("package.json")
    }

    fn overwrite(&self) -> Overwrite {
        Overwrite::IfMissing
    }

    fn render(&self) -> String {
        format!(
            r#"{{
  "name": "{name}",
  "version": "{version}",
  "description": "{description}",
  "main": "index.js",
  "scripts": {{
    "test": "echo \"Error: no test specified\" && exit 0"
  }},
  "keywords": [],
  "author": "{author}",
  "license": "{license}",
  "dependencies": {{
    "body-parser": "{body_parser}",
    "express": "{express}"
  }}
}}
"#,
            name = self.name,
            version = self.version,
            description = self.description,
            author = self.author,
            license = self.license,
            body_parser = BODY_PARSER_CONSTRAINT,
            express = EXPRESS_CONSTRAINT,
        )
    }
}
