//! template.yml emitter.

use std::path::{Path, PathBuf};

use faasgen_core::{GeneratedFile, Overwrite};

/// The OpenFaaS template descriptor.
///
/// Regenerated on every run: its fields are derived entirely from the
/// configuration, so stale user copies would drift from the scaffold.
pub struct TemplateYml {
    func_handler: String,
}

impl TemplateYml {
    pub fn new(func_handler: impl Into<String>) -> Self {
        Self {
            func_handler: func_handler.into(),
        }
    }
}

impl GeneratedFile for TemplateYml {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("template.yml")
    }

    fn overwrite(&self) -> Overwrite {
        Overwrite::Always
    }

    fn render(&self) -> String {
        format!(
            r#"language: node12
fprocess: node {handler}
welcome_message: |
  You have created a new function which uses Node.js 12 (TLS) and the OpenFaaS
  of-watchdog which gives greater control over HTTP responses.

  npm i --save can be used to add third-party packages like request or cheerio
  npm documentation: https://docs.npmjs.com/

  Unit tests are run at build time via "npm run", edit package.json to specify
  how you want to execute them.
"#,
            handler = self.func_handler
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fprocess_invokes_handler() {
        let content = TemplateYml::new("handler.js").render();
        assert!(content.contains("fprocess: node handler.js"));
        assert!(content.contains("language: node12"));
    }

    #[test]
    fn test_custom_handler() {
        let content = TemplateYml::new("index.js").render();
        assert!(content.contains("fprocess: node index.js"));
    }
}
