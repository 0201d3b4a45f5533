//! Sample handler emitter.

use std::path::{Path, PathBuf};

use faasgen_core::{GeneratedFile, Overwrite};

/// A minimal example handler in the function subdirectory.
///
/// This is the file users replace with their own code, so it is only ever
/// created once.
pub struct HandlerJs {
    func_dir: String,
    func_handler: String,
}

impl HandlerJs {
    pub fn new(func_dir: impl Into<String>, func_handler: impl Into<String>) -> Self {
        Self {
            func_dir: func_dir.into(),
            func_handler: func_handler.into(),
        }
    }
}

impl GeneratedFile for HandlerJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.func_dir).join(&self.func_handler)
    }

    fn overwrite(&self) -> Overwrite {
        Overwrite::IfMissing
    }

    fn render(&self) -> String {
        r#"'use strict'

module.exports = async (event, context) => {
  const result = {
    'status': 'Received input: ' + JSON.stringify(event.body)
  }

  return context
    .status(200)
    .succeed(result)
}
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lives_under_function_dir() {
        let handler = HandlerJs::new("fn", "index.js");
        assert_eq!(
            handler.path(Path::new("out")),
            Path::new("out").join("fn").join("index.js")
        );
    }

    #[test]
    fn test_sample_uses_event_context_contract() {
        let content = HandlerJs::new("function", "handler.js").render();
        assert!(content.contains("module.exports = async (event, context)"));
        assert!(content.contains(".status(200)"));
    }
}
