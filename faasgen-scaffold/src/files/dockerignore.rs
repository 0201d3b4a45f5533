//! .dockerignore emitter.

use std::path::{Path, PathBuf};

use faasgen_core::{GeneratedFile, Overwrite};

/// The .dockerignore file, excluding installed node packages from the build
/// context so the image always installs its own.
pub struct DockerIgnore;

impl GeneratedFile for DockerIgnore {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(".dockerignore")
    }

    fn overwrite(&self) -> Overwrite {
        Overwrite::Always
    }

    fn render(&self) -> String {
        "*/node_modules\n".to_string()
    }
}
