//! package.json emitter for the function subdirectory.

use std::path::{Path, PathBuf};

use faasgen_core::{GeneratedFile, Overwrite};
use faasgen_manifest::FunctionManifest;

/// The function's package.json, written once and then owned by the user.
///
/// Dependencies added by hand with `npm i --save` must survive later
/// generation runs, so this artifact is never overwritten.
pub struct PackageJson {
    func_dir: String,
    manifest: FunctionManifest,
}

impl PackageJson {
    pub fn new(func_dir: impl Into<String>, manifest: FunctionManifest) -> Self {
        Self {
            func_dir: func_dir.into(),
            manifest,
        }
    }
}

impl GeneratedFile for PackageJson {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.func_dir).join("package.json")
    }

    fn overwrite(&self) -> Overwrite {
        Overwrite::IfMissing
    }

    fn render(&self) -> String {
        self.manifest.to_json()
    }
}
