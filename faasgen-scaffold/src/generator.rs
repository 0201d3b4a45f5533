//! Project generation facade.

use std::path::Path;

use eyre::{Result, WrapErr};
use faasgen_core::{GeneratedFile, WriteResult};
use faasgen_manifest::{FunctionManifest, ResolvedConfig};

use crate::files::{
    DockerIgnore, Dockerfile, HandlerJs, IndexJs, PackageJson, RootPackageJson, TemplateYml,
};

/// Scaffolds an OpenFaaS Node.js function project from an effective
/// configuration.
///
/// Generation is single-threaded and run-to-completion: artifacts are
/// emitted in fixed registration order, and a failed write aborts the run
/// leaving already-written files in place (no rollback).
pub struct Generator<'a> {
    config: &'a ResolvedConfig,
}

/// A planned file, produced without touching the file system.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output root
    pub path: String,
    /// File content
    pub content: String,
}

/// Result of a generation run.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Artifacts freshly written this run (paths relative to the output root)
    pub written: Vec<String>,
    /// Artifacts left untouched because they already existed
    pub skipped: Vec<String>,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a ResolvedConfig) -> Self {
        Self { config }
    }

    /// Plan every artifact without writing to disk.
    ///
    /// The plan ignores the state of the target directory; pre-existing
    /// artifacts only affect [`Generator::generate`].
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.emitters()
            .iter()
            .map(|file| PreviewFile {
                path: relative_path(file.as_ref()),
                content: file.render(),
            })
            .collect()
    }

    /// Generate all artifacts into the output directory.
    ///
    /// The function subdirectory is created first; if that fails the run
    /// aborts before anything is written.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let func_dir = output_dir.join(&self.config.func_dir);
        std::fs::create_dir_all(&func_dir)
            .wrap_err_with(|| format!("failed to create function directory '{}'", func_dir.display()))?;

        let mut result = GenerateResult::default();
        for file in self.emitters() {
            let path = relative_path(file.as_ref());
            match file.write(output_dir)? {
                WriteResult::Written => result.written.push(path),
                WriteResult::Skipped => result.skipped.push(path),
            }
        }
        Ok(result)
    }

    /// Emitters in registration order: function manifest, root manifest,
    /// descriptor, ignore file, bootstrap, handler, Dockerfile.
    fn emitters(&self) -> Vec<Box<dyn GeneratedFile>> {
        let config = self.config;
        vec![
            Box::new(PackageJson::new(
                &config.func_dir,
                FunctionManifest::assemble(config),
            )),
            Box::new(RootPackageJson::new(
                &config.name,
                config.version.clone(),
                &config.description,
                &config.author,
                &config.license,
            )),
            Box::new(TemplateYml::new(&config.func_handler)),
            Box::new(DockerIgnore),
            Box::new(IndexJs::new(&config.func_dir, &config.func_handler)),
            Box::new(HandlerJs::new(&config.func_dir, &config.func_handler)),
            Box::new(Dockerfile::new(&config.func_dir, &config.watchdog_tag)),
        ]
    }
}

fn relative_path(file: &dyn GeneratedFile) -> String {
    file.path(Path::new("")).display().to_string()
}
