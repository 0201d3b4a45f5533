use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use faasgen_manifest::ProjectConfig;
use faasgen_scaffold::Generator;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to faasgen.toml (defaults to ./faasgen.toml)
    #[arg(short, long, default_value = "faasgen.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Print generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = ProjectConfig::from_file(&self.config).unwrap_or_exit();
        let resolved = config.resolve();
        let generator = Generator::new(&resolved);

        if self.dry_run {
            for file in generator.preview() {
                println!("── {} ──", file.path);
                println!("{}", file.content);
            }
            return Ok(());
        }

        let result = generator
            .generate(&self.output)
            .wrap_err("Failed to generate project files")?;

        println!("{} v{}", resolved.name, resolved.version);
        if !resolved.description.is_empty() {
            println!("{}", resolved.description);
        }
        println!();

        if !result.written.is_empty() {
            println!("Written:");
            for path in &result.written {
                println!("  + {path}");
            }
        }
        if !result.skipped.is_empty() {
            println!();
            println!("Kept (already present):");
            for path in &result.skipped {
                println!("  = {path}");
            }
        }

        Ok(())
    }
}
