use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use faasgen_core::GeneratedFile;
use faasgen_manifest::ProjectConfig;
use faasgen_scaffold::{Generator, files::FaasgenToml};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InitCommand {
    /// Project name (defaults to current directory)
    #[arg(default_value = ".")]
    pub name: String,

    /// Output directory (defaults to ./<name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let (project_name, output_dir) = Self::resolve_paths(&self.name, self.output.clone())?;

        // Create faasgen.toml (left untouched if one already exists)
        FaasgenToml::new(&project_name)
            .write(&output_dir)
            .wrap_err("Failed to write faasgen.toml")?;

        // Scaffold the project from the configuration on disk, so a
        // pre-existing faasgen.toml drives generation rather than defaults.
        let config = ProjectConfig::from_file(output_dir.join("faasgen.toml")).unwrap_or_exit();
        let resolved = config.resolve();

        let result = Generator::new(&resolved)
            .generate(&output_dir)
            .wrap_err("Failed to scaffold project")?;

        println!(
            "Created OpenFaaS function project in {}",
            output_dir.display()
        );
        for path in &result.written {
            println!("  + {path}");
        }
        println!();
        println!("Next steps:");
        if output_dir != Path::new(".") {
            println!("  cd {}", output_dir.display());
        }
        println!(
            "  edit {}/{}",
            resolved.func_dir, resolved.func_handler
        );
        println!("  docker build -t {} .", resolved.name);

        Ok(())
    }

    fn resolve_paths(name: &str, output: Option<PathBuf>) -> Result<(String, PathBuf)> {
        if name == "." {
            let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
            let dir_name = cwd
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| eyre::eyre!("Current directory has no valid name"))?
                .to_string();
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            Ok((dir_name, output_dir))
        } else {
            let output_dir = output.unwrap_or_else(|| PathBuf::from(name));
            Ok((name.to_string(), output_dir))
        }
    }
}
