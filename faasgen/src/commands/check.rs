use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use faasgen_manifest::ProjectConfig;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to faasgen.toml (defaults to ./faasgen.toml)
    #[arg(short, long, default_value = "faasgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let config = ProjectConfig::from_file(&self.config).unwrap_or_exit();
        let resolved = config.resolve();

        println!("{} is valid", self.config.display());
        println!();
        println!("{} v{}", resolved.name, resolved.version);
        println!("  function dir: {}", resolved.func_dir);
        println!("  handler:      {}", resolved.func_handler);
        println!("  watchdog:     openfaas/of-watchdog:{}", resolved.watchdog_tag);
        println!(
            "  dependencies: {} runtime, {} dev, {} peer",
            resolved.dependencies.len(),
            resolved.dev_dependencies.len(),
            resolved.peer_dependencies.len()
        );

        Ok(())
    }
}
