use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use faasgen_manifest::ProjectConfig;
use faasgen_scaffold::Generator;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct PreviewCommand {
    /// Path to faasgen.toml (defaults to ./faasgen.toml)
    #[arg(short, long, default_value = "faasgen.toml")]
    pub config: PathBuf,

    /// Only list file paths, without content
    #[arg(long)]
    pub paths: bool,
}

impl PreviewCommand {
    pub fn run(&self) -> Result<()> {
        let config = ProjectConfig::from_file(&self.config).unwrap_or_exit();
        let resolved = config.resolve();

        let files = Generator::new(&resolved).preview();

        if self.paths {
            for file in &files {
                println!("{}", file.path);
            }
            return Ok(());
        }

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
