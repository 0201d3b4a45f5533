//! Post-parse validation of the project configuration.

use super::ProjectConfig;
use crate::{Result, error::SourceContext};

/// Validate the configuration after parsing.
pub(super) fn validate_config(config: &ProjectConfig, ctx: &SourceContext) -> Result<()> {
    if config.project.name.trim().is_empty() {
        return Err(ctx.validation_error("project name must not be empty"));
    }

    if let Some(dir) = &config.function.dir {
        validate_func_dir(dir, ctx)?;
    }

    if let Some(handler) = &config.function.handler {
        validate_handler(handler, ctx)?;
    }

    if let Some(tag) = &config.docker.watchdog_tag
        && tag.trim().is_empty()
    {
        return Err(ctx.validation_error("docker watchdog-tag must not be empty"));
    }

    Ok(())
}

/// The function directory must be a single relative path component so it
/// nests under the output root.
fn validate_func_dir(dir: &str, ctx: &SourceContext) -> Result<()> {
    if dir.is_empty() {
        return Err(ctx.validation_error("function dir must not be empty"));
    }
    if dir == "." || dir == ".." {
        return Err(ctx.validation_error(format!(
            "function dir '{dir}' must name a subdirectory of the output root"
        )));
    }
    if dir.contains('/') || dir.contains('\\') {
        return Err(ctx.validation_error(format!(
            "function dir '{dir}' must be a single path component"
        )));
    }
    Ok(())
}

/// The handler must be a bare file name; it is joined onto the function dir
/// and embedded into the template descriptor's fprocess command.
fn validate_handler(handler: &str, ctx: &SourceContext) -> Result<()> {
    if handler.is_empty() {
        return Err(ctx.validation_error("function handler must not be empty"));
    }
    if handler.contains('/') || handler.contains('\\') {
        return Err(ctx.validation_error(format!(
            "function handler '{handler}' must be a bare file name"
        )));
    }
    Ok(())
}
