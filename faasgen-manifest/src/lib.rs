//! Configuration parsing and function manifest assembly for faasgen.
//!
//! This crate owns the faasgen.toml project configuration (parsing,
//! validation, and defaulting into an immutable [`ResolvedConfig`]), the
//! npm dependency-declaration parser, and the [`FunctionManifest`] document
//! written into the scaffolded function as its package.json.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
pub mod deps;
mod error;
mod function;

pub use config::{
    DEFAULT_AUTHOR, DEFAULT_FUNC_DIR, DEFAULT_HANDLER, DEFAULT_LICENSE, DEFAULT_WATCHDOG_TAG,
    DockerSection, FunctionSection, ProjectConfig, ProjectSection, ResolvedConfig,
};
pub use deps::{ANY_VERSION, DependencyMap};
pub use error::{Error, Result};
pub use function::FunctionManifest;
