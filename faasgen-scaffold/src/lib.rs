//! OpenFaaS Node.js project scaffolding for faasgen.
//!
//! This crate turns a resolved project configuration into the set of
//! artifacts an OpenFaaS Node.js function template needs:
//!
//! - `<funcDir>/package.json` - function manifest (create-once)
//! - `<funcDir>/<handler>` - sample handler (create-once)
//! - `package.json` - wrapper manifest with the bootstrap's own
//!   dependencies (create-once)
//! - `index.js` - express HTTP bootstrap (create-once)
//! - `Dockerfile` - of-watchdog multi-stage build (create-once)
//! - `template.yml` - OpenFaaS template descriptor (regenerated)
//! - `.dockerignore` - build-context exclusions (regenerated)
//!
//! # Usage
//!
//! ```ignore
//! use faasgen_manifest::ResolvedConfig;
//! use faasgen_scaffold::Generator;
//! use std::path::Path;
//!
//! let config = ResolvedConfig::new("my-function");
//! let generator = Generator::new(&config);
//!
//! // Plan files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("output"))?;
//! ```

mod generator;

pub mod files;

pub use generator::{GenerateResult, Generator, PreviewFile};
