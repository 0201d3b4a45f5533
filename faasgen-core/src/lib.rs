//! Core utilities and types for the faasgen OpenFaaS function scaffolder.
//!
//! This crate provides the file-emission policy shared by every generated
//! artifact, plus fundamental types used across the faasgen workspace.

mod file;
mod version;

// File operations
pub use file::{GeneratedFile, Overwrite, WriteResult};
// Fundamental types
pub use version::Version;
