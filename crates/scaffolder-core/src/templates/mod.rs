//! Template manifest and copying
//!
//! This module provides:
//! - The `TemplateManifest` describing which source entries make up a project
//! - File and directory-tree copying from a local template source

pub mod copier;
pub mod manifest;

pub use copier::{copy_directory_tree, copy_file};
pub use manifest::{TemplateManifest, DEFAULT_README};
