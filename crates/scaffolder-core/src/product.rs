//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a product binary implements to tell the
//! scaffolder what a project of that product looks like.

use crate::templates::TemplateManifest;
use std::path::{Path, PathBuf};

/// Configuration trait for scaffolding products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - The template manifest (what gets copied and created)
/// - The README written into projects that lack one
/// - Post-setup instructions
pub trait ProductConfig {
    /// Internal product name (used as a fallback project name)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Files and directories that make up a project
    fn manifest(&self) -> TemplateManifest;

    /// Default README content for a project without one
    fn readme(&self, project_name: &str) -> String;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path) -> Vec<String>;

    /// Labelled locations worth pointing the user at once setup is done
    fn highlights(&self, _dir: &Path) -> Vec<(String, PathBuf)> {
        Vec::new()
    }
}
