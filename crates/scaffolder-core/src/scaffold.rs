//! Project scaffolding from a local template source
//!
//! A run is a straight line with three early exits (invalid source, target
//! that cannot be prepared, user declining to write into a non-empty target)
//! followed by a best-effort phase where every item is attempted and counted
//! no matter what happened to the previous one.

use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::prompt::{is_affirmative, Prompt};
use crate::templates::{copier, TemplateManifest};
use colored::Colorize;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

const RULE_WIDTH: usize = 60;

/// What kind of entry an outcome refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    File,
    Directory,
}

/// What happened to a single manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    /// Copied from the source
    Copied,
    /// Created in the target (workspace directory, generated README)
    Created,
    /// Already present in the target and counted as done
    Kept,
    /// Optional entry already present in the target, left untouched
    SkippedExisting,
    /// Not present in the source; a warning, not an error
    MissingInSource,
    /// The operation failed with the given reason
    Failed(String),
}

/// Outcome of one manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub name: String,
    pub kind: ItemKind,
    pub status: ItemStatus,
}

impl ItemOutcome {
    fn label(&self) -> String {
        match self.kind {
            ItemKind::File => self.name.clone(),
            ItemKind::Directory => format!("{}/", self.name),
        }
    }

    fn print(&self) {
        let label = self.label();
        match &self.status {
            ItemStatus::Copied | ItemStatus::Created => {
                println!("   {} {}", "✅".green(), label)
            }
            ItemStatus::Kept => println!("   {} {} (kept existing)", "✅".green(), label),
            ItemStatus::SkippedExisting => println!(
                "   {} {}",
                "⏭️ ".blue(),
                format!("{} (already exists, skipping)", label).dimmed()
            ),
            ItemStatus::MissingInSource => println!(
                "   {} {}",
                "⚠️ ".yellow(),
                format!("{} (not found in source)", label).yellow()
            ),
            ItemStatus::Failed(reason) => println!(
                "   {} {} - {} {}",
                "❌".red(),
                label,
                "Error:".red(),
                reason
            ),
        }
    }
}

/// Counters and per-item log of one scaffold run
#[derive(Debug, Clone, Default)]
pub struct ScaffoldResult {
    /// Items copied, created or kept
    pub processed: usize,
    /// Items whose operation failed
    pub errors: usize,
    /// Every outcome, in the order the items were handled
    pub items: Vec<ItemOutcome>,
}

impl ScaffoldResult {
    /// A run succeeds only when no item failed
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    /// Latest recorded status for an item name
    pub fn status_of(&self, name: &str) -> Option<&ItemStatus> {
        self.items
            .iter()
            .rev()
            .find(|item| item.name == name)
            .map(|item| &item.status)
    }

    /// Names of items that failed
    pub fn failures(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| matches!(item.status, ItemStatus::Failed(_)))
            .map(|item| item.name.as_str())
            .collect()
    }

    fn record(&mut self, name: &str, kind: ItemKind, status: ItemStatus) {
        match status {
            ItemStatus::Copied | ItemStatus::Created | ItemStatus::Kept => self.processed += 1,
            ItemStatus::Failed(_) => self.errors += 1,
            ItemStatus::SkippedExisting | ItemStatus::MissingInSource => {}
        }

        let outcome = ItemOutcome {
            name: name.to_string(),
            kind,
            status,
        };
        outcome.print();
        self.items.push(outcome);
    }
}

/// Copies a template source into new project directories
pub struct ProjectScaffolder<C> {
    config: C,
    source: PathBuf,
    manifest: TemplateManifest,
}

impl<C: ProductConfig> ProjectScaffolder<C> {
    /// Create a scaffolder using the product's manifest
    pub fn new(config: C, source: impl Into<PathBuf>) -> Self {
        let manifest = config.manifest();
        Self {
            config,
            source: source.into(),
            manifest,
        }
    }

    /// Replace the manifest (alternate layouts, tests)
    pub fn with_manifest(mut self, manifest: TemplateManifest) -> Self {
        self.manifest = manifest;
        self
    }

    /// Check that every required item exists directly under the source
    pub fn validate_source(&self) -> Result<(), ScaffoldError> {
        if !self.source.is_dir() {
            return Err(ScaffoldError::SourceNotFound(self.source.clone()));
        }

        for item in &self.manifest.required_items {
            let expected = self.source.join(item);
            if !expected.exists() {
                return Err(ScaffoldError::MissingSourceItem {
                    item: item.clone(),
                    expected,
                });
            }
        }

        Ok(())
    }

    /// Create the target directory and any missing parents
    pub fn ensure_target_directory(&self, path: &Path) -> Result<(), ScaffoldError> {
        fs::create_dir_all(path).map_err(|source| ScaffoldError::TargetCreation {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Refuse targets where copying would destroy or recurse into the source
    pub fn check_overlap(&self, target: &Path) -> Result<(), ScaffoldError> {
        let source = fs::canonicalize(&self.source).unwrap_or_else(|_| self.source.clone());
        let target = resolve_path(target).unwrap_or_else(|_| target.to_path_buf());

        let overlaps = source == target
            || self.manifest.directories.iter().any(|dir| {
                source.starts_with(target.join(dir)) || target.starts_with(source.join(dir))
            });

        if overlaps {
            return Err(ScaffoldError::TargetOverlapsSource {
                source_dir: source,
                target,
            });
        }

        Ok(())
    }

    /// Copy files and directories and create the workspace layout.
    ///
    /// Never stops early: each item is attempted and counted on its own.
    pub fn build_structure(&self, target: &Path) -> ScaffoldResult {
        let mut result = ScaffoldResult::default();

        println!(
            "📁 Setting up {} in: {}",
            self.config.display_name(),
            target.display()
        );
        println!();

        println!("{}", "📄 Copying core files...".bold());
        for name in &self.manifest.files {
            let source = self.source.join(name);
            let status = if source.exists() {
                copy_status(copier::copy_file(&source, &target.join(name)))
            } else {
                ItemStatus::MissingInSource
            };
            result.record(name, ItemKind::File, status);
        }

        println!();
        println!("{}", "📄 Copying optional files...".bold());
        for name in &self.manifest.optional_files {
            let source = self.source.join(name);
            let dest = target.join(name);
            let status = if dest.exists() {
                ItemStatus::SkippedExisting
            } else if source.exists() {
                copy_status(copier::copy_file(&source, &dest))
            } else {
                ItemStatus::MissingInSource
            };
            result.record(name, ItemKind::File, status);
        }

        println!();
        println!("{}", "📁 Copying template directories...".bold());
        for name in &self.manifest.directories {
            let source = self.source.join(name);
            let status = if source.exists() {
                copy_status(copier::copy_directory_tree(&source, &target.join(name)))
            } else {
                ItemStatus::MissingInSource
            };
            result.record(name, ItemKind::Directory, status);
        }

        println!();
        println!("{}", "📁 Creating project workspace directories...".bold());
        for name in &self.manifest.workspace_directories {
            let status = match fs::create_dir_all(target.join(name)) {
                Ok(()) => ItemStatus::Created,
                Err(e) => ItemStatus::Failed(e.to_string()),
            };
            result.record(name, ItemKind::Directory, status);
        }

        result
    }

    /// Write the generated README unless the project already has one.
    ///
    /// Returns `Ok(true)` when a README was written and `Ok(false)` when an
    /// existing one was left alone.
    pub fn write_default_readme(&self, target: &Path, project_name: &str) -> io::Result<bool> {
        let path = target.join(&self.manifest.readme);
        if path.exists() {
            return Ok(false);
        }

        fs::write(&path, self.config.readme(project_name))?;
        Ok(true)
    }

    /// Scaffold a project at `target`.
    ///
    /// `prompt` is consulted only when the target already has entries.
    pub fn run(
        &self,
        target: impl AsRef<Path>,
        prompt: &mut dyn Prompt,
    ) -> Result<ScaffoldResult, ScaffoldError> {
        let requested = target.as_ref();
        let target = resolve_path(requested).map_err(|source| ScaffoldError::TargetCreation {
            path: requested.to_path_buf(),
            source,
        })?;
        let project = project_name(&target, self.config.name());

        println!(
            "{}",
            format!("🚀 {} - New Project Setup", self.config.display_name())
                .cyan()
                .bold()
        );
        println!("Source: {}", self.source.display());
        println!("Target: {}", target.display());
        println!("Project: {}", project);
        println!("{}", "=".repeat(RULE_WIDTH));

        self.validate_source()?;
        self.check_overlap(&target)?;
        self.ensure_target_directory(&target)?;

        let existing = fs::read_dir(&target)
            .map_err(|source| ScaffoldError::TargetCreation {
                path: target.clone(),
                source,
            })?
            .count();

        if existing > 0 {
            println!(
                "{} Target directory is not empty ({} items found)",
                "⚠️ ".yellow(),
                existing
            );
            let answer = prompt
                .ask("Continue anyway? (y/N):")
                .map_err(|_| ScaffoldError::Cancelled)?;
            if !is_affirmative(&answer) {
                return Err(ScaffoldError::Cancelled);
            }
        }

        let mut result = self.build_structure(&target);

        println!();
        println!("{}", "📄 Creating project README...".bold());
        let status = match self.write_default_readme(&target, &project) {
            Ok(true) => ItemStatus::Created,
            Ok(false) => ItemStatus::Kept,
            Err(e) => ItemStatus::Failed(e.to_string()),
        };
        result.record(&self.manifest.readme, ItemKind::File, status);

        self.print_summary(&target, &result);

        Ok(result)
    }

    fn print_summary(&self, target: &Path, result: &ScaffoldResult) {
        println!();
        println!("{}", "=".repeat(RULE_WIDTH));
        if result.is_success() {
            println!("{}", "✅ Setup completed!".green().bold());
        } else {
            println!("{}", "⚠️  Setup completed with errors".yellow().bold());
        }
        println!("   Successfully processed: {} items", result.processed);
        if result.errors > 0 {
            println!(
                "   {}",
                format!("Errors encountered: {} items", result.errors).red()
            );
        }

        let steps = self.config.next_steps(target);
        if !steps.is_empty() {
            println!();
            println!("{}", "🎯 Next steps:".bold());
            for (i, step) in steps.iter().enumerate() {
                println!("   {}. {}", i + 1, step);
            }
        }

        let highlights = self.config.highlights(target);
        if !highlights.is_empty() {
            println!();
            for (label, path) in highlights {
                println!("{}: {}", label, path.display());
            }
        }
    }
}

fn copy_status(outcome: anyhow::Result<()>) -> ItemStatus {
    match outcome {
        Ok(()) => ItemStatus::Copied,
        Err(e) => ItemStatus::Failed(format!("{:#}", e)),
    }
}

/// Absolute form of `path` with `.` and `..` folded away.
///
/// The longest existing prefix is canonicalized so symlinks resolve the same
/// way the filesystem sees them; the missing remainder is appended as is.
pub fn resolve_path(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    let mut existing = normalized.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return Ok(normalized),
        }
    }

    let mut resolved = fs::canonicalize(existing).unwrap_or_else(|_| existing.to_path_buf());
    for name in missing.iter().rev() {
        resolved.push(name);
    }

    Ok(resolved)
}

/// Final path segment, or `fallback` for a root path
pub fn project_name(target: &Path, fallback: &str) -> String {
    target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| fallback.to_string())
}
