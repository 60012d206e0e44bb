//! Scaffolder Core - Shared library for project setup CLIs
//!
//! This library materializes a new project from a local template tree: it
//! copies a fixed set of files and directories, creates empty workspace
//! folders and writes a default README when the project has none. Product
//! binaries describe their layout through the `ProductConfig` trait and reuse
//! the same scaffolding logic.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template manifest and file/tree copying
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and `ProjectScaffolder`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based front end (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based front end
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{ProjectScaffolder, StdinPrompt};
//!
//! let scaffolder = ProjectScaffolder::new(MyConfig, "/path/to/template");
//! let result = scaffolder.run("my-project", &mut StdinPrompt)?;
//! std::process::exit(if result.is_success() { 0 } else { 1 });
//! ```

pub mod error;
pub mod product;
pub mod prompt;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use prompt::{is_affirmative, AutoConfirm, Prompt, StdinPrompt};
pub use scaffold::{ItemKind, ItemOutcome, ItemStatus, ProjectScaffolder, ScaffoldResult};
pub use templates::{copy_directory_tree, copy_file, TemplateManifest};

#[cfg(feature = "tui")]
pub use tui::run;
