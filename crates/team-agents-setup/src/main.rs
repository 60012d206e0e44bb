//! Engineering Team Agents - New project setup
//!
//! Copies the engineering team agents structure into a new project, creating
//! the folders and files needed for collaborative AI development.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use scaffolder_core::tui::SetupArgs;
use scaffolder_core::{ProductConfig, ScaffoldError, TemplateManifest};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Placeholder replaced with the project name in the generated README
const PROJECT_NAME_PLACEHOLDER: &str = "{project_name}";

const README_TEMPLATE: &str = r#"# {project_name}

## Engineering Team Agents Setup

This project includes collaborative AI engineering agents for:
- 🏗️  **Architecture Review** - System design and technical decisions
- 🔍 **Code Quality** - Security-first code review and quality validation
- 📋 **Product Management** - Requirements clarification and business value
- 🎨 **UX Design** - User journey mapping and accessibility validation
- 🤖 **Responsible AI** - Bias prevention and ethical AI development
- 🚀 **DevOps** - CI/CD optimization and deployment automation

## Quick Start

### GitHub Copilot Users
Use chatmode commands for collaborative development:
- `/architecture-review` - Validate system design decisions
- `/code-quality` - Review code for security and quality
- `/pm-requirements` - Clarify business requirements
- `/ui-validation` - Validate user experience design
- `/responsible-ai` - Ensure ethical AI development
- `/cicd-optimization` - Optimize deployment processes

### Claude Users
Access specialized agents in the `.claude/agents/` directory for expert guidance.

## Development Workflow

1. **Requirements First**: Start with `/pm-requirements` to clarify user needs
2. **Design Review**: Use `/architecture-review` for technical decisions
3. **Implementation**: Follow `/code-quality` guidance for secure, maintainable code
4. **User Experience**: Validate with `/ui-validation` for user-facing features
5. **Deployment**: Optimize with `/cicd-optimization` for reliable releases

## Documentation

All agent interactions create persistent documentation in:
- `docs/product/` - Requirements and user stories
- `docs/architecture/` - Architecture Decision Records (ADRs)
- `docs/code-review/` - Code review reports
- `docs/ux/` - User journey maps and accessibility reports
- `docs/responsible-ai/` - Responsible AI documentation
- `docs/gitops/` - Deployment guides and operational runbooks

---

*Generated by Engineering Team Agents setup*
"#;

/// Engineering Team Agents product configuration
pub struct AgentsConfig;

impl ProductConfig for AgentsConfig {
    fn name(&self) -> &'static str {
        "team-agents"
    }

    fn display_name(&self) -> &'static str {
        "Engineering Team Agents"
    }

    fn manifest(&self) -> TemplateManifest {
        TemplateManifest::new()
            .required(["AGENTS.md", ".github", "docs"])
            .files(["AGENTS.md", "CONTRIBUTING.md", "LICENSE"])
            .directories([".github", ".claude", "docs"])
            // Projects might already have their own README
            .optional_files(["README.md"])
            .workspace_directories([
                "src",
                "tests",
                "docs/product",
                "docs/architecture",
                "docs/code-review",
                "docs/ux",
                "docs/responsible-ai",
                "docs/gitops",
            ])
    }

    fn readme(&self, project_name: &str) -> String {
        README_TEMPLATE.replace(PROJECT_NAME_PLACEHOLDER, project_name)
    }

    fn next_steps(&self, dir: &Path) -> Vec<String> {
        vec![
            format!("cd {}", dir.display()),
            "Initialize your git repository: git init".to_string(),
            "Start using agent chatmodes for collaborative development!".to_string(),
        ]
    }

    fn highlights(&self, dir: &Path) -> Vec<(String, PathBuf)> {
        vec![
            ("📚 Documentation".to_string(), dir.join("docs")),
            (
                "🤖 GitHub Copilot Agents".to_string(),
                dir.join(".github").join("chatmodes"),
            ),
            (
                "🧠 Claude Agents".to_string(),
                dir.join(".claude").join("agents"),
            ),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "team-agents-setup")]
#[command(about = "Set up a new project with Engineering Team Agents")]
#[command(version)]
#[command(after_help = "Examples:\n    \
    team-agents-setup my_new_project\n    \
    team-agents-setup projects/my_new_project\n    \
    team-agents-setup /path/to/my_new_project\n    \
    team-agents-setup my_new_project --source /path/to/engineering-team-agents")]
pub struct Args {
    /// Path where the new project should be created
    pub target_path: Option<PathBuf>,

    /// Source directory containing the engineering team agents (default: directory of this executable)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C counts as a cancellation
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        eprintln!("\n{}", "❌ Setup cancelled by user".red());
        std::process::exit(1);
    })
    .ok();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let Some(target) = args.target_path else {
        let _ = Args::command().print_help();
        return ExitCode::FAILURE;
    };

    let result = setup(target, args.source, args.yes);

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{} {:#}", "❌ Unexpected error:".red(), err);
            ExitCode::FAILURE
        }
    }
}

fn setup(target: PathBuf, source: Option<PathBuf>, yes: bool) -> Result<bool> {
    let source = match source {
        Some(path) => scaffolder_core::scaffold::resolve_path(&path)
            .with_context(|| format!("Invalid source path: {}", path.display()))?,
        None => default_source_dir()?,
    };

    if !source.is_dir() {
        eprintln!(
            "{} {}",
            "❌ Error:".red(),
            ScaffoldError::SourceNotFound(source)
        );
        return Ok(false);
    }

    scaffolder_core::run(AgentsConfig, SetupArgs { target, source, yes })
}

/// The agents structure ships alongside the executable
fn default_source_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let exe = std::fs::canonicalize(&exe).unwrap_or(exe);
    exe.parent()
        .map(Path::to_path_buf)
        .context("Executable has no parent directory")
}
