//! Charm-style CLI front end using cliclack

use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::prompt::{AutoConfirm, Prompt, StdinPrompt};
use crate::scaffold::ProjectScaffolder;
use anyhow::Result;
use std::io;
use std::path::PathBuf;

/// Arguments for one setup run
#[derive(Debug, Clone)]
pub struct SetupArgs {
    /// Project directory to create or fill
    pub target: PathBuf,

    /// Template source directory
    pub source: PathBuf,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Asks through a cliclack text input; an empty answer means no
#[derive(Debug, Default, Clone, Copy)]
pub struct ClackPrompt;

impl Prompt for ClackPrompt {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        cliclack::input(question)
            .placeholder("N")
            .default_input("N")
            .interact()
    }
}

/// Run one setup with cliclack framing.
///
/// Returns `Ok(true)` only when the run finished without a single failed item.
/// Cancellation and fatal scaffold errors are reported here and yield
/// `Ok(false)`; only terminal I/O failures surface as `Err`.
pub fn run<C: ProductConfig>(config: C, args: SetupArgs) -> Result<bool> {
    cliclack::intro(config.display_name())?;

    let mut prompt = select_prompt(args.yes)?;
    let scaffolder = ProjectScaffolder::new(config, &args.source);

    match scaffolder.run(&args.target, prompt.as_mut()) {
        Ok(result) if result.is_success() => {
            cliclack::outro("Happy coding!")?;
            Ok(true)
        }
        Ok(result) => {
            cliclack::log::warning(format!("Failed items: {}", result.failures().join(", ")))?;
            cliclack::outro_cancel(format!(
                "Setup finished with {} error(s)",
                result.errors
            ))?;
            Ok(false)
        }
        Err(ScaffoldError::Cancelled) => {
            cliclack::outro_cancel("Setup cancelled by user")?;
            Ok(false)
        }
        Err(e) => {
            cliclack::log::error(format!("{}", e))?;
            cliclack::outro_cancel("Setup failed")?;
            Ok(false)
        }
    }
}

fn select_prompt(yes: bool) -> Result<Box<dyn Prompt>> {
    if yes {
        cliclack::log::info("Auto-confirming prompts (--yes)")?;
        return Ok(Box::new(AutoConfirm));
    }

    if console::user_attended() {
        Ok(Box::new(ClackPrompt))
    } else {
        Ok(Box::new(StdinPrompt))
    }
}
