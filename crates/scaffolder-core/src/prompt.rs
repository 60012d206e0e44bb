//! Yes/no confirmation used before writing into a non-empty target
//!
//! The scaffolder only ever asks one question, so the seam is a single
//! `ask` call returning the raw answer. Any closure with the right shape is a
//! prompt, which lets tests hand in canned answers.

use std::io::{self, BufRead, Write};

/// Source of answers to interactive questions
pub trait Prompt {
    /// Ask a question and return the raw answer text
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

impl<F> Prompt for F
where
    F: FnMut(&str) -> io::Result<String>,
{
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self(question)
    }
}

/// Reads one line from standard input after printing the question
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{} ", question)?;
        stdout.flush()?;

        let mut answer = String::new();
        let read = io::stdin().lock().read_line(&mut answer)?;
        if read == 0 {
            // EOF: nobody is there to confirm
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no answer on standard input",
            ));
        }

        Ok(answer)
    }
}

/// Answers yes without asking (non-interactive mode)
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

impl Prompt for AutoConfirm {
    fn ask(&mut self, _question: &str) -> io::Result<String> {
        Ok("y".to_string())
    }
}

/// Only `y` and `yes` (any case, surrounding whitespace ignored) mean yes
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
