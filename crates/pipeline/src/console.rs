//! Line-based console abstraction.
//!
//! Every prompt in the pipeline goes through the `Console` trait so the whole
//! interactive flow can be driven by scripted input in tests. The production
//! implementation over stdin/stdout lives in the cli crate.

use anyhow::Result;
use std::collections::VecDeque;

/// Bidirectional line console.
pub trait Console {
    /// Show a prompt and read one line of operator input.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Ask a yes/no question until the operator answers one or the other.
///
/// Matching is case-insensitive. Anything else prints a correction and asks
/// again; an explicit loop rather than recursion, so a pathological stream of
/// bad answers cannot grow the stack.
pub fn ask_yes_no(console: &mut dyn Console, question: &str) -> Result<bool> {
    loop {
        let answer = console.read_line(question)?;
        match answer.trim().to_lowercase().as_str() {
            "yes" => return Ok(true),
            "no" => return Ok(false),
            _ => console.write_line("Invalid input. Please enter yes or no.")?,
        }
    }
}

/// Console fed from a fixed script of answers, recording everything shown.
///
/// Used by the test suites; prompts and output lines both land in
/// `transcript` so tests can assert on what the operator saw.
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            transcript: Vec::new(),
        }
    }

    /// True if some transcript line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    /// How many transcript lines contain `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.transcript
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.transcript.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted at prompt: {prompt}"))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }
}
