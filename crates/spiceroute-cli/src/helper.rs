//! rustyline helper shared by the interactive modes.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Completes, hints and highlights the given command words.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
    prefix: Option<char>,
}

impl CliHelper {
    /// Commands typed as bare words (`next`, `toggle`, ...).
    pub fn words(commands: &[&str]) -> Self {
        Self {
            commands: commands.iter().map(|c| c.to_string()).collect(),
            prefix: None,
        }
    }

    /// Commands introduced by `/` so that anything else is free text.
    pub fn slash(commands: &[&str]) -> Self {
        Self {
            commands: commands.iter().map(|c| format!("/{}", c)).collect(),
            prefix: Some('/'),
        }
    }

    fn is_command_input(&self, line: &str) -> bool {
        match self.prefix {
            Some(prefix) => line.starts_with(prefix),
            None => !line.is_empty(),
        }
    }

    fn matching<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a String> + 'a {
        self.commands.iter().filter(move |cmd| cmd.starts_with(line))
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !self.is_command_input(line) || line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates = self
            .matching(line)
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let first = line.split_whitespace().next().unwrap_or_default();
        if self.commands.iter().any(|cmd| cmd == first) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !self.is_command_input(line) || line.contains(' ') {
            return None;
        }
        self.matching(line)
            .find(|cmd| cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for CliHelper {}
