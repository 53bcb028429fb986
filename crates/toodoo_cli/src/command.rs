//! Command vocabulary of the interactive loop.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One recognized command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    List,
    Toggle,
    Delete,
    Exit,
}

/// Input that is not part of the command vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl Display for UnknownCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown command `{}`", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    /// Matches after trimming whitespace and ASCII case-folding.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "list" => Ok(Self::List),
            "toggle" => Ok(Self::Toggle),
            "delete" => Ok(Self::Delete),
            "exit" => Ok(Self::Exit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

/// Parses a user-entered 1-based index. Non-integers yield `None`.
pub fn parse_index(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}
