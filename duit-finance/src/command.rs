//! Slash-command tokenizer: "/catat masuk 5jt gaji" becomes command
//! "catat" with args ["masuk", "5jt", "gaji"].

use serde::{Deserialize, Serialize};

pub const COMMAND_MARKER: char = '/';

/// A tokenized slash command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Lower-cased name without the marker. Empty for a bare "/".
    pub command: String,
    /// Remaining tokens, original case and order
    pub args: Vec<String>,
}

impl CommandRequest {
    /// Args joined back with single spaces
    pub fn rest(&self) -> String {
        self.args.join(" ")
    }
}

/// Tokenize `message` if it is a command, `None` otherwise.
pub fn parse_command(message: &str) -> Option<CommandRequest> {
    let body = message.trim().strip_prefix(COMMAND_MARKER)?;

    let (name, rest) = body.split_once(char::is_whitespace).unwrap_or((body, ""));

    Some(CommandRequest {
        command: name.to_lowercase(),
        args: rest.split_whitespace().map(str::to_string).collect(),
    })
}
