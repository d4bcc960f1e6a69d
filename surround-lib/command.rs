//! The commands a host exposes to its users.
//!
//! | Command             | Effect                                   |
//! |---------------------|------------------------------------------|
//! | `RmSurrounding`     | delete the pair opened under the cursor  |
//! | `ChSurrounding <c>` | replace it with the pair opened by `c`   |
//! | `SurroundLine <c>`  | wrap the current line in the pair of `c` |
//! | `SurroundWord <c>`  | wrap the word under the cursor           |
//!
//! Kebab-case aliases (`remove`, `change`, `wrap-line`, `wrap-word`) are
//! accepted too.
//!
//! [`run`] is what a host calls: it executes a command and turns a failure
//! into a [`Message`] instead of an error, leaving the buffer as it was.

use std::{
  fmt,
  str::FromStr,
};

use thiserror::Error;

use crate::{
  buffer::Buffer,
  messages::Message,
  surrounding::{
    self,
    Surrounding,
  },
  wrap::{
    wrap_line,
    wrap_word,
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  Remove,
  Change(char),
  WrapLine(char),
  WrapWord(char),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
  #[error("no command given")]
  Empty,
  #[error("unknown command '{0}'")]
  UnknownCommand(String),
  #[error("{command} takes a delimiter argument")]
  MissingArgument { command: &'static str },
  #[error("{command} takes no further arguments, got '{arg}'")]
  UnexpectedArgument { command: &'static str, arg: String },
  #[error("expected a single character, got '{0}'")]
  NotASingleCharacter(String),
}

impl Command {
  pub const fn name(&self) -> &'static str {
    match self {
      Self::Remove => "RmSurrounding",
      Self::Change(_) => "ChSurrounding",
      Self::WrapLine(_) => "SurroundLine",
      Self::WrapWord(_) => "SurroundWord",
    }
  }

  /// Runs the command against `buffer`.
  ///
  /// # Errors
  ///
  /// Any [`surrounding::Error`]; all of them are raised before the first
  /// write except buffer failures.
  pub fn execute<B: Buffer + ?Sized>(self, buffer: &mut B) -> surrounding::Result<()> {
    match self {
      Self::Remove => Surrounding::initialize(&*buffer)?.remove(buffer),
      Self::Change(open) => Surrounding::initialize(&*buffer)?.change(buffer, open),
      Self::WrapLine(open) => wrap_line(buffer, open),
      Self::WrapWord(open) => wrap_word(buffer, open),
    }
  }
}

impl fmt::Display for Command {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Remove => f.write_str(self.name()),
      Self::Change(ch) | Self::WrapLine(ch) | Self::WrapWord(ch) => {
        write!(f, "{} {ch}", self.name())
      },
    }
  }
}

fn single_char(arg: &str) -> Result<char, ParseCommandError> {
  let mut chars = arg.chars();
  match (chars.next(), chars.next()) {
    (Some(ch), None) => Ok(ch),
    _ => Err(ParseCommandError::NotASingleCharacter(arg.to_string())),
  }
}

impl FromStr for Command {
  type Err = ParseCommandError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut parts = s.split_whitespace();
    let name = parts.next().ok_or(ParseCommandError::Empty)?;

    let build: fn(char) -> Command = match name {
      "RmSurrounding" | "remove" => {
        return match parts.next() {
          None => Ok(Self::Remove),
          Some(arg) => {
            Err(ParseCommandError::UnexpectedArgument {
              command: Self::Remove.name(),
              arg:     arg.to_string(),
            })
          },
        };
      },
      "ChSurrounding" | "change" => Self::Change,
      "SurroundLine" | "wrap-line" => Self::WrapLine,
      "SurroundWord" | "wrap-word" => Self::WrapWord,
      other => return Err(ParseCommandError::UnknownCommand(other.to_string())),
    };
    let command = build(' ').name();

    let arg = parts
      .next()
      .ok_or(ParseCommandError::MissingArgument { command })?;
    if let Some(extra) = parts.next() {
      return Err(ParseCommandError::UnexpectedArgument {
        command,
        arg: extra.to_string(),
      });
    }
    Ok(build(single_char(arg)?))
  }
}

/// Executes `command`, returning an error-level message when it failed.
pub fn run<B: Buffer + ?Sized>(buffer: &mut B, command: Command) -> Option<Message> {
  match command.execute(buffer) {
    Ok(()) => {
      tracing::info!(%command, "command applied");
      None
    },
    Err(err) => {
      tracing::warn!(%command, %err, "command failed");
      Some(Message::error(Some(command.name().to_string()), err.to_string()))
    },
  }
}
