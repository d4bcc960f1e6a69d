//! User-facing notifications.
//!
//! Commands never fail loudly: a failure becomes a [`Message`] the host shows
//! however it likes.

use serde::{
  Deserialize,
  Serialize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageLevel {
  Info,
  Warning,
  Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
  pub level:  MessageLevel,
  /// Name of the command that produced the message.
  pub source: Option<String>,
  pub text:   String,
}

impl Message {
  pub fn error(source: Option<String>, text: impl Into<String>) -> Self {
    Self {
      level: MessageLevel::Error,
      source,
      text: text.into(),
    }
  }
}
