//! Notification values emitted to the user after an operation.

use std::fmt;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

/// A user-facing notification: success toast or generic error banner.
///
/// Controllers return typed `Result`s; the view layer (the CLI handlers
/// here) maps outcomes to notifications and prints them. Errors carry a
/// generic message and never leak backend details to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: NotifyKind,
    message: String,
}

impl Notification {
    /// A success notification with the given message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotifyKind::Success,
            message: message.into(),
        }
    }

    /// The generic error notification shown for any failed operation.
    pub fn exception() -> Self {
        Self {
            kind: NotifyKind::Error,
            message: "An error occurred. Please try again.".to_string(),
        }
    }

    pub fn kind(&self) -> NotifyKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Prints the notification to stdout or stderr by severity.
    pub fn emit(&self) {
        match self.kind {
            NotifyKind::Success => println!("{}", self.message),
            NotifyKind::Error => eprintln!("{}", self.message),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
