//! The contact form, a local simulation only. Submission validates
//! non-emptiness and sets a transient status line; nothing is ever
//! transmitted anywhere.

use std::time::{Duration, Instant};

pub const REJECTED_MESSAGE: &str = "Please fill all fields";
pub const ACCEPTED_MESSAGE: &str = "Message sent successfully! ✅";

/// How long an acceptance status stays visible
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Message => "Your Message",
        }
    }

    pub fn next(&self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }
}

/// Result of one submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected,
}

/// Tone of the visible status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Ok,
    Err,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Idle,
    Rejected,
    Accepted { clear_at: Instant },
}

/// Idle until submitted; a submit validates the three fields and lands
/// in Rejected (fields untouched) or Accepted (fields cleared, status
/// scheduled to clear). Time is injected so the machine never sleeps.
#[derive(Debug, Clone)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    status: Status,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            status: Status::Idle,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn push(&mut self, field: Field, ch: char) {
        self.field_mut(field).push(ch);
    }

    pub fn backspace(&mut self, field: Field) {
        self.field_mut(field).pop();
    }

    /// Validate and settle. Rejection leaves every field as typed;
    /// acceptance clears them and schedules the status to clear.
    pub fn submit(&mut self, now: Instant) -> Outcome {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            self.status = Status::Rejected;
            return Outcome::Rejected;
        }

        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.status = Status::Accepted { clear_at: now + STATUS_CLEAR_DELAY };
        Outcome::Accepted
    }

    /// Clear an expired acceptance status. A rejection stays visible
    /// until the next submit attempt replaces it.
    pub fn tick(&mut self, now: Instant) {
        if let Status::Accepted { clear_at } = self.status {
            if now >= clear_at {
                self.status = Status::Idle;
            }
        }
    }

    pub fn status_line(&self) -> Option<(&'static str, StatusKind)> {
        match self.status {
            Status::Idle => None,
            Status::Rejected => Some((REJECTED_MESSAGE, StatusKind::Err)),
            Status::Accepted { .. } => Some((ACCEPTED_MESSAGE, StatusKind::Ok)),
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
