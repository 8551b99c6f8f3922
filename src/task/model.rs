//! Task data model

use chrono::NaiveDateTime;
use std::fmt;

use super::datetime::{to_canonical_string, to_display_string};
use super::error::{Result, TaskError};

/// Field separator in the datafile.
pub const FIELD_SEPARATOR: char = '|';

/// Completion flag written for finished tasks.
pub const COMPLETED_FLAG: &str = "T";

/// Completion flag written for unfinished tasks. Readers accept any token
/// other than [`COMPLETED_FLAG`].
pub const PENDING_FLAG: &str = "-";

/// The kind of a task and its kind-specific times. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline {
        by: NaiveDateTime,
    },
    Event {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
}

impl TaskKind {
    /// Single-letter identifier used in the datafile and on screen
    pub fn letter(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Deadline { .. } => "deadline",
            Self::Event { .. } => "event",
        }
    }
}

/// A tracked task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    completed: bool,
    kind: TaskKind,
}

impl Task {
    /// Create a todo with no associated time
    pub fn todo(description: impl Into<String>) -> Result<Self> {
        Self::new(description.into(), TaskKind::Todo)
    }

    /// Create a task that must be done by `by`
    pub fn deadline(description: impl Into<String>, by: NaiveDateTime) -> Result<Self> {
        Self::new(description.into(), TaskKind::Deadline { by })
    }

    /// Create an event running from `from` to `to`.
    ///
    /// The range is not checked here; see [`Task::completed`].
    pub fn event(
        description: impl Into<String>,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Self> {
        Self::new(description.into(), TaskKind::Event { from, to })
    }

    fn new(description: String, kind: TaskKind) -> Result<Self> {
        Self::from_parts(description.trim().to_string(), kind)
    }

    /// Build a task keeping `description` exactly as given. Used by the
    /// datafile parser so stored text comes back unchanged.
    pub(crate) fn from_parts(description: String, kind: TaskKind) -> Result<Self> {
        if description.trim().is_empty() {
            return Err(TaskError::invalid("The description of a task cannot be empty."));
        }
        if description.contains(FIELD_SEPARATOR) || description.contains('\n') {
            return Err(TaskError::invalid(format!(
                "Task descriptions cannot contain '{FIELD_SEPARATOR}' or line breaks."
            )));
        }

        Ok(Self {
            description,
            completed: false,
            kind,
        })
    }

    /// Consume a freshly built task and return it already marked complete.
    ///
    /// A completed event must not start after it ends.
    pub fn completed(mut self) -> Result<Self> {
        self.check_completable()?;
        self.completed = true;
        Ok(self)
    }

    /// Mark the task as done. Returns `false` if it already was.
    ///
    /// Fails for an event that starts after it ends, which could not be read
    /// back from the datafile once marked.
    pub fn mark_complete(&mut self) -> Result<bool> {
        if self.completed {
            return Ok(false);
        }
        self.check_completable()?;
        self.completed = true;
        Ok(true)
    }

    fn check_completable(&self) -> Result<()> {
        if let TaskKind::Event { from, to } = self.kind {
            if from > to {
                return Err(TaskError::State(format!(
                    "Event \"{}\" cannot be complete: it starts ({}) after it ends ({}).",
                    self.description,
                    to_display_string(&from),
                    to_display_string(&to)
                )));
            }
        }
        Ok(())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Datafile line for this task
    pub fn save(&self) -> String {
        let flag = if self.completed {
            COMPLETED_FLAG
        } else {
            PENDING_FLAG
        };
        let sep = FIELD_SEPARATOR;
        let mut line = format!("{}{sep}{flag}{sep}{}", self.kind.letter(), self.description);

        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => {
                line.push(sep);
                line.push_str(&to_canonical_string(by));
            }
            TaskKind::Event { from, to } => {
                line.push(sep);
                line.push_str(&to_canonical_string(from));
                line.push(sep);
                line.push_str(&to_canonical_string(to));
            }
        }

        line
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { 'X' } else { ' ' };
        write!(f, "[{}] [{}] {}", self.kind.letter(), mark, self.description)?;

        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by {} hrs)", to_display_string(by)),
            TaskKind::Event { from, to } => write!(
                f,
                " (from {} to {} hrs)",
                to_display_string(from),
                to_display_string(to)
            ),
        }
    }
}
