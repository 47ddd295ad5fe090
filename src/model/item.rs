// File: ./src/model/item.rs
// Core task types and their display rendering
use crate::error::TaskError;
use chrono::NaiveDate;
use std::fmt;

/// Storage and display format for deadline dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%b %-d %Y";

/// The variant-specific payload of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: NaiveDate },
    Event { from: String, to: String },
}

impl TaskKind {
    /// Single-letter tag used both in the `[T]` prefix and on disk.
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TaskKind::Todo => "todo",
            TaskKind::Deadline { .. } => "deadline",
            TaskKind::Event { .. } => "event",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    fn with_kind(description: &str, kind: TaskKind) -> Self {
        Self {
            description: description.to_string(),
            done: false,
            kind,
        }
    }

    pub fn todo(description: &str) -> Self {
        Self::with_kind(description, TaskKind::Todo)
    }

    /// Builds a deadline from an ISO `YYYY-MM-DD` date. Calendar-invalid
    /// dates such as `2025-02-30` are rejected.
    pub fn deadline(description: &str, by: &str) -> Result<Self, TaskError> {
        Ok(Self::deadline_on(description, parse_date(by)?))
    }

    pub fn deadline_on(description: &str, by: NaiveDate) -> Self {
        Self::with_kind(description, TaskKind::Deadline { by })
    }

    pub fn event(description: &str, from: &str, to: &str) -> Self {
        Self::with_kind(
            description,
            TaskKind::Event {
                from: from.to_string(),
                to: to.to_string(),
            },
        )
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn type_tag(&self) -> char {
        self.kind.tag()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_not_done(&mut self) {
        self.done = false;
    }

    pub fn status_glyph(&self) -> &'static str {
        if self.done { "X" } else { " " }
    }

    /// The due date, for deadlines only.
    pub fn by(&self) -> Option<NaiveDate> {
        match self.kind {
            TaskKind::Deadline { by } => Some(by),
            _ => None,
        }
    }

    pub fn is_deadline(&self) -> bool {
        matches!(self.kind, TaskKind::Deadline { .. })
    }

    pub fn matches(&self, keyword: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}

/// Exactly four year digits, two month digits and two day digits.
/// chrono alone would also take `2025-1-1`, `+2025-01-01` or `25-01-01`.
fn is_iso_shaped(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, TaskError> {
    let trimmed = input.trim();
    let invalid = |source| TaskError::InvalidDate {
        input: input.to_string(),
        source,
    };
    if !is_iso_shaped(trimmed) {
        return Err(invalid(None));
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).map_err(|e| invalid(Some(e)))
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.type_tag(),
            self.status_glyph(),
            self.description
        )?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => {
                write!(f, " (by: {})", by.format(DISPLAY_DATE_FORMAT))
            }
            TaskKind::Event { from, to } => write!(f, " (from: {} to: {})", from, to),
        }
    }
}
