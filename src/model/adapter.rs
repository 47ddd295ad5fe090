// File: ./src/model/adapter.rs
// Handles the pipe-delimited line format used by the data file
use crate::error::RecordError;
use crate::model::item::{ISO_DATE_FORMAT, Task, TaskKind, parse_date};

pub const FIELD_DELIMITER: char = '|';

impl Task {
    /// Encodes this task as one data-file line (without the line separator).
    ///
    /// Pipes inside descriptions or event times are written as-is; the
    /// format has no escaping.
    pub fn to_line(&self) -> String {
        let done_flag = if self.is_done() { "1" } else { "0" };
        let mut fields = vec![
            self.type_tag().to_string(),
            done_flag.to_string(),
            self.description().to_string(),
        ];
        match self.kind() {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => fields.push(by.format(ISO_DATE_FORMAT).to_string()),
            TaskKind::Event { from, to } => {
                fields.push(from.clone());
                fields.push(to.clone());
            }
        }
        fields.join(&FIELD_DELIMITER.to_string())
    }

    /// Decodes one data-file line.
    ///
    /// Unknown tags, short rows and empty descriptions are `Malformed`; a
    /// deadline whose date does not parse is `InvalidDate`. Extra trailing
    /// fields are ignored.
    pub fn from_line(line: &str) -> Result<Self, RecordError> {
        let parts: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
        if parts.len() < 3 {
            return Err(RecordError::Malformed);
        }

        let description = parts[2];
        if description.is_empty() {
            return Err(RecordError::Malformed);
        }
        let mut task = match (parts[0], parts.len()) {
            ("T", _) => Task::todo(description),
            ("D", n) if n >= 4 => {
                let by = parse_date(parts[3]).map_err(RecordError::InvalidDate)?;
                Task::deadline_on(description, by)
            }
            ("E", n) if n >= 5 => Task::event(description, parts[3], parts[4]),
            _ => return Err(RecordError::Malformed),
        };

        if parts[1] == "1" {
            task.mark_done();
        }
        Ok(task)
    }
}
