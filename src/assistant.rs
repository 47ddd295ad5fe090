// File: ./src/assistant.rs
// Turns one line of user input into a task-list change and a reply
use crate::command::{self, CommandKind, ParsedCommand};
use crate::error::{CommandError, StorageError};
use crate::model::adapter::FIELD_DELIMITER;
use crate::model::parser::{parse_deadline, parse_event};
use crate::model::{Task, TaskList};
use crate::storage::LocalStorage;
use std::fmt;
use tracing::{debug, error, warn};

pub const GREETING: &str = "Hello! I'm Robert.\nWhat can I do for you, sir?";
pub const FAREWELL: &str = "Bye. Hope to see you again soon!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Reply,
    Error,
    /// The session should end after showing this text.
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub kind: ResponseKind,
    pub text: String,
}

impl Response {
    fn reply(text: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Reply,
            text: text.into(),
        }
    }

    fn error(err: &CommandError) -> Self {
        Self {
            kind: ResponseKind::Error,
            text: err.to_string(),
        }
    }

    pub fn is_exit(&self) -> bool {
        self.kind == ResponseKind::Exit
    }

    pub fn is_error(&self) -> bool {
        self.kind == ResponseKind::Error
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Owns the task list and its backing file for the whole session.
pub struct Assistant {
    tasks: TaskList,
    storage: LocalStorage,
    load_error: Option<StorageError>,
}

impl Assistant {
    /// Loads the saved tasks. A failed load is logged and leaves the
    /// assistant with an empty list instead of failing.
    pub fn new(storage: LocalStorage) -> Self {
        let (tasks, load_error) = match storage.load() {
            Ok(tasks) => (tasks, None),
            Err(e) => {
                error!(error = %e, "failed to load tasks, starting with an empty list");
                (TaskList::new(), Some(e))
            }
        };
        Self {
            tasks,
            storage,
            load_error,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    pub fn load_error(&self) -> Option<&StorageError> {
        self.load_error.as_ref()
    }

    pub fn startup_message(&self) -> String {
        match &self.load_error {
            Some(e) => format!(
                "I am afraid there was an error loading your tasks: {}\nStarting with an empty list.\n{}",
                e, GREETING
            ),
            None => GREETING.to_string(),
        }
    }

    pub fn respond(&mut self, input: &str) -> Response {
        let command = command::parse(input);
        debug!(kind = ?command.kind, args = command.args, "dispatching command");
        match self.execute(command) {
            Ok(response) => response,
            Err(e) => {
                debug!(error = %e, "command failed");
                Response::error(&e)
            }
        }
    }

    fn execute(&mut self, command: ParsedCommand<'_>) -> Result<Response, CommandError> {
        let args = command.args;
        match command.kind {
            CommandKind::List => Ok(self.list()),
            CommandKind::Bye => Ok(Response {
                kind: ResponseKind::Exit,
                text: FAREWELL.to_string(),
            }),
            CommandKind::Todo => {
                if args.is_empty() {
                    return Err(CommandError::EmptyDescription("todo"));
                }
                reject_delimiter(&[args])?;
                self.add(Task::todo(args))
            }
            CommandKind::Deadline => {
                if args.is_empty() {
                    return Err(CommandError::EmptyDescription("deadline"));
                }
                let parsed = parse_deadline(args)?;
                reject_delimiter(&[parsed.description])?;
                let task =
                    Task::deadline(parsed.description, parsed.by).map_err(CommandError::InvalidDate)?;
                self.add(task)
            }
            CommandKind::Event => {
                if args.is_empty() {
                    return Err(CommandError::EmptyDescription("event"));
                }
                let parsed = parse_event(args)?;
                reject_delimiter(&[parsed.description, parsed.from, parsed.to])?;
                self.add(Task::event(parsed.description, parsed.from, parsed.to))
            }
            CommandKind::Mark => {
                let index = self.task_index(args, "mark")?;
                self.set_done(index, true)
            }
            CommandKind::Unmark => {
                let index = self.task_index(args, "unmark")?;
                self.set_done(index, false)
            }
            CommandKind::Delete => {
                let index = self.task_index(args, "delete")?;
                self.delete(index)
            }
            CommandKind::Find => self.find(args),
            CommandKind::Sort => self.sort(),
            CommandKind::Empty => Err(CommandError::EmptyCommand),
            CommandKind::Unknown => Err(CommandError::UnknownCommand),
        }
    }

    /// Validates a 1-based task number and returns the 0-based index.
    fn task_index(&self, arg: &str, action: &'static str) -> Result<usize, CommandError> {
        if arg.is_empty() {
            return Err(CommandError::MissingTaskNumber(action));
        }
        let number: i64 = arg
            .parse()
            .map_err(|_| CommandError::NotANumber(arg.to_string()))?;
        let len = self.tasks.len();
        if number < 1 || number as u64 > len as u64 {
            return Err(CommandError::OutOfRange { number, len });
        }
        Ok((number - 1) as usize)
    }

    /// The list is already mutated when this runs; a failed save does not
    /// undo it.
    fn persist(&self) -> Result<(), CommandError> {
        self.storage.save(&self.tasks).map_err(|e| {
            warn!(error = %e, "save failed, in-memory list keeps the change");
            CommandError::Save(e)
        })
    }

    fn list(&self) -> Response {
        if self.tasks.is_empty() {
            return Response::reply("Your list is empty, sir.");
        }
        Response::reply(format!(
            "Here are the tasks in your list:\n{}",
            numbered(&self.tasks)
        ))
    }

    fn add(&mut self, task: Task) -> Result<Response, CommandError> {
        let rendered = task.to_string();
        self.tasks.add(task);
        self.persist()?;
        Ok(Response::reply(format!(
            "Certainly, sir. I have added this task:\n  {}\n{}",
            rendered,
            count_line(self.tasks.len())
        )))
    }

    fn set_done(&mut self, index: usize, done: bool) -> Result<Response, CommandError> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .map_err(|_| CommandError::OutOfRange {
                number: index as i64 + 1,
                len,
            })?;
        if done {
            task.mark_done();
        } else {
            task.mark_not_done();
        }
        let rendered = task.to_string();
        self.persist()?;
        let header = if done {
            "Very good, sir. I have marked this task as done:"
        } else {
            "Understood, sir. I have marked this task as not done yet:"
        };
        Ok(Response::reply(format!("{}\n  {}", header, rendered)))
    }

    fn delete(&mut self, index: usize) -> Result<Response, CommandError> {
        let len = self.tasks.len();
        let removed = self
            .tasks
            .remove(index)
            .map_err(|_| CommandError::OutOfRange {
                number: index as i64 + 1,
                len,
            })?;
        self.persist()?;
        Ok(Response::reply(format!(
            "As you wish, sir. I have removed this task:\n  {}\n{}",
            removed,
            count_line(self.tasks.len())
        )))
    }

    fn find(&self, keyword: &str) -> Result<Response, CommandError> {
        if keyword.is_empty() {
            return Err(CommandError::EmptyKeyword);
        }
        let matches = self.tasks.find(keyword);
        if matches.is_empty() {
            return Ok(Response::reply(format!(
                "I am afraid no tasks match '{}', sir.",
                keyword
            )));
        }
        Ok(Response::reply(format!(
            "Here are the matching tasks in your list:\n{}",
            numbered(matches)
        )))
    }

    fn sort(&mut self) -> Result<Response, CommandError> {
        let sorted = self.tasks.sorted();
        self.tasks.replace_all(sorted);
        self.persist()?;
        if self.tasks.is_empty() {
            return Ok(Response::reply("There is nothing to sort, sir."));
        }
        Ok(Response::reply(format!(
            "Your tasks are now sorted, sir:\n{}",
            numbered(&self.tasks)
        )))
    }
}

/// The data file has no escaping, so stored fields must not contain the
/// delimiter.
fn reject_delimiter(fields: &[&str]) -> Result<(), CommandError> {
    if fields.iter().any(|f| f.contains(FIELD_DELIMITER)) {
        return Err(CommandError::ReservedCharacter);
    }
    Ok(())
}

/// One `N.<task>` line per task, numbered from 1.
fn numbered<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    tasks
        .into_iter()
        .enumerate()
        .map(|(i, t)| format!("{}.{}", i + 1, t))
        .collect::<Vec<_>>()
        .join("\n")
}

fn count_line(len: usize) -> String {
    let noun = if len == 1 { "task" } else { "tasks" };
    format!("Now you have {} {} in the list.", len, noun)
}
