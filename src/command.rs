// File: ./src/command.rs
// Classifies a raw input line into a command kind and its argument text

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    List,
    Bye,
    Mark,
    Unmark,
    Delete,
    Todo,
    Deadline,
    Event,
    Find,
    Sort,
    Empty,
    Unknown,
}

impl CommandKind {
    /// Maps a keyword, ignoring case. Blank keywords are `Empty`.
    pub fn from_keyword(keyword: &str) -> Self {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return CommandKind::Empty;
        }
        match keyword.to_lowercase().as_str() {
            "list" => CommandKind::List,
            "bye" => CommandKind::Bye,
            "mark" => CommandKind::Mark,
            "unmark" => CommandKind::Unmark,
            "delete" => CommandKind::Delete,
            "todo" => CommandKind::Todo,
            "deadline" => CommandKind::Deadline,
            "event" => CommandKind::Event,
            "find" => CommandKind::Find,
            "sort" => CommandKind::Sort,
            _ => CommandKind::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    pub kind: CommandKind,
    /// Everything after the keyword, trimmed. May be empty.
    pub args: &'a str,
}

pub fn parse(line: &str) -> ParsedCommand<'_> {
    let line = line.trim();
    let (keyword, args) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };
    ParsedCommand {
        kind: CommandKind::from_keyword(keyword),
        args,
    }
}
