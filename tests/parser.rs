use robert::command::{CommandKind, parse};
use robert::error::SyntaxError;
use robert::model::parser::{DeadlineArgs, EventArgs, parse_deadline, parse_event};

#[test]
fn test_keywords_are_case_insensitive() {
    let cases = [
        ("list", CommandKind::List),
        ("BYE", CommandKind::Bye),
        ("Mark 2", CommandKind::Mark),
        ("unmark 1", CommandKind::Unmark),
        ("delete 3", CommandKind::Delete),
        ("todo read", CommandKind::Todo),
        ("deadline x /by 2025-01-01", CommandKind::Deadline),
        ("event x /from a /to b", CommandKind::Event),
        ("find book", CommandKind::Find),
        ("SoRt", CommandKind::Sort),
        ("", CommandKind::Empty),
        ("   \t ", CommandKind::Empty),
        ("gibberish", CommandKind::Unknown),
        ("todos", CommandKind::Unknown),
    ];
    for (input, kind) in cases {
        assert_eq!(parse(input).kind, kind, "input: {input:?}");
    }
}

#[test]
fn test_args_split_on_first_whitespace_run() {
    let cmd = parse("todo    read   the book  ");
    assert_eq!(cmd.kind, CommandKind::Todo);
    assert_eq!(cmd.args, "read   the book");

    let cmd = parse("  mark\t2");
    assert_eq!(cmd.kind, CommandKind::Mark);
    assert_eq!(cmd.args, "2");

    assert_eq!(parse("list").args, "");
}

#[test]
fn test_deadline_tokens() {
    assert_eq!(
        parse_deadline("return book /by 2025-01-01"),
        Ok(DeadlineArgs {
            description: "return book",
            by: "2025-01-01"
        })
    );
    assert_eq!(parse_deadline("return book"), Err(SyntaxError::MissingBy));
    assert_eq!(
        parse_deadline("/by 2025-01-01"),
        Err(SyntaxError::EmptyDescription)
    );
    assert_eq!(parse_deadline("return book /by "), Err(SyntaxError::EmptyDate));
}

#[test]
fn test_event_tokens() {
    assert_eq!(
        parse_event("meeting /from Mon 2pm /to 4pm"),
        Ok(EventArgs {
            description: "meeting",
            from: "Mon 2pm",
            to: "4pm"
        })
    );
    assert_eq!(parse_event("meeting /to 4pm"), Err(SyntaxError::MissingFrom));
    assert_eq!(parse_event("meeting /from 2pm"), Err(SyntaxError::MissingTo));
    // /to before /from does not count
    assert_eq!(
        parse_event("meeting /to 4pm /from 2pm"),
        Err(SyntaxError::MissingTo)
    );
    assert_eq!(
        parse_event("/from 2pm /to 4pm"),
        Err(SyntaxError::EmptyDescription)
    );
    assert_eq!(parse_event("meeting /from /to 4pm"), Err(SyntaxError::EmptyStart));
    assert_eq!(parse_event("meeting /from 2pm /to"), Err(SyntaxError::EmptyEnd));
}
