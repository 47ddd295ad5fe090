// File: ./src/model/parser.rs
// Splits deadline/event arguments on their /by, /from and /to markers
use crate::error::SyntaxError;

pub const BY_MARKER: &str = "/by";
pub const FROM_MARKER: &str = "/from";
pub const TO_MARKER: &str = "/to";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineArgs<'a> {
    pub description: &'a str,
    pub by: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventArgs<'a> {
    pub description: &'a str,
    pub from: &'a str,
    pub to: &'a str,
}

/// Splits at the first occurrence of `marker`, trimming both halves.
fn split_marker<'a>(input: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    input
        .split_once(marker)
        .map(|(head, tail)| (head.trim(), tail.trim()))
}

/// `<description> /by <date>`. The date itself is not validated here.
pub fn parse_deadline(input: &str) -> Result<DeadlineArgs<'_>, SyntaxError> {
    let (description, by) = split_marker(input, BY_MARKER).ok_or(SyntaxError::MissingBy)?;
    if description.is_empty() {
        return Err(SyntaxError::EmptyDescription);
    }
    if by.is_empty() {
        return Err(SyntaxError::EmptyDate);
    }
    Ok(DeadlineArgs { description, by })
}

/// `<description> /from <start> /to <end>`. `/to` only counts when it
/// comes after `/from`.
pub fn parse_event(input: &str) -> Result<EventArgs<'_>, SyntaxError> {
    let (description, times) =
        split_marker(input, FROM_MARKER).ok_or(SyntaxError::MissingFrom)?;
    let (from, to) = split_marker(times, TO_MARKER).ok_or(SyntaxError::MissingTo)?;
    if description.is_empty() {
        return Err(SyntaxError::EmptyDescription);
    }
    if from.is_empty() {
        return Err(SyntaxError::EmptyStart);
    }
    if to.is_empty() {
        return Err(SyntaxError::EmptyEnd);
    }
    Ok(EventArgs {
        description,
        from,
        to,
    })
}
