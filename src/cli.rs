// File: ./src/cli.rs
// Line-based terminal session around the assistant
use crate::assistant::Assistant;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

pub const DIVIDER: &str = "____________________________________________________________";

fn show<W: Write>(output: &mut W, text: &str) -> Result<()> {
    for line in text.lines() {
        writeln!(output, " {}", line)?;
    }
    writeln!(output, "{}", DIVIDER)?;
    output.flush()?;
    Ok(())
}

/// Greets, then answers one command per input line until `bye` or the
/// input runs out.
pub fn run_session<R: BufRead, W: Write>(
    assistant: &mut Assistant,
    input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "{}", DIVIDER)?;
    show(&mut output, &assistant.startup_message())?;

    for line in input.lines() {
        let line = line?;
        let response = assistant.respond(&line);
        show(&mut output, &response.text)?;
        if response.is_exit() {
            info!("session ended by user");
            return Ok(());
        }
    }
    info!("input closed, ending session");
    Ok(())
}
