// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use expense_tracker::cli::Shell;
use expense_tracker::domain::Ledger;

/// Result of a scripted session: the final ledger and everything written to the terminal
pub struct Session {
    pub ledger: Ledger,
    pub output: String,
}

/// Run a full shell session, feeding `lines` as the user's answers (one per prompt)
pub fn run_session(lines: &[&str]) -> Result<Session> {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut shell = Shell::new(Cursor::new(script.into_bytes()), Vec::new());
    shell.run()?;

    let (ledger, output) = shell.into_parts();
    Ok(Session {
        ledger,
        output: String::from_utf8(output)?,
    })
}

/// Menu answers for one "Add an expense" round
pub fn add(amount: &'static str, category: &'static str, description: &'static str) -> [&'static str; 4] {
    ["1", amount, category, description]
}
