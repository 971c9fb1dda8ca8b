mod prompt;
mod shell;

pub use prompt::Prompt;
pub use shell::{MenuChoice, Shell};

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

/// Expense Tracker - record expenses and see where the money goes
#[derive(Parser)]
#[command(name = "expense-tracker")]
#[command(about = "An interactive, in-memory expense tracker with per-category totals")]
#[command(version)]
pub struct Cli {
    /// Log session activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let level = if self.verbose { Level::DEBUG } else { Level::WARN };
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .with_target(false)
            .init();

        let stdin = io::stdin();
        let mut shell = Shell::new(stdin.lock(), io::stdout().lock());
        shell.run()?;
        Ok(())
    }
}
