use std::io::{BufRead, Write};

use crate::application::AppError;

/// Line-oriented terminal: writes prompts and messages to `output`, reads answers from `input`.
///
/// Any `BufRead` works as the input source, so a whole session can be scripted
/// from an in-memory buffer.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` without a newline and block until a line is entered.
    /// The trailing line terminator is removed; nothing else is trimmed.
    pub fn ask(&mut self, question: &str) -> Result<String, AppError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn say(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn blank_line(&mut self) -> Result<(), AppError> {
        writeln!(self.output)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_writes_question_and_strips_newline() {
        let mut p = prompt("Food\n");
        assert_eq!(p.ask("Category: ").unwrap(), "Food");
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "Category: ");
    }

    #[test]
    fn test_ask_strips_crlf_only() {
        let mut p = prompt("  Food  \r\n");
        assert_eq!(p.ask("? ").unwrap(), "  Food  ");
    }

    #[test]
    fn test_ask_accepts_empty_line() {
        let mut p = prompt("\n");
        assert_eq!(p.ask("? ").unwrap(), "");
    }

    #[test]
    fn test_ask_last_line_without_newline() {
        let mut p = prompt("5");
        assert_eq!(p.ask("? ").unwrap(), "5");
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut p = prompt("");
        assert!(matches!(p.ask("? "), Err(AppError::InputClosed)));
    }

    #[test]
    fn test_say_and_blank_line() {
        let mut p = prompt("");
        p.blank_line().unwrap();
        p.say("hello").unwrap();
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "\nhello\n");
    }
}
