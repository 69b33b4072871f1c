//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::{self, Write};

use colored::Colorize;

use crate::application::{Response, Status, StatusKind};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Write a status styled by its kind. Empty messages write nothing.
///
/// - success: green checkmark
/// - error: red cross, red message
/// - neutral: plain
pub fn write_status(out: &mut impl Write, status: &Status) -> io::Result<()> {
    if status.is_empty() {
        return Ok(());
    }
    match status.kind {
        StatusKind::Success => writeln!(out, "{} {}", "✓".green(), status.message.green()),
        StatusKind::Error => writeln!(out, "{} {}", "✗".red(), status.message.red()),
        StatusKind::Neutral => writeln!(out, "{}", status.message),
    }
}

/// Write a response: status line, then any display text.
pub fn write_response(out: &mut impl Write, response: &Response) -> io::Result<()> {
    write_status(out, &response.status)?;
    if let Some(display) = &response.display {
        writeln!(out, "{}", display)?;
    }
    Ok(())
}

/// Write the interactive prompt without newline (cyan)
pub fn write_prompt(out: &mut impl Write, page: &str) -> io::Result<()> {
    write!(out, "{} ", format!("{}>", page).cyan())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_status_writes_nothing() {
        let mut buf = Vec::new();
        write_status(&mut buf, &Status::default()).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_neutral_status_is_plain() {
        let mut buf = Vec::new();
        write_status(&mut buf, &Status::neutral("Tree is empty.")).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Tree is empty.\n");
    }

    #[test]
    fn test_error_status_contains_message() {
        let mut buf = Vec::new();
        write_status(&mut buf, &Status::error("Error: boom")).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("Error: boom"));
    }
}
