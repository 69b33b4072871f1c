//! Line-oriented interactive loop

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::application::{Command, Session, Status};
use crate::cli::output;
use crate::cli::{CliError, CliResult};

fn write_err(e: io::Error) -> CliError {
    CliError::io("write output", e)
}

/// Read commands from `input` until EOF or `quit`, writing responses to `out`.
///
/// Unparsable lines are reported and skipped; they never end the session.
pub fn run_repl(
    session: &mut Session,
    input: impl BufRead,
    out: &mut impl Write,
    prompt: bool,
) -> CliResult<()> {
    let mut lines = input.lines();
    loop {
        if prompt {
            output::write_prompt(out, session.page()).map_err(write_err)?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| CliError::io("read command", e))?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match line.parse::<Command>() {
            Ok(command) => session.execute(command),
            Err(e) => {
                debug!("repl: rejected {:?}: {}", line, e);
                output::write_status(out, &Status::error(format!("Error: {}", e)))
                    .map_err(write_err)?;
                continue;
            }
        };

        output::write_response(out, &response).map_err(write_err)?;
        if response.quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn run(script: &str) -> (Session, String) {
        let mut session = Session::new(Settings::default()).unwrap();
        session.open("data_structures.html");
        let mut out = Vec::new();
        run_repl(&mut session, script.as_bytes(), &mut out, false).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, _) = run("push a\nquit\npush b\n");
        assert_eq!(session.stack().elements(), vec!["a"]);
    }

    #[test]
    fn test_bad_line_is_reported_and_skipped() {
        let (session, out) = run("fly away\npush a\n");
        assert!(out.contains("Error: unknown command: fly away"));
        assert!(out.contains("Successfully Pushed: a"));
        assert_eq!(session.stack().len(), 1);
    }

    #[test]
    fn test_tree_commands() {
        let (_, out) = run("tree preorder\ntree clear\ntree inorder\n");
        assert!(out.contains("PREORDER Traversal: 50 -> 30 -> 70"));
        assert!(out.contains("Output cleared."));
        assert!(out.contains("Tree is empty."));
    }
}
