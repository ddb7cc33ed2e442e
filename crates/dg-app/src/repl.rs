//! Interactive read-eval-print loop over any line source.

use std::io::{BufRead, Write};

use crate::command::{Outcome, execute_line};
use crate::error::AppResult;
use crate::session::GraphSession;

pub const BANNER: &str = "distgraph - type 'help' for commands, 'quit' to leave";

/// Drive `session` from `input` until end of input or `quit`.
///
/// Outcomes go to `out`, per-line errors to `err`. A bad line (including one
/// that is not valid UTF-8) is reported and skipped; only I/O failures on
/// the streams themselves end the loop with an error.
pub fn run_repl(
    session: &mut GraphSession,
    mut input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> AppResult<()> {
    writeln!(out, "{BANNER}")?;
    let mut buf = Vec::new();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            break;
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                writeln!(err, "error: input is not valid UTF-8 ({e})")?;
                continue;
            }
        };

        match execute_line(session, line) {
            Ok(Some(Outcome::Quit)) => break,
            Ok(Some(outcome)) => writeln!(out, "{outcome}")?,
            Ok(None) => {}
            Err(e) => writeln!(err, "error: {e}")?,
        }
    }
    Ok(())
}
