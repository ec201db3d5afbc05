//! # Divide CLI Application
//!
//! Terminal front-end for the division form.
//!
//! ```text
//! divide_cli --dividend 17 --divider 5     # one submission
//! divide_cli --json --dividend 1 --divider 0
//! divide_cli                               # interactive prompts until EOF
//! ```
//!
//! The process exits with a failure code once the session is terminated by a
//! critical error, mirroring a page that has to be reloaded.

mod logger;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use divide_core::{DiagnosticLog, Outcome, Page, Session, TextSink};

#[derive(Parser, Debug)]
#[command(name = "divide_cli", version, about = "Floored division of two form values")]
struct Cli {
    /// Dividend text, exactly as it would be typed in the form
    #[arg(long, requires = "divider", allow_hyphen_values = true)]
    dividend: Option<String>,

    /// Divider text, exactly as it would be typed in the form
    #[arg(long, requires = "dividend", allow_hyphen_values = true)]
    divider: Option<String>,

    /// Print each outcome as JSON instead of the display text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let mut session = Session::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match (&cli.dividend, &cli.divider) {
        (Some(dividend), Some(divider)) => {
            tracing::debug!("one-shot submission");
            run_once(&mut out, &mut session, dividend, divider, cli.json)
        }
        _ => {
            tracing::debug!("interactive mode");
            run_interactive(io::stdin().lock(), &mut out, &mut session, cli.json)
        }
    };

    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }
    exit_code(&result, &session)
}

/// Failure on an I/O error or once the session has been terminated
fn exit_code<L>(result: &io::Result<()>, session: &Session<TextSink, L>) -> ExitCode
where
    L: DiagnosticLog,
{
    if result.is_err() || session.is_terminated() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Submit a single pair given on the command line.
fn run_once<W, L>(
    out: &mut W,
    session: &mut Session<TextSink, L>,
    dividend: &str,
    divider: &str,
    json: bool,
) -> io::Result<()>
where
    W: Write,
    L: DiagnosticLog,
{
    let outcome = session.submit(dividend, divider);
    report(out, session, &outcome, json)
}

/// Prompt for field pairs until EOF or until the session terminates.
fn run_interactive<R, W, L>(
    mut input: R,
    out: &mut W,
    session: &mut Session<TextSink, L>,
    json: bool,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    L: DiagnosticLog,
{
    while !session.is_terminated() {
        let Some(dividend) = read_field(&mut input, out, "Dividend: ")? else {
            break;
        };
        let Some(divider) = read_field(&mut input, out, "Divider: ")? else {
            break;
        };

        let outcome = session.submit(&dividend, &divider);
        report(out, session, &outcome, json)?;
    }
    Ok(())
}

/// Read one field. `None` at EOF; only the line ending is stripped.
fn read_field<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

fn report<W, L>(
    out: &mut W,
    session: &Session<TextSink, L>,
    outcome: &Outcome,
    json: bool,
) -> io::Result<()>
where
    W: Write,
    L: DiagnosticLog,
{
    if json {
        let line = serde_json::to_string(outcome).map_err(io::Error::other)?;
        writeln!(out, "{}", line)?;
        return Ok(());
    }

    if let Outcome::Ignored = outcome {
        return Ok(());
    }

    writeln!(out, "{}", session.sink().text())?;

    if let Page::Replaced(page) = session.page() {
        writeln!(out)?;
        writeln!(out, "═══════════════════════════════════════")?;
        writeln!(out, "  {}", page)?;
        writeln!(out, "═══════════════════════════════════════")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use divide_core::catalog;

    fn run(input: &str, json: bool) -> (String, Session<TextSink, divide_core::RecordingLog>) {
        let mut session = Session::recording();
        let mut out = Vec::new();
        run_interactive(input.as_bytes(), &mut out, &mut session, json).unwrap();
        (String::from_utf8(out).unwrap(), session)
    }

    #[test]
    fn test_cli_args_parse() {
        let args = ["divide_cli", "--dividend", "-5", "--divider", "2", "--json"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.dividend.as_deref(), Some("-5"));
        assert_eq!(cli.divider.as_deref(), Some("2"));
        assert!(cli.json);
    }

    #[test]
    fn test_cli_requires_both_values() {
        assert!(Cli::try_parse_from(["divide_cli", "--dividend", "5"]).is_err());
        assert!(Cli::try_parse_from(["divide_cli"]).is_ok());
    }

    fn once(dividend: &str, divider: &str, json: bool) -> (String, ExitCode) {
        let mut session = Session::recording();
        let mut out = Vec::new();
        let result = run_once(&mut out, &mut session, dividend, divider, json);
        let code = exit_code(&result, &session);
        (String::from_utf8(out).unwrap(), code)
    }

    #[test]
    fn test_one_shot_success() {
        let (out, code) = once("17", "5", false);
        assert_eq!(out, "3\n");
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_one_shot_rejection_still_succeeds() {
        let (out, code) = once("", "5", false);
        assert_eq!(out, format!("{}\n", catalog::NO_INPUT));
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_one_shot_critical_fails() {
        let (out, code) = once("five", "5", false);
        assert!(out.starts_with(catalog::CRITICAL));
        assert_eq!(out.matches(catalog::CRITICAL).count(), 2);
        assert_eq!(code, ExitCode::FAILURE);

        let (out, code) = once("five", "5", true);
        assert!(out.starts_with(r#"{"status":"halted""#));
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[test]
    fn test_io_error_fails() {
        let session = Session::recording();
        let result = Err(io::Error::other("broken pipe"));
        assert_eq!(exit_code(&result, &session), ExitCode::FAILURE);
    }

    #[test]
    fn test_interactive_results() {
        let (out, session) = run("10\n3\n\n4\n", false);

        assert!(out.contains("Dividend: Divider: 3\n"));
        assert!(out.contains(catalog::NO_INPUT));
        assert!(!session.is_terminated());
    }

    #[test]
    fn test_interactive_stops_on_critical() {
        let (out, session) = run("abc\n2\n10\n2\n", false);

        assert!(session.is_terminated());
        assert!(out.contains(catalog::CRITICAL));
        // The second pair is never prompted for
        assert_eq!(out.matches("Dividend: ").count(), 1);
        assert_eq!(session.log().entries().len(), 1);
    }

    #[test]
    fn test_interactive_crlf_and_partial_pair() {
        let (out, _) = run("9\r\n2\r\n7\n", false);
        assert!(out.contains("Divider: 4\n"));
        // EOF while waiting for the divider ends the loop quietly
        assert!(out.ends_with("Divider: "));
    }

    #[test]
    fn test_interactive_json() {
        let (out, _) = run("1\n0\n", true);
        assert!(out.contains(r#"{"status":"quotient","value":"Infinity"}"#));
    }
}
