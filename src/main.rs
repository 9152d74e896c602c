mod cli;
mod logging;
mod render;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};

use cli::CliArgs;
use termfs_core::config::PROMPT;
use termfs_core::{Interpreter, Terminal, loader};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init_logging(&args);
    if args.no_color {
        colored::control::set_override(false);
    }

    debug!("termfs v{} starting", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("termfs: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let fs = loader::load_or_fallback(&args.snapshot);
    let mut terminal = Terminal::new(Interpreter::new(fs));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Ok(listing) = terminal.interpreter().listing() {
        render::render_listing(&mut out, &listing).context("failed to write to stdout")?;
    }

    if !args.commands.is_empty() {
        for line in &args.commands {
            if let Some(result) = terminal.submit(line) {
                if !result.clear_screen {
                    writeln!(out, "{} {}", PROMPT, line.trim())
                        .context("failed to write to stdout")?;
                }
                render::render_result(&mut out, &result).context("failed to write to stdout")?;
            }
        }
        return Ok(());
    }

    let stdin = io::stdin();
    run_repl(&mut terminal, stdin.lock(), &mut out)?;

    debug!(
        path = terminal.interpreter().current_path(),
        "session ended"
    );
    Ok(())
}

/// Prompt for and run lines from `input` until EOF.
///
/// Input is decoded lossily so a malformed line becomes an unrecognized
/// command instead of ending the session.
fn run_repl(terminal: &mut Terminal, mut input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        write!(out, "{} ", PROMPT).context("failed to write to stdout")?;
        out.flush().context("failed to flush stdout")?;

        buf.clear();
        if input
            .read_until(b'\n', &mut buf)
            .context("failed to read stdin")?
            == 0
        {
            writeln!(out).context("failed to write to stdout")?;
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        if let Some(result) = terminal.submit(&line) {
            render::render_result(out, &result).context("failed to write to stdout")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfs_core::VirtualFs;
    use termfs_core::models::{FileMetadata, FsEntry};

    fn terminal() -> Terminal {
        let fs = VirtualFs::new(FsEntry::directory(
            "",
            vec![
                FsEntry::directory("docs", vec![]),
                FsEntry::file("notes.txt", FileMetadata::default()),
            ],
        ));
        Terminal::new(Interpreter::new(fs))
    }

    #[test]
    fn test_repl_survives_invalid_utf8() {
        colored::control::set_override(false);
        let mut terminal = terminal();
        let mut out = Vec::new();

        run_repl(&mut terminal, &b"ls\n\xff\nls\ncd docs\n"[..], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("notes.txt").count(), 2);
        assert!(text.contains("Command not found: \u{fffd}."));
        assert_eq!(terminal.interpreter().current_path(), "/docs");
    }

    #[test]
    fn test_repl_skips_blank_lines_and_ends_at_eof() {
        let mut terminal = terminal();
        let mut out = Vec::new();

        run_repl(&mut terminal, &b"\n   \n"[..], &mut out).unwrap();

        assert!(terminal.scrollback().is_empty());
        assert_eq!(String::from_utf8(out).unwrap(), "> > > \n");
    }
}
