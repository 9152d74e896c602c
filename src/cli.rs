use clap::Parser;
use std::path::PathBuf;

use termfs_core::config::DEFAULT_SNAPSHOT_PATH;

/// Browse a virtual filesystem snapshot from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "termfs",
    about = "Browse a virtual filesystem snapshot from the terminal",
    version,
    long_about = "termfs loads a JSON snapshot of a directory tree and lets you walk it with \
                  ls, cd, back and open. Commands are read from stdin, one per line, unless \
                  given with --command.\n\n\
                  Examples:\n  \
                  termfs\n  \
                  termfs --snapshot site/files.json\n  \
                  termfs -c 'cd docs' -c ls"
)]
pub struct CliArgs {
    #[arg(
        long,
        env = "TERMFS_SNAPSHOT",
        value_name = "PATH",
        default_value = DEFAULT_SNAPSHOT_PATH,
        help = "Snapshot document to load"
    )]
    pub snapshot: PathBuf,

    #[arg(
        short = 'c',
        long = "command",
        value_name = "LINE",
        help = "Run a command line and exit (repeatable)"
    )]
    pub commands: Vec<String>,

    #[arg(long, help = "Disable coloured output")]
    pub no_color: bool,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Verbose logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}
