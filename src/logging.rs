use std::env;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::CliArgs;

/// Targets whose level the command line controls.
const TARGETS: &[&str] = &["termfs", "termfs_core"];

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when set. Otherwise every target in [`TARGETS`] logs at
/// [`resolve_level`].
pub fn init_logging(args: &CliArgs) {
    let filter = match env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => {
            let level = resolve_level(args, env::var("TERMFS_LOG_LEVEL").ok().as_deref());
            TARGETS
                .iter()
                .filter_map(|target| format!("{}={}", target, level).parse().ok())
                .fold(EnvFilter::default(), EnvFilter::add_directive)
        }
    };

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init()
    {
        eprintln!("termfs: logging disabled: {}", err);
    }
}

/// `--log-level`, then `-v`/`-q`, then `TERMFS_LOG_LEVEL`, else `warn` so
/// log lines stay out of the session.
fn resolve_level(args: &CliArgs, env_level: Option<&str>) -> Level {
    let requested = args.log_level.as_deref().or(if args.verbose {
        Some("debug")
    } else if args.quiet {
        Some("error")
    } else {
        env_level
    });

    match requested.map(str::parse::<Level>) {
        Some(Ok(level)) => level,
        Some(Err(_)) => {
            eprintln!(
                "Invalid log level '{}', defaulting to WARN. Valid levels: trace, debug, info, warn, error",
                requested.unwrap_or_default()
            );
            Level::WARN
        }
        None => Level::WARN,
    }
}
