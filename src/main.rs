//! bem-suggest CLI entry point

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use bem_suggest::commands::run_suggest;
use bem_suggest::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match run_suggest(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_cancellation() => {
            tracing::debug!("cancelled by user");
            e.exit_code()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Log to stderr, filtered by `BEM_SUGGEST_LOG` (default `warn`, or `debug`
/// with `--verbose`)
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("BEM_SUGGEST_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
