mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{} {err:#}", output_utils::RED_X);
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn setup_logger(cli: &Cli) {
    let (log_level, warning) = if cli.verbose {
        (tracing::Level::DEBUG, None)
    } else {
        match std::env::var("LOG_LEVEL") {
            Ok(env_val) => match parse_log_level(&env_val) {
                Some(level) => (level, None),
                None => (
                    DEFAULT_LOG_LEVEL,
                    Some(format!(
                        "Invalid `LOG_LEVEL` environment variable value: `{}`",
                        env_val.trim(),
                    )),
                ),
            },
            Err(_) => (DEFAULT_LOG_LEVEL, None),
        }
    };

    // stdout is reserved for command output.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// Accepts any `tracing` level name (case-insensitive) plus `verbose` as an
/// alias for `debug`.
fn parse_log_level(value: &str) -> Option<tracing::Level> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("verbose") {
        return Some(tracing::Level::DEBUG);
    }
    value.parse().ok()
}
