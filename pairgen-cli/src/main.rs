//! pairgen CLI - render label/value field pairs from record and spec files.
//!
//! Commands:
//! - `pairgen render --object <file> --fields <file>`: Print one pair per field
//! - `pairgen check --fields <file>`: Validate a field spec list
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pairgen_cli::{run_check, run_render, Cli, Commands};

fn handle_result(result: anyhow::Result<String>) -> i32 {
    match result {
        Ok(output) => {
            print!("{output}");
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("pairgen=debug,pairgen_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Render {
            object,
            fields,
            config,
            prefix,
        } => handle_result(run_render(
            &object,
            &fields,
            config.as_deref(),
            prefix.as_deref(),
        )),
        Commands::Check { fields } => handle_result(run_check(&fields)),
    };

    std::process::exit(exit_code);
}
