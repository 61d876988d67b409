//! b64pix CLI - Base64 image encoder/decoder with thumbnail preview.
//!
//! b64pix turns an image file into a Base64 payload and a pasted payload
//! back into a bounded 200×200 PNG thumbnail, with a 75 KiB input cap.
//!
//! # Usage
//!
//! ```bash
//! # Encode a file to Base64
//! b64pix encode photo.png
//!
//! # Decode a payload and write the thumbnail
//! b64pix decode --input payload.txt --output thumb.png
//!
//! # Check a file against the size limit
//! b64pix check photo.png
//!
//! # Interactive session (bare invocation)
//! b64pix
//! ```

use clap::{CommandFactory, Parser, Subcommand};
use std::io::IsTerminal;

mod cli;
mod logging;

/// b64pix - Base64 image encoder/decoder with thumbnail preview.
#[derive(Parser, Debug)]
#[command(name = "b64pix")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode an image file to a Base64 payload
    Encode(cli::encode::EncodeArgs),

    /// Decode a Base64 payload into a bounded PNG thumbnail
    Decode(cli::decode::DecodeArgs),

    /// Check a file against the size limit
    Check(cli::check::CheckArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI verbose override.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match b64pix_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `b64pix config path`."
            );
            b64pix_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("b64pix v{}", b64pix_core::VERSION);

    // Dispatch to the appropriate command handler
    let result = match cli.command {
        Some(Commands::Encode(args)) => cli::encode::execute(&config, args),
        Some(Commands::Decode(args)) => cli::decode::execute(&config, args),
        Some(Commands::Check(args)) => cli::check::execute(&config, args),
        Some(Commands::Config(args)) => cli::config::execute(args),
        None => {
            if std::io::stdin().is_terminal() {
                cli::interactive::run(&config)
            } else {
                // Piped stdin can't drive the interactive prompts
                Cli::command().print_help().map_err(Into::into)
            }
        }
    };

    // Pipeline failures get the severity-styled report instead of the
    // default anyhow backtrace chain.
    if let Err(err) = result {
        if let Some(pipeline_err) = err.downcast_ref::<b64pix_core::PipelineError>() {
            cli::report_pipeline_error(pipeline_err);
            std::process::exit(1);
        }
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["b64pix"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn encode_subcommand_parses_path() {
        let cli = Cli::try_parse_from(["b64pix", "encode", "photo.png"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Encode(_))));
    }
}
