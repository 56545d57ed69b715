use std::io;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eclair_rs::{ClientConfig, EclairClient, DEFAULT_URL};
use url::Url;

mod sub_commands;

/// Simple CLI application to interact with an eclair node
#[derive(Parser)]
#[command(name = "eclair-rs-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Base url of the node's API
    #[arg(long, env = "ECLAIR_API_URL", default_value = DEFAULT_URL)]
    url: Url,
    /// API password
    #[arg(short, long, env = "ECLAIR_API_PASSWORD", hide_env_values = true)]
    password: Option<String>,
    /// Request timeout in seconds
    #[arg(long, env = "ECLAIR_API_TIMEOUT", default_value_t = 30)]
    timeout: u64,
    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate statistics about the routing activity of each channel. Amounts are in satoshis.
    #[command(name = "channelstats")]
    ChannelStats(sub_commands::channel_stats::ChannelStatsSubcommand),
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Parse input
    let args: Cli = Cli::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = ClientConfig::new(args.url)
        .with_password(args.password)
        .with_timeout(Duration::from_secs(args.timeout));

    let eclair = EclairClient::new(config)?;

    let mut stdout = io::stdout().lock();

    let code = match &args.command {
        Commands::ChannelStats(sub_command_args) => {
            sub_commands::channel_stats::channel_stats(sub_command_args, &eclair, &mut stdout)
                .await?
        }
    };

    Ok(ExitCode::from(code))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_channelstats_with_defaults() {
        let cli = Cli::try_parse_from(["eclair-rs-cli", "channelstats"]).unwrap();

        assert!(matches!(cli.command, Commands::ChannelStats(_)));
        assert_eq!(cli.url.as_str(), "http://localhost:8080/");
        assert_eq!(cli.timeout, 30);
    }

    #[test]
    fn channelstats_takes_no_arguments() {
        assert!(Cli::try_parse_from(["eclair-rs-cli", "channelstats", "extra"]).is_err());
    }

    #[test]
    fn parses_global_options() {
        let cli = Cli::try_parse_from([
            "eclair-rs-cli",
            "--url",
            "http://node:8080/eclair",
            "-p",
            "secret",
            "--timeout",
            "5",
            "channelstats",
        ])
        .unwrap();

        assert_eq!(cli.url.as_str(), "http://node:8080/eclair");
        assert_eq!(cli.password.as_deref(), Some("secret"));
        assert_eq!(cli.timeout, 5);
    }
}
