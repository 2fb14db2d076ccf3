use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use solana_log_decoder::stream::types::{DEFAULT_COMMITMENT, DEFAULT_ENDPOINT, ENV_COMMITMENT, ENV_ENDPOINT};
use solana_log_decoder::stream::{parse_protocol, LogStreamClient, StreamConfig};
use solana_log_decoder::{ConsoleSink, Protocol};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "log-decoder",
    about = "Decode Jupiter, PumpFun and Raydium V4 events from Solana logsSubscribe notifications",
    long_about = "
Decode Jupiter, PumpFun and Raydium V4 events from Solana logsSubscribe notifications.

ENVIRONMENT VARIABLES:
  SOLANA_WSS_ENDPOINT   WebSocket endpoint (overridden by --endpoint)
  SOLANA_COMMITMENT     processed | confirmed | finalized (overridden by --commitment)
  RUST_LOG              log filter, default info
",
    version
)]
struct Cli {
    /// WebSocket endpoint (ws:// or wss://)
    #[arg(long, env = ENV_ENDPOINT, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Commitment level: processed, confirmed or finalized
    #[arg(long, env = ENV_COMMITMENT, default_value = DEFAULT_COMMITMENT)]
    commitment: String,

    /// Comma-separated protocols to subscribe, e.g. jupiter,pumpfun,raydium
    #[arg(long, value_delimiter = ',', value_parser = parse_protocol)]
    protocols: Vec<Protocol>,
}

impl Cli {
    fn into_config(self) -> StreamConfig {
        let mut config = StreamConfig {
            endpoint: self.endpoint,
            commitment: self.commitment,
            ..StreamConfig::default()
        };
        if !self.protocols.is_empty() {
            config.protocols = self.protocols;
        }
        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(cli.into_config()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: StreamConfig) -> Result<()> {
    println!("Starting Solana log decoder...");
    println!("Endpoint: {}", config.endpoint);
    println!("Commitment: {}", config.commitment);
    println!("Protocols to monitor: {:?}", config.protocols);

    let client = LogStreamClient::new(config).context("invalid configuration")?;
    let mut sink = ConsoleSink::stdout();

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    client.run_until(&mut sink, shutdown).await?;
    info!("Log decoder stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "log-decoder",
            "--endpoint",
            "ws://127.0.0.1:8900",
            "--commitment",
            "confirmed",
            "--protocols",
            "raydium,pumpfun",
        ])
        .unwrap();
        let config = cli.into_config();
        assert_eq!(config.endpoint, "ws://127.0.0.1:8900");
        assert_eq!(config.commitment, "confirmed");
        assert_eq!(config.protocols, vec![Protocol::RaydiumV4, Protocol::PumpFun]);
    }

    #[test]
    fn test_cli_defaults_keep_all_protocols() {
        let config = Cli::try_parse_from(["log-decoder"]).unwrap().into_config();
        assert_eq!(config.protocols, StreamConfig::default().protocols);
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        let err = Cli::try_parse_from(["log-decoder", "--endpiont", "ws://x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_cli_flag_is_not_taken_as_value() {
        let result = Cli::try_parse_from(["log-decoder", "--endpoint", "--commitment", "confirmed"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_protocol() {
        let err = Cli::try_parse_from(["log-decoder", "--protocols", "jupiter,orca"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
