//! evsifter write-policy plugin
//!
//! - Reads one relay input per line on stdin, replies one output per line on stdout
//! - Config: strict YAML at `$EVSIFTER_CONFIG` (default `evsifter.yaml`)
//! - Logs go to stderr; stdout belongs to the relay protocol

use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::BufReader;
use tracing_subscriber::{fmt, EnvFilter};

use evsifter_plugin::{config, sifters, transport};

const DEFAULT_CONFIG_PATH: &str = "evsifter.yaml";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::var("EVSIFTER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let sifter = match config::load_from_file(&path)
        .and_then(|cfg| cfg.sifter.build(Arc::new(sifters::SystemClock)))
    {
        Ok(unit) => unit,
        Err(e) => {
            tracing::error!(%path, code = e.code().as_str(), error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%path, mode = ?sifter.mode(), "evsifter starting");

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    match transport::stdio::run(Arc::new(sifter), stdin, stdout).await {
        Ok(stats) => {
            tracing::info!(
                accepted = stats.accepted,
                rejected = stats.rejected,
                decode_errors = stats.decode_errors,
                eval_errors = stats.eval_errors,
                "input closed, evsifter stopping"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "evsifter loop failed");
            ExitCode::FAILURE
        }
    }
}
