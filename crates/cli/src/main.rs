//! `ostora` — command-line shell around the fetch-and-decrypt bridge.
//!
//! Invocation sequence:
//! 1. Parse the endpoint argument.
//! 2. Load and validate [`Config`] from environment variables.
//! 3. Initialise structured JSON logging (stderr).
//! 4. Fetch and decrypt via [`ostora_client::ApiClient`].
//! 5. Print the plaintext to stdout, or a JSON error envelope to stderr and
//!    exit non-zero.

mod config;
mod telemetry;

use anyhow::Result;
use clap::Parser;
use common::protocol::ErrorReply;
use ostora_client::ApiClient;
use tracing::info;

/// Fetch an encrypted API payload and print the decrypted plaintext.
#[derive(Debug, Parser)]
#[command(name = "ostora", version)]
struct Cli {
    /// Endpoint path segment, e.g. `channels` or `categories`. Interpolated
    /// into the URL verbatim, so it must be URL-safe.
    endpoint: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Arguments
    // -----------------------------------------------------------------------
    let cli = Cli::parse();

    // -----------------------------------------------------------------------
    // 2. Configuration
    // -----------------------------------------------------------------------
    let cfg = config::Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 3. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        domain = %cfg.api_domain,
        endpoint = %cli.endpoint,
        "ostora shell starting"
    );

    // -----------------------------------------------------------------------
    // 4. Fetch + decrypt
    // -----------------------------------------------------------------------
    let client = ApiClient::with_domain(&cfg.api_domain);
    match client.fetch(&cli.endpoint).await {
        Ok(plaintext) => {
            println!("{plaintext}");
            Ok(())
        }
        Err(err) => {
            let reply = ErrorReply::from(&err);
            eprintln!("{}", serde_json::to_string(&reply)?);
            std::process::exit(1);
        }
    }
}
