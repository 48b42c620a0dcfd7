// # dldns - command-line tools
//
// Thin integration layer for the three binaries:
//
// - `list-domains`: table of `{id, domain}` for every domain
// - `list-records domain_id=<id>`: every field of every record of a domain
// - `update-record domain_id=<id> record_id=<id> [target_ip=<ip>]`: point a
//   record at `target_ip`, or at the external IP reported by the echo service
//
// Each binary:
// 1. Loads `.env` and reads configuration from the environment
// 2. Initializes logging (stderr)
// 3. Builds the transport, client and resolver from configuration
// 4. Runs one command on a single-threaded runtime and prints its output
//
// ## Example
//
// ```bash
// export LINODE_PAT=your_token
//
// list-domains
// list-records domain_id=012345678
// update-record domain_id=012345678 record_id=87654321
// ```

pub mod args;
pub mod commands;
pub mod config;
pub mod exit;
pub mod output;

use std::future::Future;
use std::process::ExitCode;
use std::sync::Arc;

use dldns_core::{Error, Result};
use dldns_http::ReqwestTransport;
use dldns_ip_echo::IpEchoResolver;
use dldns_provider_linode::LinodeClient;
use tracing_subscriber::FmtSubscriber;

use crate::args::Arguments;
use crate::config::Config;
use crate::exit::DldnsExitCode;

/// Everything a command needs, built from configuration
pub struct Context {
    /// Parsed `key=value` arguments
    pub args: Arguments,
    /// Linode API client
    pub client: LinodeClient,
    /// External IP resolver
    pub resolver: IpEchoResolver,
}

impl Context {
    /// Build the transport, client and resolver
    pub fn build(config: &Config, args: Arguments) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::from_config(&config.dldns.http)?);
        let client = LinodeClient::from_config(&config.dldns.api, transport.clone())?;
        let resolver = IpEchoResolver::from_config(&config.dldns.ip_echo, transport)?;

        Ok(Self {
            args,
            client,
            resolver,
        })
    }
}

/// Run one command and turn its outcome into an exit code
///
/// The command returns the text to print on stdout. Failures are reported
/// on stderr.
pub fn run<F, Fut>(command: F) -> ExitCode
where
    F: FnOnce(Context) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    if let Err(e) = config::load_dotenv() {
        eprintln!("Configuration error: {}", e);
        return DldnsExitCode::ConfigError.into();
    }

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return DldnsExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return DldnsExitCode::ConfigError.into();
    }

    let log_level = config.tracing_level().unwrap_or(tracing::Level::WARN);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return DldnsExitCode::ConfigError.into();
    }

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {}", e);
            return DldnsExitCode::ConfigError.into();
        }
    };

    let args = Arguments::from_env();
    let result = rt.block_on(async move {
        let context = Context::build(&config, args)?;
        command(context).await
    });

    match result {
        Ok(output) => {
            println!("{}", output);
            DldnsExitCode::Success.into()
        }
        Err(e) => {
            eprintln!("{}", error_report(&e));
            DldnsExitCode::for_error(&e).into()
        }
    }
}

/// Text printed on stderr for a failed command
///
/// Argument errors are shown without the `Invalid input` prefix.
pub fn error_report(err: &Error) -> String {
    match err {
        Error::InvalidInput(msg) => format!("Error: {}", msg),
        other => format!("Error: {}", other),
    }
}
