//! ChainStream CLI: open an authenticated server-stream against a
//! Substreams endpoint and print each block-scoped module output.
//!
//! # Usage
//! ```text
//! export SUBSTREAMS_API_TOKEN=<token>
//! chainstream --package ./uniswap-v3-v0.1.0-beta.spkg \
//!     --module graph_out \
//!     --start-block 12369621 --stop-block 12369800
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chainstream_client::{SessionBuilder, StreamConsumer};
use chainstream_core::{
    build_stream_request, BlockRange, Credential, ErrorKind, FinalityFilter, ModulePackage,
    OutputSelector, SessionError, StdoutSink, StreamConfig, DEFAULT_ENDPOINT, DEFAULT_TOKEN_ENV,
};

#[derive(Parser)]
#[command(
    name = "chainstream",
    about = "Stream Substreams module outputs to stdout",
    long_about = "
ChainStream CLI: opens one authenticated server-stream against a Substreams
endpoint and prints every block-scoped module output as it arrives. The
stream ends when the server half-closes after the last requested block.

ENVIRONMENT VARIABLES:
  SUBSTREAMS_API_TOKEN   Bearer token for the endpoint (pick another
                         variable with --token-env)
  RUST_LOG               Tracing filter, e.g. 'info,chainstream_client=debug'
",
    version
)]
struct Cli {
    /// Path to the compiled module package (.spkg)
    #[arg(short, long)]
    package: PathBuf,

    /// Endpoint to stream from, host:port or a full URI
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Module whose output to stream; repeat or comma-separate for several
    #[arg(short, long = "module", value_delimiter = ',', required = true)]
    modules: Vec<String>,

    /// First block to request; negative means relative to the chain head
    #[arg(long, default_value_t = 12_369_621, allow_negative_numbers = true)]
    start_block: i64,

    /// Last block to request
    #[arg(long, default_value_t = 12_369_800)]
    stop_block: u64,

    /// Environment variable holding the bearer token
    #[arg(long, default_value = DEFAULT_TOKEN_ENV)]
    token_env: String,

    /// Stream every fork step instead of only irreversible blocks
    #[arg(long)]
    all_steps: bool,

    /// Connect without TLS (h2c), for local endpoints
    #[arg(long)]
    plaintext: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> StreamConfig {
        StreamConfig {
            endpoint: self.endpoint,
            token_env: self.token_env,
            package: self.package,
            output_modules: self.modules,
            start_block: self.start_block,
            stop_block: self.stop_block,
            finality: if self.all_steps {
                FinalityFilter::AllSteps
            } else {
                FinalityFilter::IrreversibleOnly
            },
            plaintext: self.plaintext,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.into_config()).await {
        Ok(delivered) => {
            info!(delivered, "stream completed");
        }
        Err(err) => {
            report(&err);
            process::exit(exit_code(err.kind()));
        }
    }
}

async fn run(config: StreamConfig) -> Result<u64, SessionError> {
    let credential = Credential::resolve(&config.token_env)?;

    let package = ModulePackage::load(&config.package)?;
    info!(
        package = %config.package.display(),
        name = package.name().unwrap_or("unnamed"),
        version = package.package_version().unwrap_or("unversioned"),
        modules = package.module_names().len(),
        "package loaded"
    );

    let selector = OutputSelector::new(config.output_modules)?;
    let request = build_stream_request(
        &package,
        BlockRange::new(config.start_block, config.stop_block),
        config.finality,
        &selector,
    )?;

    let mut session = SessionBuilder::new(config.endpoint)
        .credential(credential)
        .plaintext(config.plaintext)
        .build()?;
    let stream = session.open(request).await?;

    let mut sink = StdoutSink::new();
    StreamConsumer::new().consume(stream, &mut sink).await
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn report(err: &SessionError) {
    eprintln!("Error: {err}");
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

/// One stable exit code per failure kind, so scripts can branch on the
/// outcome without parsing stderr.
fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Configuration => 2,
        ErrorKind::Io => 3,
        ErrorKind::Decode => 4,
        ErrorKind::InvalidRequest => 5,
        ErrorKind::Transport => 6,
        ErrorKind::Stream => 7,
        ErrorKind::Sink => 8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_map_into_the_config() {
        let cli = Cli::parse_from([
            "chainstream",
            "--package",
            "uniswap.spkg",
            "--module",
            "graph_out,store_pairs",
            "--start-block=-100",
            "--stop-block",
            "200",
            "--all-steps",
            "--plaintext",
        ]);
        let config = cli.into_config();

        assert_eq!(config.package, PathBuf::from("uniswap.spkg"));
        assert_eq!(config.output_modules, ["graph_out", "store_pairs"]);
        assert_eq!(config.start_block, -100);
        assert_eq!(config.stop_block, 200);
        assert_eq!(config.finality, FinalityFilter::AllSteps);
        assert!(config.plaintext);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.token_env, DEFAULT_TOKEN_ENV);
    }

    #[test]
    fn defaults_cover_the_reference_range() {
        let cli = Cli::parse_from(["chainstream", "-p", "uni.spkg", "-m", "graph_out"]);
        let config = cli.into_config();

        assert_eq!(config.start_block, 12_369_621);
        assert_eq!(config.stop_block, 12_369_800);
        assert_eq!(config.finality, FinalityFilter::IrreversibleOnly);
        assert!(!config.plaintext);
    }

    #[test]
    fn each_error_kind_gets_its_own_exit_code() {
        let kinds = [
            ErrorKind::Configuration,
            ErrorKind::Io,
            ErrorKind::Decode,
            ErrorKind::InvalidRequest,
            ErrorKind::Transport,
            ErrorKind::Stream,
            ErrorKind::Sink,
        ];
        let mut codes: Vec<i32> = kinds.iter().map(|kind| exit_code(*kind)).collect();
        assert!(codes.iter().all(|code| *code != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }
}
