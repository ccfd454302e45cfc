use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use edge_headers::config::{load_config, validate_config, ConfigError, EdgeConfig, ObservabilityConfig};
use edge_headers::observability::init_logging;
use edge_headers::{classify, handle_json, HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "edge-headers")]
#[command(about = "Security and cache header policy for edge responses", long_about = None)]
struct Cli {
    /// Override the configured log level.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the policy to a viewer-response event and print the response
    Apply {
        /// Event JSON file (reads stdin when omitted)
        #[arg(short, long)]
        event: Option<PathBuf>,
    },
    /// Print the cache-control chosen for each URI
    Classify {
        #[arg(required = true)]
        uris: Vec<String>,
    },
    /// Run the local invocation server
    Serve {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override listener.bind_address
        #[arg(short, long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Apply { event } => {
            let mut observability = ObservabilityConfig::default();
            if let Some(level) = cli.log_level {
                observability.log_level = level;
            }
            init_logging(&observability);

            let input = read_event(event.as_deref(), std::io::stdin())?;
            println!("{}", handle_json(&input)?);
        }
        Commands::Classify { uris } => {
            for uri in uris {
                println!("{}", classify_line(&uri));
            }
        }
        Commands::Serve { config, bind } => {
            let mut config = match config {
                Some(path) => load_config(&path)?,
                None => EdgeConfig::default(),
            };
            if let Some(bind) = bind {
                config.listener.bind_address = bind;
            }
            if let Some(level) = cli.log_level {
                config.observability.log_level = level;
            }
            validate_config(&config).map_err(ConfigError::Validation)?;

            init_logging(&config.observability);
            tracing::info!("edge-headers v{} starting", env!("CARGO_PKG_VERSION"));

            tracing::info!(
                bind_address = %config.listener.bind_address,
                request_timeout_secs = config.timeouts.request_secs,
                "Configuration loaded"
            );

            let listener = TcpListener::bind(&config.listener.bind_address).await?;
            let shutdown = Shutdown::new();
            let server = HttpServer::new(config);
            server.run(listener, shutdown.subscribe()).await?;

            tracing::info!("Shutdown complete");
        }
    }

    Ok(())
}

/// Read the event from `path`, or from `stdin` when no path is given.
fn read_event(path: Option<&Path>, mut stdin: impl Read) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// One `classify` output line: URI, tab, cache-control.
fn classify_line(uri: &str) -> String {
    format!("{}\t{}", uri, classify(uri).cache_control())
}
