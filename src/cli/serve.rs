//! Serve command handler
//!
//! Runs the dispatcher-facing HTTP API in the foreground. The config is
//! validated before binding, so a missing proxy stops startup.

use crate::config::Config;
use crate::error::Result;
use crate::server;
use clap::Args;
use tracing::info;

/// Serve command arguments
#[derive(Args)]
pub struct ServeArgs {
    /// Host address to bind to (overrides `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides `server.port`)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Layer the command-line bind address over the loaded config
    fn apply(self, mut config: Config) -> Config {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        config
    }
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    super::init_logging();

    let config = args.apply(Config::load()?);
    let proxy = config.proxy_url()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.server_addr(),
        anchor = %config.anchor(),
        proxy_host = proxy.host_str().unwrap_or_default(),
        "Starting nearby server"
    );

    server::run(config).await
}
