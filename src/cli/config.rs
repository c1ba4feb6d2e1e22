//! Config command handler
//!
//! View and modify configuration settings. Works on the config file only;
//! environment overrides are not written back.

use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "proxy.url")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    if args.path {
        let path = Config::config_path()?;
        println!("{}", path.display());
        return Ok(());
    }

    if args.reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load_file()?;

    match (&args.key, &args.value) {
        (None, None) => {
            show_all_config(&config);
        }

        (Some(key), None) => {
            if let Some(value) = config.get(key) {
                println!("{}", value);
            } else {
                eprintln!("Unknown config key: {}", key);
                eprintln!("\nAvailable keys:");
                for k in Config::available_keys() {
                    eprintln!("  {}", k);
                }
                std::process::exit(1);
            }
        }

        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }

        (None, Some(_)) => {
            eprintln!("Error: Must specify a key to set a value");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Display all configuration values, secrets masked
fn show_all_config(config: &Config) {
    println!("[api]");
    println!("key = {}", masked(&config.api.key));
    println!();

    println!("[proxy]");
    println!("url = {}", masked(&config.proxy.url));
    println!();

    println!("[anchor]");
    println!("lat = {}", config.anchor.lat);
    println!("lng = {}", config.anchor.lng);
    println!();

    println!("[http]");
    println!("timeout_secs = {}", config.http.timeout_secs);
    println!();

    println!("[map]");
    println!("include_key = {}", config.map.include_key);
    println!();

    println!("[server]");
    println!("host = \"{}\"", config.server.host);
    println!("port = {}", config.server.port);
}

fn masked(value: &str) -> &'static str {
    if value.is_empty() {
        "\"\" # not configured"
    } else {
        "\"***\" # configured"
    }
}
