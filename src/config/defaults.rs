//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default anchor latitude (search center and map center)
pub const DEFAULT_ANCHOR_LAT: f64 = 39.9526;

/// Default anchor longitude
pub const DEFAULT_ANCHOR_LNG: f64 = -75.1652;

/// Default request timeout in seconds for the places search
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connect timeout in seconds (proxy handshake included)
pub const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7879;

/// Environment variable holding the API credential
pub const ENV_API_KEY: &str = "GOOGLE_API_KEY";

/// Environment variable holding the forward proxy URL
pub const ENV_PROXY_URL: &str = "QUOTAGUARDSTATIC_URL";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "nearby";
