use std::path::PathBuf;
use std::time::Duration;

/// File the custom providers are mirrored to when no path is given.
pub const DEFAULT_PROVIDERS_FILE: &str = "custom_dns.json";

/// Pause between a menu action and the next redraw.
pub const REDRAW_DELAY: Duration = Duration::from_secs(2);

pub struct Config {
    /// Where custom providers are loaded from and saved to.
    pub providers_file: PathBuf,
    /// Interface to operate on. Skips auto-detection when set.
    pub interface: Option<String>,
    pub no_banner: bool,
    /// Each level hides more decoration (headers, banners).
    pub quiet: u8,
    pub redraw_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            providers_file: PathBuf::from(DEFAULT_PROVIDERS_FILE),
            interface: None,
            no_banner: false,
            quiet: 0,
            redraw_delay: REDRAW_DELAY,
        }
    }
}
