use std::fmt;

/// Operating system family the DNS strategy is chosen for.
///
/// Detected once at startup and held for the lifetime of the process.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
    Unsupported,
}

impl Platform {
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` style name to a platform.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOS,
            "linux" => Platform::Linux,
            _ => Platform::Unsupported,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "windows",
            Platform::MacOS => "macos",
            Platform::Linux => "linux",
            Platform::Unsupported => std::env::consts::OS,
        };
        f.write_str(name)
    }
}
