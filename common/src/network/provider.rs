/// Name reported when the configured servers match no known provider.
pub const UNKNOWN_PROVIDER: &str = "Unknown";

/// A named resolver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    pub name: String,
    /// Server addresses in the order they are applied.
    pub addresses: Vec<String>,
}

impl Provider {
    pub fn new(name: impl Into<String>, addresses: Vec<String>) -> Self {
        Self {
            name: name.into(),
            addresses,
        }
    }

    /// True when any of `observed` is one of this provider's addresses.
    pub fn matches_any(&self, observed: &[String]) -> bool {
        observed.iter().any(|addr| self.addresses.contains(addr))
    }
}

/// What is currently configured on an interface, and who it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsObservation {
    pub provider: String,
    /// Distinct addresses in the order they were first reported.
    pub addresses: Vec<String>,
}

impl DnsObservation {
    pub fn unknown() -> Self {
        Self {
            provider: UNKNOWN_PROVIDER.to_string(),
            addresses: Vec::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.provider == UNKNOWN_PROVIDER
    }
}
