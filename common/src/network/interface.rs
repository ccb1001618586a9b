use std::fmt;

/// Best-effort classification of what kind of link an interface is.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum InterfaceKind {
    WiFi,
    Ethernet,
    Bluetooth,
    Virtual,
    Unknown,
}

impl fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InterfaceKind::WiFi => "Wi-Fi",
            InterfaceKind::Ethernet => "Ethernet",
            InterfaceKind::Bluetooth => "Bluetooth",
            InterfaceKind::Virtual => "Virtual",
            InterfaceKind::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

impl InterfaceKind {
    /// Windows adapters: matched against the adapter description and media type.
    pub fn from_adapter(description: &str, media_type: &str) -> Self {
        let haystack = format!("{description} {media_type}").to_lowercase();
        if haystack.contains("wireless") || haystack.contains("wi-fi") {
            InterfaceKind::WiFi
        } else if haystack.contains("ethernet") || haystack.contains("802.3") {
            InterfaceKind::Ethernet
        } else if haystack.contains("bluetooth") {
            InterfaceKind::Bluetooth
        } else if haystack.contains("virtual") || haystack.contains("loopback") {
            InterfaceKind::Virtual
        } else {
            InterfaceKind::Unknown
        }
    }

    /// macOS network services: matched against the service name.
    pub fn from_service_name(service: &str) -> Self {
        let service = service.to_lowercase();
        if service.contains("wi-fi") || service.contains("wifi") {
            InterfaceKind::WiFi
        } else if service.contains("ethernet") {
            InterfaceKind::Ethernet
        } else if service.contains("bluetooth") {
            InterfaceKind::Bluetooth
        } else {
            InterfaceKind::Unknown
        }
    }

    /// Linux devices: matched against the kernel name prefix.
    pub fn from_device_name(name: &str) -> Self {
        if name.starts_with("wl") {
            InterfaceKind::WiFi
        } else if name.starts_with("eth") || name.starts_with("en") {
            InterfaceKind::Ethernet
        } else if name.starts_with("docker") || name.starts_with("br-") || name.starts_with("veth")
        {
            InterfaceKind::Virtual
        } else {
            InterfaceKind::Unknown
        }
    }
}

/// One entry of an interface discovery snapshot.
///
/// Snapshots are produced fresh on every probe; `system_name` is the handle
/// passed back to the OS in later commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterface {
    pub system_name: String,
    pub display_name: String,
    pub is_active: bool,
    pub kind: InterfaceKind,
}

impl NetworkInterface {
    pub fn new(system_name: impl Into<String>, is_active: bool, kind: InterfaceKind) -> Self {
        let system_name = system_name.into();
        Self {
            display_name: system_name.clone(),
            system_name,
            is_active,
            kind,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }
}
