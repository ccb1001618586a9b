//! Windows DNS handling through the DNS client PowerShell cmdlets.

use std::collections::HashSet;

use dnswitch_common::network::interface::{InterfaceKind, NetworkInterface};
use dnswitch_common::network::platform::Platform;
use dnswitch_common::{DnsError, Result};
use serde::Deserialize;
use tracing::debug;

use crate::command::{CommandRunner, Invocation, execute};
use crate::platform::DnsPlatform;

const POWERSHELL: &str = "powershell";

const LIST_ADAPTERS: &str =
    "Get-NetAdapter | Select-Object Name, InterfaceDescription, Status, MediaType | ConvertTo-Json -Compress";

const LIST_IPV4_ALIASES: &str = "Get-NetIPAddress -AddressFamily IPv4 | Where-Object { $_.IPAddress -notlike '127.*' } | Select-Object -ExpandProperty InterfaceAlias";

pub struct WindowsDns {
    runner: Box<dyn CommandRunner>,
}

/// One row of `Get-NetAdapter` output.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AdapterRecord {
    name: String,
    #[serde(default)]
    interface_description: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    media_type: Option<String>,
}

/// `ConvertTo-Json` emits a bare object instead of an array when there is exactly one adapter.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AdapterList {
    Many(Vec<AdapterRecord>),
    One(AdapterRecord),
}

impl WindowsDns {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    fn powershell(&self, script: String) -> Result<String> {
        let invocation = Invocation::new(POWERSHELL).arg("-Command").arg(script);
        let stdout = execute(self.runner.as_ref(), &invocation)?;
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}

/// Quotes `value` as a single-quoted PowerShell string literal.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn parse_adapters(json: &str) -> Result<Vec<NetworkInterface>> {
    let json = json.trim();
    if json.is_empty() {
        return Ok(Vec::new());
    }

    let records = match serde_json::from_str::<AdapterList>(json) {
        Ok(AdapterList::Many(records)) => records,
        Ok(AdapterList::One(record)) => vec![record],
        Err(err) => return Err(DnsError::enumeration_failed(format!("unreadable adapter list: {err}"))),
    };

    Ok(records
        .into_iter()
        .map(|record| {
            let description = record.interface_description.unwrap_or_default();
            let media_type = record.media_type.unwrap_or_default();
            let is_active = record
                .status
                .as_deref()
                .is_some_and(|status| status.eq_ignore_ascii_case("up"));
            let kind = InterfaceKind::from_adapter(&description, &media_type);
            let display_name = if description.is_empty() {
                record.name.clone()
            } else {
                format!("{} ({description})", record.name)
            };
            NetworkInterface::new(record.name, is_active, kind).with_display_name(display_name)
        })
        .collect())
}

impl DnsPlatform for WindowsDns {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn list_interfaces(&self) -> Result<Vec<NetworkInterface>> {
        let json = self.powershell(LIST_ADAPTERS.to_string())?;
        parse_adapters(&json)
    }

    fn active_interface(&self) -> Result<NetworkInterface> {
        let adapters = self.list_interfaces()?;
        let aliases = self.powershell(LIST_IPV4_ALIASES.to_string())?;
        let with_ipv4: HashSet<&str> = aliases.lines().map(str::trim).collect();
        debug!(candidates = with_ipv4.len(), "adapters holding an IPv4 address");

        adapters
            .into_iter()
            .find(|adapter| {
                adapter.is_active
                    && adapter.kind != InterfaceKind::Virtual
                    && with_ipv4.contains(adapter.system_name.as_str())
            })
            .ok_or(DnsError::NoActiveInterface)
    }

    fn read_dns(&self, interface: &str) -> Result<String> {
        self.powershell(format!(
            "(Get-DnsClientServerAddress -InterfaceAlias {} -AddressFamily IPv4).ServerAddresses",
            quote(interface)
        ))
    }

    fn set_dns(&self, interface: &str, addresses: &[String]) -> Result<()> {
        self.powershell(format!(
            "Set-DnsClientServerAddress -InterfaceAlias {} -ServerAddresses {}",
            quote(interface),
            addresses
                .iter()
                .map(|addr| quote(addr))
                .collect::<Vec<_>>()
                .join(",")
        ))?;
        Ok(())
    }

    fn clear_dns(&self, interface: &str) -> Result<()> {
        self.powershell(format!(
            "Set-DnsClientServerAddress -InterfaceAlias {} -ResetServerAddresses",
            quote(interface)
        ))?;
        Ok(())
    }
}
