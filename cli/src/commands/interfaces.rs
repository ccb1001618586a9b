use anyhow::{Context, bail};
use tracing::{info, warn};

use crate::mprint;
use crate::terminal::{format, input, print};
use dnswitch_common::DnsError;
use dnswitch_common::config::Config;
use dnswitch_common::network::interface::{InterfaceKind, NetworkInterface};
use dnswitch_core::{Dispatcher, probe};

pub fn list(dispatcher: &Dispatcher, cfg: &Config) -> anyhow::Result<()> {
    print::header("network interfaces", cfg.quiet);
    let interfaces = probe::list_interfaces(dispatcher)?;
    if interfaces.is_empty() {
        warn!("No network interfaces found.");
        return Ok(());
    }

    print_interfaces(&interfaces);
    Ok(())
}

fn print_interfaces(interfaces: &[NetworkInterface]) {
    for (idx, interface) in interfaces.iter().enumerate() {
        print::tree_head(idx + 1, &interface.system_name);
        print::as_tree_one_level(format::interface_to_details(interface));
        if idx + 1 != interfaces.len() {
            mprint!();
        }
    }
}

/// Picks the interface to operate on.
///
/// `--interface` wins. Otherwise the active interface is detected, and when none is
/// found the operator may pick one by hand if `allow_manual` is set.
pub fn resolve(
    dispatcher: &Dispatcher,
    cfg: &Config,
    allow_manual: bool,
) -> anyhow::Result<NetworkInterface> {
    if let Some(name) = &cfg.interface {
        let interface = named(dispatcher, name);
        info!("Using interface: {}", interface.display_name);
        return Ok(interface);
    }

    match probe::active_interface(dispatcher) {
        Ok(interface) => {
            info!("Detected active interface: {}", interface.display_name);
            Ok(interface)
        }
        Err(DnsError::NoActiveInterface) if allow_manual => {
            warn!("No active network interface detected.");
            choose(dispatcher)
        }
        Err(DnsError::NoActiveInterface) => {
            bail!("no active network interface found, pass one with --interface")
        }
        Err(err) => Err(err).context("could not detect the active interface"),
    }
}

/// An interface the operator named explicitly. Enumeration problems do not stop us,
/// the name is handed to the platform as given.
fn named(dispatcher: &Dispatcher, name: &str) -> NetworkInterface {
    match probe::find_interface(dispatcher, name) {
        Ok(Some(interface)) => interface,
        Ok(None) => {
            warn!("Interface '{name}' was not found, using it as given.");
            NetworkInterface::new(name, true, InterfaceKind::Unknown)
        }
        Err(err) => {
            warn!("Could not enumerate interfaces: {err}");
            NetworkInterface::new(name, true, InterfaceKind::Unknown)
        }
    }
}

fn choose(dispatcher: &Dispatcher) -> anyhow::Result<NetworkInterface> {
    let mut interfaces = probe::list_interfaces(dispatcher)?;
    if interfaces.is_empty() {
        bail!("no network interfaces available");
    }

    print::header("select an interface", 0);
    for (idx, interface) in interfaces.iter().enumerate() {
        let status = if interface.is_active { "active" } else { "inactive" };
        let detail = format!("{}, {}", interface.kind, status);
        print::menu_item(idx + 1, &interface.display_name, Some(&detail));
    }

    let choice = input::read_choice(interfaces.len())?;
    Ok(interfaces.swap_remove(choice - 1))
}
