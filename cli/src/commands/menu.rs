use std::thread;

use anyhow::bail;
use tracing::{error, info, warn};

use crate::commands::interfaces;
use crate::mprint;
use crate::terminal::{format, input, print, spinner};
use dnswitch_common::config::Config;
use dnswitch_common::network::interface::NetworkInterface;
use dnswitch_core::{Dispatcher, ProviderRegistry, reader, writer};

/// What a menu number stands for, given the providers listed above the fixed entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Apply(String),
    AddCustom,
    RemoveCustom,
    ClearAll,
    Exit,
}

impl MenuAction {
    pub const FIXED_ENTRIES: [&'static str; 4] = [
        "Add custom DNS",
        "Remove custom DNS",
        "Clear all DNS settings",
        "Exit",
    ];

    /// `choice` is 1-based and already range checked against `options.len() + 4`.
    pub fn from_choice(choice: usize, options: &[String]) -> Option<Self> {
        if choice == 0 {
            return None;
        }
        if let Some(name) = options.get(choice - 1) {
            return Some(Self::Apply(name.clone()));
        }
        match choice - options.len() {
            1 => Some(Self::AddCustom),
            2 => Some(Self::RemoveCustom),
            3 => Some(Self::ClearAll),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}

pub fn run(
    dispatcher: &Dispatcher,
    registry: &mut ProviderRegistry,
    cfg: &Config,
) -> anyhow::Result<()> {
    if !console::user_attended() {
        bail!(
            "the interactive menu needs a terminal, use a subcommand such as `show` or `set` instead"
        );
    }

    let interface = interfaces::resolve(dispatcher, cfg, true)?;

    loop {
        mprint!();
        display_current_dns(dispatcher, registry, &interface, cfg);
        let options = registry.ordered_names();
        display_menu(registry, &options, cfg);

        let choice = input::read_choice(options.len() + MenuAction::FIXED_ENTRIES.len())?;
        let Some(action) = MenuAction::from_choice(choice, &options) else {
            continue;
        };
        if action == MenuAction::Exit {
            break;
        }

        handle(action, dispatcher, registry, &interface)?;
        thread::sleep(cfg.redraw_delay);
    }

    mprint!();
    print::centerln("Thank you for using DNSwitch!");
    print::end_of_program();
    Ok(())
}

fn display_current_dns(
    dispatcher: &Dispatcher,
    registry: &ProviderRegistry,
    interface: &NetworkInterface,
    cfg: &Config,
) {
    let observation = reader::observe(dispatcher, registry, &interface.system_name);
    print::header("current dns", cfg.quiet);
    print::aligned_line("Current DNS", format::provider_name(&observation));
    if !observation.addresses.is_empty() {
        print::aligned_line("Addresses", format::observed_addresses(&observation));
    }
}

fn display_menu(registry: &ProviderRegistry, options: &[String], cfg: &Config) {
    print::header("available options", cfg.quiet);
    for (idx, name) in options.iter().enumerate() {
        let addresses = registry.addresses(name).unwrap_or_default();
        print::menu_item(idx + 1, name, Some(&format::join_addresses(addresses)));
    }
    for (offset, label) in MenuAction::FIXED_ENTRIES.iter().enumerate() {
        print::menu_item(options.len() + offset + 1, label, None);
    }
    mprint!();
}

/// Runs one menu action. Platform failures are reported and the menu carries on;
/// only a broken terminal ends the loop.
fn handle(
    action: MenuAction,
    dispatcher: &Dispatcher,
    registry: &mut ProviderRegistry,
    interface: &NetworkInterface,
) -> anyhow::Result<()> {
    match action {
        MenuAction::Apply(name) => {
            let result = spinner::with_spinner(format!("Switching DNS to {name}"), || {
                writer::apply_provider(dispatcher, registry, &interface.system_name, &name)
            });
            match result {
                Ok(Some(provider)) => info!(
                    "DNS changed to {} ({}).",
                    provider.name,
                    format::join_addresses(&provider.addresses)
                ),
                Ok(None) => warn!("Provider '{name}' is no longer available."),
                Err(err) => error!("Error setting DNS: {err}"),
            }
        }
        MenuAction::AddCustom => add_custom(registry)?,
        MenuAction::RemoveCustom => remove_custom(registry)?,
        MenuAction::ClearAll => {
            let result = spinner::with_spinner("Clearing DNS settings", || {
                writer::clear_dns(dispatcher, &interface.system_name)
            });
            match result {
                Ok(()) => info!("All DNS settings have been cleared."),
                Err(err) => error!("Error clearing DNS settings: {err}"),
            }
        }
        MenuAction::Exit => {}
    }
    Ok(())
}

fn add_custom(registry: &mut ProviderRegistry) -> anyhow::Result<()> {
    let name = input::prompt("Enter DNS name:")?;
    if name.is_empty() {
        warn!("DNS name cannot be empty.");
        return Ok(());
    }
    let first = input::prompt("Enter first IP address:")?;
    let second = input::prompt("Enter second IP address:")?;

    match registry.add(&name, &first, &second) {
        Ok(()) => info!("Custom DNS '{name}' added successfully."),
        Err(err) => error!("Error saving custom DNS: {err}"),
    }
    Ok(())
}

fn remove_custom(registry: &mut ProviderRegistry) -> anyhow::Result<()> {
    let custom = registry.custom_names();
    if custom.is_empty() {
        print::print_status("No custom DNS servers found.");
        return Ok(());
    }

    print::header("custom dns servers", 0);
    for (idx, name) in custom.iter().enumerate() {
        let addresses = registry.addresses(name).unwrap_or_default();
        print::menu_item(idx + 1, name, Some(&format::join_addresses(addresses)));
    }
    print::menu_item(custom.len() + 1, "Exit", None);

    let choice = input::read_choice(custom.len() + 1)?;
    let Some(name) = custom.get(choice - 1) else {
        print::print_status("Exiting remove custom DNS menu.");
        return Ok(());
    };

    match registry.remove(name) {
        Ok(true) => info!("Custom DNS '{name}' removed successfully."),
        Ok(false) => warn!("Custom DNS '{name}' was not removed."),
        Err(err) => error!("Error saving custom DNS: {err}"),
    }
    Ok(())
}
