use anyhow::bail;
use tracing::info;

use crate::commands::interfaces;
use crate::terminal::{format, print, spinner};
use dnswitch_common::config::Config;
use dnswitch_core::{Dispatcher, ProviderRegistry, reader, writer};

pub fn show(
    dispatcher: &Dispatcher,
    registry: &ProviderRegistry,
    cfg: &Config,
) -> anyhow::Result<()> {
    let interface = interfaces::resolve(dispatcher, cfg, false)?;
    let observation = reader::observe(dispatcher, registry, &interface.system_name);

    print::header("current dns", cfg.quiet);
    print::aligned_line("Interface", interface.display_name.as_str());
    print::aligned_line("Current DNS", format::provider_name(&observation));
    if !observation.addresses.is_empty() {
        print::aligned_line("Addresses", format::observed_addresses(&observation));
    }
    Ok(())
}

pub fn set(
    dispatcher: &Dispatcher,
    registry: &ProviderRegistry,
    cfg: &Config,
    provider: &str,
) -> anyhow::Result<()> {
    if registry.addresses(provider).is_none() {
        bail!(
            "unknown provider '{provider}', known providers: {}",
            registry.ordered_names().join(", ")
        );
    }

    let interface = interfaces::resolve(dispatcher, cfg, false)?;
    let applied = spinner::with_spinner(format!("Switching DNS to {provider}"), || {
        writer::apply_provider(dispatcher, registry, &interface.system_name, provider)
    })?;

    if let Some(applied) = applied {
        info!(
            "DNS changed to {} ({}).",
            applied.name,
            format::join_addresses(&applied.addresses)
        );
    }
    Ok(())
}

pub fn clear(dispatcher: &Dispatcher, cfg: &Config) -> anyhow::Result<()> {
    let interface = interfaces::resolve(dispatcher, cfg, false)?;
    spinner::with_spinner("Clearing DNS settings", || {
        writer::clear_dns(dispatcher, &interface.system_name)
    })?;
    info!("All DNS settings have been cleared.");
    Ok(())
}
