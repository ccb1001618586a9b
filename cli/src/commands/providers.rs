use colored::*;

use crate::mprint;
use crate::terminal::{colors, format, print};
use dnswitch_common::config::Config;
use dnswitch_core::ProviderRegistry;

pub fn list(registry: &ProviderRegistry, cfg: &Config) {
    print::header("dns providers", cfg.quiet);

    for (idx, provider) in registry.providers().iter().enumerate() {
        let origin: ColoredString = if ProviderRegistry::is_default(&provider.name) {
            "default".color(colors::SEPARATOR)
        } else {
            "custom".color(colors::ACCENT)
        };
        print::tree_head(idx + 1, &provider.name);
        print::as_tree_one_level(vec![
            (
                "Servers".to_string(),
                format::join_addresses(&provider.addresses).color(colors::IPV4_ADDR),
            ),
            ("Origin".to_string(), origin),
        ]);
        mprint!();
    }

    if registry.custom_names().is_empty() {
        print::print_status("No custom DNS servers found.");
    }
}
