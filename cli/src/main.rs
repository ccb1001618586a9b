mod commands;
mod terminal;

use commands::{CommandLine, Commands, dns, interfaces, menu, providers};
use dnswitch_common::config::Config;
use dnswitch_core::store::ProviderStore;
use dnswitch_core::{Dispatcher, ProviderRegistry};
use is_root::is_root;
use terminal::{logging, print};
use tracing::{debug, info, warn};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    logging::init(commands.verbose);

    let cfg: Config = commands.to_config();
    let command = commands.command.unwrap_or(Commands::Menu);

    print::banner(cfg.no_banner, cfg.quiet);
    if command == Commands::Menu {
        info!("Welcome to DNSwitch!");
    }
    privilege_warning(&command);

    let dispatcher = Dispatcher::detect();
    debug!(platform = %dispatcher.platform(), "selected DNS strategy");

    match command {
        Commands::Menu => {
            let mut registry = ProviderRegistry::open(ProviderStore::new(&cfg.providers_file));
            menu::run(&dispatcher, &mut registry, &cfg)
        }
        Commands::Interfaces => interfaces::list(&dispatcher, &cfg),
        Commands::Show => {
            let registry = ProviderRegistry::open(ProviderStore::new(&cfg.providers_file));
            dns::show(&dispatcher, &registry, &cfg)
        }
        Commands::Set { provider } => {
            let registry = ProviderRegistry::open(ProviderStore::new(&cfg.providers_file));
            dns::set(&dispatcher, &registry, &cfg, &provider)
        }
        Commands::Clear => dns::clear(&dispatcher, &cfg),
        Commands::Providers => {
            let registry = ProviderRegistry::open(ProviderStore::new(&cfg.providers_file));
            providers::list(&registry, &cfg);
            Ok(())
        }
    }
}

fn privilege_warning(command: &Commands) {
    let changes_dns = matches!(command, Commands::Menu | Commands::Set { .. } | Commands::Clear);
    if !changes_dns {
        return;
    }
    if cfg!(windows) || !is_root() {
        warn!("This program requires administrator privileges to change DNS settings.");
        warn!("Please make sure you're running this program as an administrator.");
    }
}
