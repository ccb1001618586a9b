pub mod dns;
pub mod interfaces;
pub mod menu;
pub mod providers;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use dnswitch_common::config::{Config, DEFAULT_PROVIDERS_FILE, REDRAW_DELAY};

#[derive(Parser)]
#[command(name = "dnswitch")]
#[command(about = "Inspect and switch the DNS servers of a network interface.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON file holding custom providers
    #[arg(long, global = true, default_value = DEFAULT_PROVIDERS_FILE)]
    pub providers_file: PathBuf,

    /// Interface (or macOS network service) to operate on instead of auto-detecting one
    #[arg(short, long, global = true)]
    pub interface: Option<String>,

    /// Hide banners and headers
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show debug logging (-vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand, Clone, PartialEq, Eq, Debug)]
pub enum Commands {
    /// Interactive menu (default)
    #[command(alias = "m")]
    Menu,
    /// List network interfaces with their state and kind
    #[command(alias = "i")]
    Interfaces,
    /// Show the DNS servers currently configured
    #[command(alias = "s")]
    Show,
    /// Apply a provider by name
    Set { provider: String },
    /// Reset DNS to automatic
    Clear,
    /// List default and custom providers
    #[command(alias = "p")]
    Providers,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            providers_file: self.providers_file.clone(),
            interface: self.interface.clone(),
            no_banner: self.no_banner,
            quiet: self.quiet,
            redraw_delay: REDRAW_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_menu() {
        let cli = CommandLine::try_parse_from(["dnswitch"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.providers_file, PathBuf::from("custom_dns.json"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            CommandLine::try_parse_from(["dnswitch", "set", "Shecan", "-i", "Wi-Fi", "-qq"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Set {
                provider: "Shecan".to_string()
            })
        );
        let cfg = cli.to_config();
        assert_eq!(cfg.interface.as_deref(), Some("Wi-Fi"));
        assert_eq!(cfg.quiet, 2);
    }

    #[test]
    fn aliases() {
        let cli = CommandLine::try_parse_from(["dnswitch", "i"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Interfaces));
    }
}
