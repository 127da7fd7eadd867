use std::path::Path;

use anyhow::Result;
use clap::Subcommand;
use shared::config::ClientConfig;
use web::{Theme, ThemeController};

use super::open_app;

#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// Print the current theme and its palette
    Show,
    /// Switch between light and dark
    Toggle,
    /// Switch to a specific theme
    Set {
        #[arg(value_name = "THEME")]
        theme: Theme,
    },
}

pub fn run(command: &ThemeCommand, config: ClientConfig, storage: &Path) -> Result<()> {
    let app = open_app(config, storage);
    let theme = app.theme();
    theme.initialize();

    match command {
        ThemeCommand::Show => print_theme(theme),
        ThemeCommand::Toggle => {
            theme.toggle();
            println!("Theme set to {}", theme.current());
        }
        ThemeCommand::Set { theme: requested } => {
            theme.set_theme(*requested);
            println!("Theme set to {}", theme.current());
        }
    }
    Ok(())
}

fn print_theme(theme: &ThemeController) {
    let state = theme.state();
    println!("theme: {}", state.current_theme());
    for (role, value) in state.colors().entries() {
        println!("  --color-{role}: {value}");
    }
}
