//! cli stuff
use {
    crate::theme::ThemeKey,
    clap::{Parser, Subcommand},
    std::path::PathBuf,
};

/// Browse, render and rotate the site's color themes
#[derive(Parser, Debug)]
#[command(name = "huewheel", version, about)]
pub struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace), overriding the config
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read settings from this file instead of the usual locations
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// What to do
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// the subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every registered theme in cycle order
    List,

    /// Show the style bundle of a theme
    Show {
        /// The theme id, e.g. `blue-serenity`
        theme: ThemeKey,

        /// Print JSON instead of a readable report
        #[arg(long)]
        json: bool,
    },

    /// Print the CSS custom properties of a theme
    Css {
        /// The theme id; the default theme if omitted
        theme: Option<ThemeKey>,

        /// Print bare `name: value;` lines instead of a `:root` block
        #[arg(long)]
        bare: bool,
    },

    /// Run the theme controller and print each automatic switch
    Rotate {
        /// Stop after this many switches
        #[arg(short, long, default_value_t = 13)]
        ticks: usize,

        /// Seconds between switches (1 to 3600); the configured value if omitted
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=3600))]
        interval: Option<u64>,

        /// Seed for the initial random pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the default configuration or its JSON schema
    Config {
        /// Print the JSON schema instead
        #[arg(short, long)]
        schema: bool,

        /// Write the defaults to the global config file instead of printing
        #[arg(long)]
        save: bool,
    },
}
