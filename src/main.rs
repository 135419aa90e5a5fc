use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use mc_tui::bootstrap::{self, ConfigOverrides};

#[derive(Parser)]
#[command(name = "multiclip")]
#[command(about = "Ten-slot multi-clipboard driven by global shortcuts", long_about = None)]
struct Cli {
    /// Config file to read instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Slot file to load and save
    #[arg(long, value_name = "FILE")]
    slots_file: Option<PathBuf>,

    /// Open the slot viewer at startup
    #[arg(long)]
    show: bool,
}

impl From<Cli> for ConfigOverrides {
    fn from(cli: Cli) -> Self {
        ConfigOverrides {
            config_path: cli.config,
            slots_file: cli.slots_file,
            show: cli.show,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    bootstrap::run(cli.into())
}
