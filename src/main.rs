use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use inventory::{start_repl, DEFAULT_INVENTORY_FILE};
use log::error;

#[derive(Parser)]
#[command(version, about = "Interactive product inventory backed by a text file", long_about = None)]
struct Cli {
    /// Sets the inventory file to use
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "INVENTORY_FILE",
        default_value = DEFAULT_INVENTORY_FILE
    )]
    file: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Err(err) = start_repl(cli.file) {
        error!("terminal session failed: {err}");
        std::process::exit(1);
    }
}
