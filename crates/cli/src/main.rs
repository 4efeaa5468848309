use anyhow::Result;
use clap::Parser;
use env_logger::init;
use fa_paths_cli::cli::Cli;

fn main() -> Result<()> {
    init();
    Cli::parse().run()
}
