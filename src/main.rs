use anyhow::Result;
use clap::Parser;
use impensa::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
