use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = mkpath::cli::Cli::parse();
    cli.run()
}
