// src/bin/cli.rs
use market_lens::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()?;
    Ok(())
}
