// src/bin/harvest.rs
use color_eyre::eyre::eyre;
use rsci_merge::{cli, config::HarvestConfig, log, progress::ConsoleProgress, runner};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let paths = match cli::from_env().map_err(|e| eyre!("{e}"))? {
        cli::Command::Help => {
            eprintln!("{}", cli::HELP);
            return Ok(());
        }
        cli::Command::Run(paths) => paths,
    };

    let cfg = HarvestConfig::with_out_dir(&paths.out_dir);
    let mut progress = ConsoleProgress::default();
    runner::run_harvest(&cfg, Some(&mut progress)).map_err(|e| eyre!("harvest failed: {e}"))?;
    Ok(())
}
