// src/bin/merge.rs
use color_eyre::eyre::eyre;
use rsci_merge::{cli, config::MergeConfig, log, logf, runner};

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

    let cfg = MergeConfig::with_paths(paths);
    let summary = runner::run_merge(&cfg).map_err(|e| eyre!("merge failed: {e}"))?;
    for path in &summary.files_written {
        logf!("Output: {}", path.display());
    }
    Ok(())
}
