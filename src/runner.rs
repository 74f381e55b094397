// src/runner.rs
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::{
    config::{HarvestConfig, MergeConfig},
    core::net::{HttpSource, PageSource},
    csv::read_records,
    file::{write_dataset, write_serialized},
    merge::{self, MergeInputs},
    model::DraftRecord,
    progress::Progress,
    scrape,
    store::DataSet,
};

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

/// Harvest every configured draft year over HTTPS and write `draft.csv`.
pub fn run_harvest(cfg: &HarvestConfig, progress: Option<&mut dyn Progress>) -> Result<RunSummary, Box<dyn Error>> {
    let source = HttpSource::new()?;
    harvest_from(cfg, &source, progress)
}

/// Same as [`run_harvest`] with a caller-supplied page source.
pub fn harvest_from(
    cfg: &HarvestConfig,
    source: &dyn PageSource,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let rows = scrape::collect_drafts(cfg, source, progress)?;
    let path = write_serialized(&cfg.out_path(), &rows)?;
    Ok(RunSummary { files_written: vec![path] })
}

pub fn load_draft(path: &Path) -> Result<Vec<DraftRecord>, Box<dyn Error>> {
    let file = File::open(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let rows: Vec<DraftRecord> =
        read_records(BufReader::new(file)).map_err(|e| format!("{}: {e}", path.display()))?;
    logd!("Loaded {} draft rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn load_inputs(cfg: &MergeConfig) -> Result<MergeInputs, Box<dyn Error>> {
    Ok(MergeInputs {
        seasons: DataSet::load(&cfg.paths.seasons_input())?,
        roster: DataSet::load(&cfg.paths.rsci_input())?,
        draft: load_draft(&cfg.paths.draft())?,
    })
}

/// Load the three inputs, merge, and write the three outputs.
pub fn run_merge(cfg: &MergeConfig) -> Result<RunSummary, Box<dyn Error>> {
    let inputs = load_inputs(cfg)?;
    logf!(
        "Inputs: {} season rows, {} roster rows, {} draft rows",
        inputs.seasons.len(), inputs.roster.len(), inputs.draft.len()
    );

    let out = merge::run(&inputs, cfg)?;

    let files_written = vec![
        write_dataset(&cfg.paths.players_out(), &out.players_table)?,
        write_dataset(&cfg.paths.seasons_out(), &out.seasons_table)?,
        write_dataset(&cfg.paths.overview_out(), &out.overview_table)?,
    ];
    Ok(RunSummary { files_written })
}
