// src/scrape.rs
use std::error::Error;

use crate::{
    config::HarvestConfig,
    core::net::PageSource,
    model::DraftRecord,
    progress::Progress,
    specs,
};

/// Fetch and parse one draft-finder page per year, in year order.
/// Any failed year aborts the run; nothing partial is returned.
pub fn collect_drafts(
    cfg: &HarvestConfig,
    source: &dyn PageSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<DraftRecord>, Box<dyn Error>> {
    let years: Vec<u32> = cfg.years().collect();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(years.len());
        p.log("Fetching draft classes…");
    }

    let mut all = Vec::new();
    for year in years {
        let url = cfg.url_for_year(year);
        let rows = match source.fetch(&url).and_then(|html| specs::draft::parse_draft_page(&html)) {
            Ok(rows) => rows,
            Err(e) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(year, &e.to_string());
                    p.finish();
                }
                return Err(format!("draft year {year}: {e}").into());
            }
        };
        if rows.is_empty() {
            logw!("Draft year {year}: no rows on page");
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(year, rows.len());
        }
        all.extend(rows);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(all)
}
