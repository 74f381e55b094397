// src/specs/draft.rs
//
// Draft-finder results page: one table `#stats`, one row per pick.
//
// Cell positions (th + td, in document order):
//   0 Rk | 1 Year | 3 Rd | 4 Pk | 6 Player (anchor to profile) | 10 College
// Repeated header rows inside the body carry class `thead` and are skipped.

use std::error::Error;

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::normalize_ws;
use crate::model::DraftRecord;

const CELL_RANK: usize = 0;
const CELL_YEAR: usize = 1;
const CELL_ROUND: usize = 3;
const CELL_PICK: usize = 4;
const CELL_PLAYER: usize = 6;
const CELL_COLLEGE: usize = 10;

fn selector(css: &str) -> Result<Selector, Box<dyn Error>> {
    Selector::parse(css).map_err(|e| format!("bad selector {css}: {e:?}").into())
}

fn text_of(cell: Option<&ElementRef>) -> String {
    cell.map(|c| normalize_ws(&c.text().collect::<String>())).unwrap_or_default()
}

/// Extract every pick row from a draft-finder page.
/// A page without the results table yields no rows.
pub fn parse_draft_page(html: &str) -> Result<Vec<DraftRecord>, Box<dyn Error>> {
    let doc = Html::parse_document(html);
    let rows_sel = selector("#stats tbody tr")?;
    let link_sel = selector("a")?;

    let mut out = Vec::new();
    for row in doc.select(&rows_sel) {
        if row.value().classes().any(|c| c == "thead") {
            continue;
        }
        let cells: Vec<ElementRef> = row.children().filter_map(ElementRef::wrap).collect();
        if cells.is_empty() {
            continue;
        }

        let player = cells.get(CELL_PLAYER);
        let link = player
            .and_then(|c| c.select(&link_sel).next())
            .and_then(|a| a.value().attr("href"))
            .unwrap_or_default();

        out.push(DraftRecord {
            rank: text_of(cells.get(CELL_RANK)),
            year: text_of(cells.get(CELL_YEAR)),
            round: text_of(cells.get(CELL_ROUND)),
            pick: text_of(cells.get(CELL_PICK)),
            name: text_of(player),
            college: text_of(cells.get(CELL_COLLEGE)),
            link: s!(link),
        });
    }
    Ok(out)
}
