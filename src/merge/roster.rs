// src/merge/roster.rs
//
// Recruit roster: load, de-duplicate, attach identifiers, and add NBA
// players the ranking never listed.

use std::collections::{HashMap, HashSet};
use std::error::Error;

use crate::config::MergeConfig;
use crate::config::states::{is_us_state, trailing_token};
use crate::model::{EnrichedPlayerRecord, PlayerId, RecruitRecord, non_empty};
use crate::store::DataSet;

use super::identity::resolve_identifier;
use super::seasons::{PlayerHistory, SeasonIndex};

/// Columns the merge reads from the roster, in the order they are added when
/// the input lacks them.
pub const ROSTER_COLUMNS: [&str; 5] = ["name", "link", "rank", "recruit_year", "college"];

/// Columns produced by the merge; an input column of the same name is not
/// passed through.
pub const DERIVED_COLUMNS: [&str; 2] = ["bbrID", "draft_year"];

/// The roster as loaded: records plus the column order to write them back in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    pub headers: Vec<String>,
    pub records: Vec<RecruitRecord>,
}

pub fn parse_roster(ds: &DataSet) -> Result<Roster, Box<dyn Error>> {
    let name_col = Some(ds.require_column("name", "roster")?);
    let link_col = ds.column("link");
    let rank_col = ds.column("rank");
    let year_col = ds.column("recruit_year");
    let college_col = ds.column("college");
    let draft_year_col = ds.column("draft_year");

    let extra_cols: Vec<(usize, &String)> = ds
        .headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !ROSTER_COLUMNS.contains(&h.as_str()) && !DERIVED_COLUMNS.contains(&h.as_str()))
        .collect();

    let records = ds
        .rows
        .iter()
        .map(|row| RecruitRecord {
            name: ds.cell(row, name_col).trim().to_string(),
            link: non_empty(ds.cell(row, link_col)),
            rank: non_empty(ds.cell(row, rank_col)),
            recruit_year: non_empty(ds.cell(row, year_col)),
            college: non_empty(ds.cell(row, college_col)),
            draft_year: non_empty(ds.cell(row, draft_year_col)),
            extra: extra_cols
                .iter()
                .map(|(i, h)| ((*h).clone(), ds.cell(row, Some(*i)).to_string()))
                .collect(),
        })
        .collect();

    let mut headers: Vec<String> = ds
        .headers
        .iter()
        .filter(|h| !DERIVED_COLUMNS.contains(&h.as_str()))
        .cloned()
        .collect();
    for col in ROSTER_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            headers.push(s!(col));
        }
    }

    Ok(Roster { headers, records })
}

/// Drop repeated (name, link) entries. The later entry's fields win; it
/// takes the slot of the first occurrence.
pub fn dedup_recruits(records: Vec<RecruitRecord>) -> Vec<RecruitRecord> {
    let mut slot: HashMap<(String, String), usize> = HashMap::new();
    let mut out: Vec<RecruitRecord> = Vec::with_capacity(records.len());
    for rec in records {
        match slot.get(&rec.dedup_key()) {
            Some(&i) => {
                logd!("Duplicate recruit '{}' replaced by later entry", rec.name);
                out[i] = rec;
            }
            None => {
                slot.insert(rec.dedup_key(), out.len());
                out.push(rec);
            }
        }
    }
    out
}

/// Attach identifiers from profile links.
pub fn identify(records: Vec<RecruitRecord>) -> Vec<EnrichedPlayerRecord> {
    records
        .into_iter()
        .map(|r| {
            let id = resolve_identifier(r.link.as_deref());
            EnrichedPlayerRecord::new(r, id)
        })
        .collect()
}

/// Roster entry for an NBA player who debuted in or after `min_nba_year`
/// and went to a US high school; `None` when either test fails or the
/// high-school field is empty.
pub fn augmentation_candidate(history: &PlayerHistory, cfg: &MergeConfig) -> Option<RecruitRecord> {
    let debut = history.debut()?;
    if debut.high_school.is_empty() { return None; }

    let state = trailing_token(&debut.high_school);
    let year_ok = debut.start_year().is_some_and(|y| y >= cfg.min_nba_year);
    if !year_ok || !is_us_state(state) { return None; }

    Some(RecruitRecord {
        name: debut.name.clone(),
        link: non_empty(&debut.link),
        rank: None,
        recruit_year: None,
        college: non_empty(&debut.college),
        draft_year: debut.season.get(..4).map(|y| y.to_string()),
        extra: Vec::new(),
    })
}

/// Append qualifying NBA players that have no roster entry yet.
pub fn augment_roster(
    mut players: Vec<EnrichedPlayerRecord>,
    index: &SeasonIndex,
    cfg: &MergeConfig,
) -> Vec<EnrichedPlayerRecord> {
    let mut known: HashSet<PlayerId> = players.iter().filter_map(|p| p.player_id.clone()).collect();
    let before = players.len();

    for history in index.iter() {
        if known.contains(&history.player_id) { continue; }
        if let Some(rec) = augmentation_candidate(history, cfg) {
            known.insert(history.player_id.clone());
            players.push(EnrichedPlayerRecord::new(rec, Some(history.player_id.clone())));
        }
    }

    logf!("Roster augmented with {} NBA players", players.len() - before);
    players
}
