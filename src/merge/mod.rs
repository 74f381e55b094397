// src/merge/mod.rs
//! # Merge stage
//!
//! Joins the recruit roster, the season table and the harvested draft table
//! into three outputs. Each step takes the records by value and returns
//! extended copies; nothing is edited in place once loaded.
//!
//! ```text
//! roster ─ dedup ─ identify ─ augment ─ draft ─ aggregates ─ colleges ─ sort ─→ players.csv
//!                                ↑                   ↑                      ├─→ seasons.csv
//!                           SeasonIndex ─────────────┘                      └─→ overview.csv
//! ```
//!
//! Missing keys, unmatched drafts and players without qualifying seasons are
//! data, not errors: they leave cells blank.

pub mod aggregate;
pub mod college;
pub mod draft;
pub mod identity;
pub mod output;
pub mod overview;
pub mod roster;
pub mod seasons;

use std::error::Error;

use crate::config::MergeConfig;
use crate::model::{DraftRecord, EnrichedPlayerRecord, PlayerAggregates, StatAggregates};
use crate::store::DataSet;

pub use draft::{DraftMatcher, MatchTier};
pub use identity::resolve_identifier;
pub use seasons::{PlayerHistory, SeasonIndex};

/// The three loaded inputs.
pub struct MergeInputs {
    pub seasons: DataSet,
    pub roster: DataSet,
    pub draft: Vec<DraftRecord>,
}

/// The three output tables plus the typed player records behind the first.
pub struct MergeOutput {
    pub players: Vec<EnrichedPlayerRecord>,
    pub players_table: DataSet,
    pub seasons_table: DataSet,
    pub overview_table: DataSet,
}

/// Attach aggregates to every player with an identifier. An identifier
/// with no seasons at all still gets zero counts.
pub fn attach_aggregates(
    players: Vec<EnrichedPlayerRecord>,
    index: &SeasonIndex,
    cfg: &MergeConfig,
) -> Vec<EnrichedPlayerRecord> {
    players
        .into_iter()
        .map(|p| {
            let aggregates = p.player_id.as_ref().map(|id| match index.get(id) {
                Some(h) => aggregate::aggregate_player(h, cfg),
                None => PlayerAggregates {
                    stats: vec![StatAggregates::default(); cfg.stats.len()],
                    total_seasons: 0,
                    valid_seasons: 0,
                },
            });
            EnrichedPlayerRecord { aggregates, ..p }
        })
        .collect()
}

/// Run the whole merge in memory.
pub fn run(inputs: &MergeInputs, cfg: &MergeConfig) -> Result<MergeOutput, Box<dyn Error>> {
    let season_records = seasons::parse_seasons(&inputs.seasons, cfg)?;
    let index = SeasonIndex::build(season_records, &cfg.minutes);

    let roster = roster::parse_roster(&inputs.roster)?;
    let raw_count = roster.records.len();
    let recruits = roster::dedup_recruits(roster.records);
    logf!("Roster: {} entries ({} after de-duplication)", raw_count, recruits.len());

    let players = roster::identify(recruits);
    let players = roster::augment_roster(players, &index, cfg);
    let players = draft::attach_draft(players, &inputs.draft);
    let players = attach_aggregates(players, &index, cfg);

    // Overview uses the merged records before college clean-up and ordering;
    // neither affects it.
    let overview_rows = overview::build_overview(&players, cfg);

    let players = college::normalize_colleges(players);
    let players = output::sort_players(players);

    let players_table = output::players_table(&players, &roster.headers, cfg);
    let seasons_table = output::filter_seasons(&inputs.seasons, &index, &players);
    let overview_table = overview::overview_table(&overview_rows, cfg);

    Ok(MergeOutput { players, players_table, seasons_table, overview_table })
}
