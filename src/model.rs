// src/model.rs
//! Typed records the merge works on.
//!
//! Every record is built once from a loaded table and then only copied and
//! extended. Text fields stay text (ranks can be "NR", years can be blank);
//! numbers are parsed at the point of use with [`parse_num`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical player key: the file stem of a basketball-reference profile link
/// (`/players/j/jamesle01.html` → `jamesle01`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl AsRef<str> for PlayerId {
    fn as_ref(&self) -> &str { &self.0 }
}

/// Numeric cell, or `None` for blank / unparseable text.
pub fn parse_num(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() { return None; }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Blank cells become `None`.
pub fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(s.to_string()) }
}

/// One stat value and its 0-based ordinal rank for a single season.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StatCell {
    pub value: Option<f64>,
    pub rank: Option<f64>,
}

/// One player-season from the seasons input.
#[derive(Clone, Debug, PartialEq)]
pub struct SeasonRecord {
    pub player_id: PlayerId,
    pub season: String,
    pub high_school: String,
    pub games: Option<f64>,
    pub minutes: Option<f64>,
    pub name: String,
    pub college: String,
    pub link: String,
    /// Aligned with `MergeConfig::stats`
    pub stats: Vec<StatCell>,
    /// Position of the source row in the seasons table
    pub row: usize,
}

impl SeasonRecord {
    /// `"2011-12"` → `2011`
    pub fn start_year(&self) -> Option<i32> {
        self.season.get(..4)?.parse().ok()
    }

    /// Total minutes: games × minutes per game.
    pub fn minutes_played(&self) -> Option<f64> {
        Some(self.games? * self.minutes?)
    }

    pub fn stat(&self, i: usize) -> StatCell {
        self.stats.get(i).copied().unwrap_or_default()
    }
}

/// One entry of the recruit ranking roster, or a synthesized addition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecruitRecord {
    pub name: String,
    pub link: Option<String>,
    pub rank: Option<String>,
    pub recruit_year: Option<String>,
    pub college: Option<String>,
    pub draft_year: Option<String>,
    /// Input columns the merge does not interpret: (header, value)
    pub extra: Vec<(String, String)>,
}

impl RecruitRecord {
    pub fn rank_num(&self) -> Option<f64> {
        self.rank.as_deref().and_then(parse_num)
    }

    pub fn recruit_year_num(&self) -> Option<i32> {
        self.recruit_year.as_deref()?.trim().parse().ok()
    }

    /// De-duplication key (name + link).
    pub fn dedup_key(&self) -> (String, String) {
        (self.name.clone(), self.link.clone().unwrap_or_default())
    }

    pub fn extra_value(&self, header: &str) -> &str {
        self.extra
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}

/// One harvested draft-finder row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRecord {
    #[serde(rename = "Rk", default)]
    pub rank: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Rd", default)]
    pub round: String,
    #[serde(rename = "Pk", default)]
    pub pick: String,
    pub name: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub link: String,
}

/// Draft fields copied from a matched [`DraftRecord`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftOutcome {
    pub pick_overall: String,
    pub pick_number: String,
    pub pick_round: String,
    pub draft_year: String,
}

impl From<&DraftRecord> for DraftOutcome {
    fn from(d: &DraftRecord) -> Self {
        Self {
            pick_overall: d.rank.clone(),
            pick_number: d.pick.clone(),
            pick_round: d.round.clone(),
            draft_year: d.year.clone(),
        }
    }
}

/// Aggregates for one stat; `None` means no qualifying data.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StatAggregates {
    pub career_mean: Option<f64>,
    pub top_mean: Option<f64>,
    pub median: Option<f64>,
    pub career_rank_mean: Option<f64>,
    pub top_rank_mean: Option<f64>,
    pub rank_median: Option<f64>,
}

/// Everything derived from a player's seasons.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerAggregates {
    /// Aligned with `MergeConfig::stats`
    pub stats: Vec<StatAggregates>,
    pub total_seasons: usize,
    pub valid_seasons: usize,
}

/// The merge's output unit.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedPlayerRecord {
    pub recruit: RecruitRecord,
    pub player_id: Option<PlayerId>,
    pub draft: Option<DraftOutcome>,
    /// `None` when the player has no identifier
    pub aggregates: Option<PlayerAggregates>,
}

impl EnrichedPlayerRecord {
    pub fn new(recruit: RecruitRecord, player_id: Option<PlayerId>) -> Self {
        Self { recruit, player_id, draft: None, aggregates: None }
    }

    /// Matched draft year, else whatever the roster carried.
    pub fn draft_year(&self) -> Option<&str> {
        match &self.draft {
            Some(d) => Some(d.draft_year.as_str()),
            None => self.recruit.draft_year.as_deref(),
        }
    }

    pub fn reached_nba(&self) -> bool {
        self.player_id.is_some()
    }

    pub fn stat_aggregates(&self, i: usize) -> Option<&StatAggregates> {
        self.aggregates.as_ref()?.stats.get(i)
    }
}
