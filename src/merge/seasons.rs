// src/merge/seasons.rs
//
// Seasons grouped by player, built once per run. Each history also keeps
// the positions of its qualifying seasons so aggregates never re-filter.

use std::collections::HashMap;
use std::error::Error;

use crate::config::{MergeConfig, MinutesRule};
use crate::model::{PlayerId, SeasonRecord, StatCell, parse_num};
use crate::store::DataSet;

/// Build typed season records from the seasons table.
///
/// Rows in an excluded season, or with a blank `bbrID`, are dropped.
pub fn parse_seasons(ds: &DataSet, cfg: &MergeConfig) -> Result<Vec<SeasonRecord>, Box<dyn Error>> {
    let id_col = Some(ds.require_column("bbrID", "seasons")?);
    let season_col = Some(ds.require_column("Season", "seasons")?);
    let hs_col = ds.column("HS");
    let g_col = ds.column("G");
    let mp_col = ds.column("MP");
    let name_col = ds.column("name");
    let college_col = ds.column("college");
    let link_col = ds.column("link");

    let stat_cols: Vec<(Option<usize>, Option<usize>)> = cfg
        .stats
        .iter()
        .map(|s| (ds.column(&s.column), ds.column(&s.rank_column())))
        .collect();
    for (spec, (v, _)) in cfg.stats.iter().zip(&stat_cols) {
        if v.is_none() {
            logw!("seasons: no '{}' column; its aggregates will be empty", spec.column);
        }
    }

    let mut out = Vec::with_capacity(ds.len());
    for (row_ix, row) in ds.rows.iter().enumerate() {
        let id = ds.cell(row, id_col).trim();
        let season = ds.cell(row, season_col).trim();
        if id.is_empty() { continue; }
        if cfg.excluded_seasons.iter().any(|s| s == season) { continue; }

        let stats = stat_cols
            .iter()
            .map(|&(v, r)| StatCell {
                value: parse_num(ds.cell(row, v)),
                rank: parse_num(ds.cell(row, r)),
            })
            .collect();

        out.push(SeasonRecord {
            player_id: PlayerId::new(id),
            season: season.to_string(),
            high_school: ds.cell(row, hs_col).trim().to_string(),
            games: parse_num(ds.cell(row, g_col)),
            minutes: parse_num(ds.cell(row, mp_col)),
            name: ds.cell(row, name_col).trim().to_string(),
            college: ds.cell(row, college_col).trim().to_string(),
            link: ds.cell(row, link_col).trim().to_string(),
            stats,
            row: row_ix,
        });
    }
    Ok(out)
}

/// True when the season's total minutes meet its threshold.
pub fn is_qualifying(season: &SeasonRecord, rule: &MinutesRule) -> bool {
    match season.minutes_played() {
        Some(mp) => mp >= rule.threshold(&season.season),
        None => false,
    }
}

/// A player's seasons, debut first.
#[derive(Clone, Debug)]
pub struct PlayerHistory {
    pub player_id: PlayerId,
    seasons: Vec<SeasonRecord>,
    qualifying: Vec<usize>,
}

impl PlayerHistory {
    fn new(player_id: PlayerId, mut seasons: Vec<SeasonRecord>, rule: &MinutesRule) -> Self {
        // Stable: file order is kept among seasons with the same start year.
        seasons.sort_by_key(|s| s.start_year().unwrap_or(i32::MAX));
        let qualifying = seasons
            .iter()
            .enumerate()
            .filter(|(_, s)| is_qualifying(s, rule))
            .map(|(i, _)| i)
            .collect();
        Self { player_id, seasons, qualifying }
    }

    pub fn seasons(&self) -> &[SeasonRecord] { &self.seasons }

    pub fn debut(&self) -> Option<&SeasonRecord> { self.seasons.first() }

    pub fn qualifying(&self) -> impl Iterator<Item = &SeasonRecord> + '_ {
        self.qualifying.iter().map(|&i| &self.seasons[i])
    }

    /// Qualifying stat cells for one configured stat.
    pub fn qualifying_cells(&self, stat: usize) -> Vec<StatCell> {
        self.qualifying().map(|s| s.stat(stat)).collect()
    }

    pub fn total_seasons(&self) -> usize { self.seasons.len() }

    pub fn valid_seasons(&self) -> usize { self.qualifying.len() }
}

/// `PlayerId → PlayerHistory`, plus first-seen order for deterministic walks.
#[derive(Clone, Debug, Default)]
pub struct SeasonIndex {
    order: Vec<PlayerId>,
    by_id: HashMap<PlayerId, PlayerHistory>,
}

impl SeasonIndex {
    pub fn build(seasons: Vec<SeasonRecord>, rule: &MinutesRule) -> Self {
        let mut order: Vec<PlayerId> = Vec::new();
        let mut grouped: HashMap<PlayerId, Vec<SeasonRecord>> = HashMap::new();
        for s in seasons {
            let entry = grouped.entry(s.player_id.clone()).or_insert_with(|| {
                order.push(s.player_id.clone());
                Vec::new()
            });
            entry.push(s);
        }

        let by_id = grouped
            .into_iter()
            .map(|(id, seasons)| (id.clone(), PlayerHistory::new(id, seasons, rule)))
            .collect::<HashMap<_, _>>();

        logd!("Season index: {} players", by_id.len());
        Self { order, by_id }
    }

    pub fn get(&self, id: &PlayerId) -> Option<&PlayerHistory> {
        self.by_id.get(id)
    }

    /// Histories in order of each player's first row in the input.
    pub fn iter(&self) -> impl Iterator<Item = &PlayerHistory> + '_ {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn len(&self) -> usize { self.by_id.len() }
    pub fn is_empty(&self) -> bool { self.by_id.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEASONS: &str = "\
bbrID,Season,HS,G,MP,name,WS/48,WS/48_rank
aa01,2011-12,\"Akron, OH\",66,20,A,0.10,4
aa01,2010-11,\"Akron, OH\",82,30,A,0.20,1
bb01,1998-99,,50,19,B,0.05,9
bb01,2018-19,,82,36,B,0.30,0
,2005-06,,82,36,Ghost,0.30,0
cc01,2012-13,\"Reno, NV\",,36,C,0.30,0
cc01,2013-14,\"Reno, NV\",82,n/a,C,0.25,2
cc01,2014-15,\"Reno, NV\",82,30,C,0.20,5
";

    fn index() -> SeasonIndex {
        let cfg = MergeConfig::default();
        let ds = DataSet::from_text(SEASONS).unwrap();
        SeasonIndex::build(parse_seasons(&ds, &cfg).unwrap(), &cfg.minutes)
    }

    #[test]
    fn groups_by_player_in_first_seen_order() {
        let ix = index();
        let ids: Vec<&str> = ix.iter().map(|h| h.player_id.as_str()).collect();
        assert_eq!(ids, vec!["aa01", "bb01", "cc01"]);
    }

    #[test]
    fn debut_is_earliest_season() {
        let ix = index();
        let h = ix.get(&PlayerId::new("aa01")).unwrap();
        assert_eq!(h.debut().unwrap().season, "2010-11");
        assert_eq!(h.debut().unwrap().high_school, "Akron, OH");
    }

    #[test]
    fn excluded_season_and_blank_ids_dropped() {
        let ix = index();
        let b = ix.get(&PlayerId::new("bb01")).unwrap();
        assert_eq!(b.total_seasons(), 1);
        assert_eq!(ix.len(), 3);
    }

    #[test]
    fn special_threshold_only_for_its_season() {
        // 50 * 19 = 950: under 1500, over the 915 lockout threshold
        let ix = index();
        let b = ix.get(&PlayerId::new("bb01")).unwrap();
        assert_eq!(b.valid_seasons(), 1);

        let rule = MinutesRule::default();
        let mut s = b.seasons()[0].clone();
        s.season = s!("2003-04");
        assert!(!is_qualifying(&s, &rule));
        s.season = s!("2011-12");
        assert!(!is_qualifying(&s, &rule)); // 950 < 1207
        s.games = Some(66.0);
        assert!(is_qualifying(&s, &rule)); // 1254 >= 1207
        s.season = s!("2012-13");
        assert!(!is_qualifying(&s, &rule)); // 1254 < 1500
    }

    #[test]
    fn valid_never_exceeds_total() {
        let ix = index();
        for h in ix.iter() {
            assert!(h.valid_seasons() <= h.total_seasons());
        }
        // 2011-12: 66 * 20 = 1320 >= 1207; 2010-11: 2460 >= 1500
        assert_eq!(ix.get(&PlayerId::new("aa01")).unwrap().valid_seasons(), 2);
    }

    #[test]
    fn unparseable_games_or_minutes_never_qualify() {
        let ix = index();
        let c = ix.get(&PlayerId::new("cc01")).unwrap();
        assert_eq!(c.total_seasons(), 3);
        assert_eq!(c.valid_seasons(), 1);
        let seasons: Vec<&str> = c.qualifying().map(|s| s.season.as_str()).collect();
        assert_eq!(seasons, vec!["2014-15"]);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let ds = DataSet::from_text("Season,G\n2001-02,1\n").unwrap();
        assert!(parse_seasons(&ds, &MergeConfig::default()).is_err());
    }
}
