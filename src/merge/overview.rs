// src/merge/overview.rs
//
// One summary row per recruiting rank, over classes old enough for careers
// to have played out.

use crate::config::MergeConfig;
use crate::model::EnrichedPlayerRecord;
use crate::store::DataSet;

use super::aggregate::mean;

#[derive(Clone, Debug, PartialEq)]
pub struct OverviewRow {
    pub rank: u32,
    /// Share of players at this rank who reached the NBA
    pub percent_nba: Option<f64>,
    /// Same share over every player ranked at or above this rank
    pub percent_nba_top: Option<f64>,
    pub count_rank_nba: usize,
    /// Rounded mean of career median ranks, aligned with `MergeConfig::stats`
    pub avg_rank: Vec<Option<f64>>,
}

fn share(hits: usize, of: usize) -> Option<f64> {
    if of == 0 { None } else { Some(hits as f64 / of as f64) }
}

pub fn build_overview(players: &[EnrichedPlayerRecord], cfg: &MergeConfig) -> Vec<OverviewRow> {
    let mature: Vec<(f64, &EnrichedPlayerRecord)> = players
        .iter()
        .filter(|p| p.recruit.recruit_year_num().is_some_and(|y| y < cfg.overview_cutoff_year))
        .filter_map(|p| p.recruit.rank_num().map(|r| (r, p)))
        .collect();

    (1..=cfg.overview_max_rank)
        .map(|rank| {
            let r = rank as f64;
            let at_rank: Vec<&EnrichedPlayerRecord> =
                mature.iter().filter(|(pr, _)| *pr == r).map(|(_, p)| *p).collect();
            let nba: Vec<&EnrichedPlayerRecord> =
                at_rank.iter().copied().filter(|p| p.reached_nba()).collect();

            let top: Vec<&EnrichedPlayerRecord> =
                mature.iter().filter(|(pr, _)| *pr <= r).map(|(_, p)| *p).collect();
            let top_nba = top.iter().filter(|p| p.reached_nba()).count();

            let avg_rank = (0..cfg.stats.len())
                .map(|i| {
                    let medians: Vec<f64> = nba
                        .iter()
                        .filter_map(|p| p.stat_aggregates(i).and_then(|a| a.rank_median))
                        .collect();
                    mean(&medians).map(f64::round)
                })
                .collect();

            OverviewRow {
                rank,
                percent_nba: share(nba.len(), at_rank.len()),
                percent_nba_top: share(top_nba, top.len()),
                count_rank_nba: nba.len(),
                avg_rank,
            }
        })
        .collect()
}

/// `0.6` → `"60%"`. Halves round up: `0.125` → `"13%"`.
pub fn format_percent(v: Option<f64>) -> String {
    v.map(|x| format!("{}%", (x * 100.0).round() as i64)).unwrap_or_default()
}

pub fn overview_table(rows: &[OverviewRow], cfg: &MergeConfig) -> DataSet {
    let mut headers = row!["rank", "percent_nba", "percent_nba_top", "count_rank_nba"];
    headers.extend(cfg.stats.iter().map(|s| join!("avg_rank_", &s.key)));

    let body = rows
        .iter()
        .map(|o| {
            let mut r = vec![
                o.rank.to_string(),
                format_percent(o.percent_nba),
                format_percent(o.percent_nba_top),
                o.count_rank_nba.to_string(),
            ];
            r.extend(o.avg_rank.iter().map(|v| v.map(|x| x.to_string()).unwrap_or_default()));
            r
        })
        .collect();

    DataSet::new(headers, body)
}
