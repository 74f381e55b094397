// src/merge/aggregate.rs

use crate::config::MergeConfig;
use crate::model::{PlayerAggregates, StatAggregates, StatCell};

use super::seasons::PlayerHistory;

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() { return None; }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() { return None; }
    let mut v = values.to_vec();
    v.sort_by(|a, b| a.total_cmp(b));
    let mid = v.len() / 2;
    if v.len() % 2 == 0 {
        Some((v[mid - 1] + v[mid]) / 2.0)
    } else {
        Some(v[mid])
    }
}

/// Mean of the `limit` best values (highest first).
pub fn mean_value(cells: &[StatCell], limit: usize) -> Option<f64> {
    let mut values: Vec<f64> = cells.iter().filter_map(|c| c.value).collect();
    values.sort_by(|a, b| b.total_cmp(a));
    values.truncate(limit);
    mean(&values)
}

/// Mean of the `limit` best 1-based ranks (lowest first).
pub fn mean_rank(cells: &[StatCell], limit: usize) -> Option<f64> {
    let mut ranks: Vec<f64> = cells.iter().filter_map(|c| c.rank).map(|r| r + 1.0).collect();
    ranks.sort_by(|a, b| a.total_cmp(b));
    ranks.truncate(limit);
    mean(&ranks)
}

pub fn stat_aggregates(cells: &[StatCell], cfg: &MergeConfig) -> StatAggregates {
    let values: Vec<f64> = cells.iter().filter_map(|c| c.value).collect();
    let ranks: Vec<f64> = cells.iter().filter_map(|c| c.rank).map(|r| r + 1.0).collect();
    StatAggregates {
        career_mean: mean_value(cells, cfg.career_seasons),
        top_mean: mean_value(cells, cfg.top_seasons),
        median: median(&values),
        career_rank_mean: mean_rank(cells, cfg.career_seasons),
        top_rank_mean: mean_rank(cells, cfg.top_seasons),
        rank_median: median(&ranks),
    }
}

/// All aggregates for one player, over that player's qualifying seasons.
pub fn aggregate_player(history: &PlayerHistory, cfg: &MergeConfig) -> PlayerAggregates {
    let stats = (0..cfg.stats.len())
        .map(|i| stat_aggregates(&history.qualifying_cells(i), cfg))
        .collect();
    PlayerAggregates {
        stats,
        total_seasons: history.total_seasons(),
        valid_seasons: history.valid_seasons(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[f64]) -> Vec<StatCell> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| StatCell { value: Some(*v), rank: Some(i as f64) })
            .collect()
    }

    #[test]
    fn career_mean_of_two_seasons() {
        assert_eq!(mean_value(&cells(&[10.0, 20.0]), 100), Some(15.0));
    }

    #[test]
    fn top_mean_uses_five_highest() {
        let c = cells(&[1.0, 10.0, 9.0, 8.0, 7.0, 6.0]);
        assert_eq!(mean_value(&c, 5), Some(8.0));
        assert_eq!(mean_value(&c, 100), Some(41.0 / 6.0));
    }

    #[test]
    fn rank_mean_reports_one_based_best_ranks() {
        // ranks 0..=5 → 1..=6; best five are 1..=5
        let c = cells(&[1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(mean_rank(&c, 5), Some(3.0));
        assert_eq!(mean_rank(&c, 100), Some(3.5));
    }

    #[test]
    fn no_cells_means_no_aggregate() {
        let cfg = MergeConfig::default();
        let agg = stat_aggregates(&[], &cfg);
        assert_eq!(agg, StatAggregates::default());
        assert!(agg.career_mean.is_none());
    }

    #[test]
    fn blank_cells_are_skipped_not_zeroed() {
        let c = vec![
            StatCell { value: Some(4.0), rank: None },
            StatCell { value: None, rank: Some(9.0) },
        ];
        assert_eq!(mean_value(&c, 100), Some(4.0));
        assert_eq!(mean_rank(&c, 100), Some(10.0));
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }
}
