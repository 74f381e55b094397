// src/merge/output.rs
//
// Output assembly: ordering, the player table (and reading it back), and
// the season rows that belong to the final roster.

use std::cmp::Ordering;
use std::error::Error;

use crate::config::MergeConfig;
use crate::model::{
    DraftOutcome, EnrichedPlayerRecord, PlayerAggregates, PlayerId, RecruitRecord, StatAggregates, non_empty,
    parse_num,
};
use crate::store::DataSet;

use super::seasons::SeasonIndex;

pub const DRAFT_COLUMNS: [&str; 5] = ["bbrID", "draft_year", "pick_overall", "pick_number", "pick_round"];

/// Aggregate families in column order: (prefix, suffix).
const FAMILIES: [(&str, &str); 6] = [
    ("nba_mean_", ""),
    ("top_mean_", ""),
    ("nba_median_", ""),
    ("nba_mean_", "_rank"),
    ("top_mean_", "_rank"),
    ("nba_median_", "_rank"),
];

fn family_value(a: &StatAggregates, family: usize) -> Option<f64> {
    match family {
        0 => a.career_mean,
        1 => a.top_mean,
        2 => a.median,
        3 => a.career_rank_mean,
        4 => a.top_rank_mean,
        _ => a.rank_median,
    }
}

fn family_slot(a: &mut StatAggregates, family: usize) -> &mut Option<f64> {
    match family {
        0 => &mut a.career_mean,
        1 => &mut a.top_mean,
        2 => &mut a.median,
        3 => &mut a.career_rank_mean,
        4 => &mut a.top_rank_mean,
        _ => &mut a.rank_median,
    }
}

/// Derived column names, in output order.
pub fn derived_headers(cfg: &MergeConfig) -> Vec<String> {
    let mut h: Vec<String> = DRAFT_COLUMNS.iter().map(|c| s!(*c)).collect();
    for (prefix, suffix) in FAMILIES {
        for stat in &cfg.stats {
            h.push(join!(prefix, &stat.key, suffix));
        }
    }
    h.push(s!("total_seasons"));
    h.push(s!("valid_seasons"));
    h
}

fn cmp_rank(a: &RecruitRecord, b: &RecruitRecord) -> Ordering {
    match (a.rank_num(), b.rank_num()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Recruiting class, then rank. Records without a class go last in their
/// current order; non-numeric ranks follow numeric ones.
pub fn cmp_players(a: &EnrichedPlayerRecord, b: &EnrichedPlayerRecord) -> Ordering {
    match (a.recruit.recruit_year_num(), b.recruit.recruit_year_num()) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| cmp_rank(&a.recruit, &b.recruit)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn sort_players(mut players: Vec<EnrichedPlayerRecord>) -> Vec<EnrichedPlayerRecord> {
    players.sort_by(cmp_players);
    players
}

fn opt_num(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

fn roster_value(rec: &RecruitRecord, header: &str) -> String {
    match header {
        "name" => rec.name.clone(),
        "link" => rec.link.clone().unwrap_or_default(),
        "rank" => rec.rank.clone().unwrap_or_default(),
        "recruit_year" => rec.recruit_year.clone().unwrap_or_default(),
        "college" => rec.college.clone().unwrap_or_default(),
        other => rec.extra_value(other).to_string(),
    }
}

/// Player table: roster columns as loaded, then the derived columns.
pub fn players_table(players: &[EnrichedPlayerRecord], roster_headers: &[String], cfg: &MergeConfig) -> DataSet {
    let mut headers = roster_headers.to_vec();
    headers.extend(derived_headers(cfg));

    let rows = players
        .iter()
        .map(|p| {
            let mut row: Vec<String> = roster_headers.iter().map(|h| roster_value(&p.recruit, h)).collect();

            row.push(p.player_id.as_ref().map(|id| id.to_string()).unwrap_or_default());
            row.push(p.draft_year().unwrap_or("").to_string());
            match &p.draft {
                Some(d) => row.extend([d.pick_overall.clone(), d.pick_number.clone(), d.pick_round.clone()]),
                None => row.extend([s!(), s!(), s!()]),
            }

            for family in 0..FAMILIES.len() {
                for i in 0..cfg.stats.len() {
                    row.push(opt_num(p.stat_aggregates(i).and_then(|a| family_value(a, family))));
                }
            }

            match &p.aggregates {
                Some(a) => row.extend([a.total_seasons.to_string(), a.valid_seasons.to_string()]),
                None => row.extend([s!(), s!()]),
            }
            row
        })
        .collect();

    DataSet::new(headers, rows)
}

/// Read a player table back. Returns the roster headers (everything before
/// `bbrID`) and the records.
pub fn parse_players(ds: &DataSet, cfg: &MergeConfig) -> Result<(Vec<String>, Vec<EnrichedPlayerRecord>), Box<dyn Error>> {
    let id_ix = ds.require_column("bbrID", "players")?;
    let roster_headers: Vec<String> = ds.headers[..id_ix].to_vec();

    let col = |name: &str| ds.column(name);
    let draft_year_col = col("draft_year");
    let overall_col = col("pick_overall");
    let number_col = col("pick_number");
    let round_col = col("pick_round");
    let total_col = col("total_seasons");
    let valid_col = col("valid_seasons");
    let family_cols: Vec<Vec<Option<usize>>> = FAMILIES
        .iter()
        .map(|(prefix, suffix)| cfg.stats.iter().map(|s| col(&join!(*prefix, &s.key, *suffix))).collect())
        .collect();

    let mut out = Vec::with_capacity(ds.len());
    for row in &ds.rows {
        let cell = |c: Option<usize>| ds.cell(row, c);

        let mut recruit = RecruitRecord::default();
        for (i, h) in roster_headers.iter().enumerate() {
            let v = cell(Some(i));
            match h.as_str() {
                "name" => recruit.name = v.to_string(),
                "link" => recruit.link = non_empty(v),
                "rank" => recruit.rank = non_empty(v),
                "recruit_year" => recruit.recruit_year = non_empty(v),
                "college" => recruit.college = non_empty(v),
                _ => recruit.extra.push((h.clone(), v.to_string())),
            }
        }

        let picks = [cell(overall_col), cell(number_col), cell(round_col)];
        let draft_year = cell(draft_year_col);
        let draft = if picks.iter().any(|v| !v.is_empty()) {
            Some(DraftOutcome {
                pick_overall: picks[0].to_string(),
                pick_number: picks[1].to_string(),
                pick_round: picks[2].to_string(),
                draft_year: draft_year.to_string(),
            })
        } else {
            recruit.draft_year = non_empty(draft_year);
            None
        };

        let aggregates = match (cell(total_col).parse::<usize>(), cell(valid_col).parse::<usize>()) {
            (Ok(total_seasons), Ok(valid_seasons)) => {
                let mut stats = vec![StatAggregates::default(); cfg.stats.len()];
                for (family, cols) in family_cols.iter().enumerate() {
                    for (i, c) in cols.iter().enumerate() {
                        *family_slot(&mut stats[i], family) = parse_num(cell(*c));
                    }
                }
                Some(PlayerAggregates { stats, total_seasons, valid_seasons })
            }
            _ => None,
        };

        out.push(EnrichedPlayerRecord {
            recruit,
            player_id: non_empty(cell(Some(id_ix))).map(PlayerId::new),
            draft,
            aggregates,
        });
    }

    Ok((roster_headers, out))
}

/// Season rows (verbatim, input order) of every player in the final table.
/// Rows dropped while building the index (excluded seasons, blank ids) stay out.
pub fn filter_seasons(seasons: &DataSet, index: &SeasonIndex, players: &[EnrichedPlayerRecord]) -> DataSet {
    let mut keep: Vec<usize> = players
        .iter()
        .filter_map(|p| p.player_id.as_ref())
        .filter_map(|id| index.get(id))
        .flat_map(|h| h.seasons().iter().map(|s| s.row))
        .collect();
    keep.sort_unstable();
    keep.dedup();

    let rows = keep.into_iter().filter_map(|i| seasons.rows.get(i).cloned()).collect();
    DataSet::new(seasons.headers.clone(), rows)
}
