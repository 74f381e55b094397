// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

/// One performance stat tracked in the seasons input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatSpec {
    /// Column name in the seasons input, e.g. `WS/48`
    pub column: String,
    /// Short key used in derived column names, e.g. `ws48`
    pub key: String,
}

impl StatSpec {
    pub fn new(column: &str, key: &str) -> Self {
        Self { column: s!(column), key: s!(key) }
    }

    /// Column holding the 0-based ordinal rank for this stat.
    pub fn rank_column(&self) -> String {
        join!(&self.column, "_rank")
    }
}

/// Where the merge reads from and writes to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paths {
    pub input_dir: PathBuf,
    pub out_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl Paths {
    pub fn seasons_input(&self) -> PathBuf { self.input_dir.join(SEASONS_INPUT) }
    pub fn rsci_input(&self) -> PathBuf { self.input_dir.join(RSCI_INPUT) }
    /// The harvester writes here and the merger reads from here.
    pub fn draft(&self) -> PathBuf { self.out_dir.join(DRAFT_FILE) }
    pub fn players_out(&self) -> PathBuf { self.out_dir.join(PLAYERS_FILE) }
    pub fn seasons_out(&self) -> PathBuf { self.out_dir.join(SEASONS_FILE) }
    pub fn overview_out(&self) -> PathBuf { self.out_dir.join(OVERVIEW_FILE) }
}

/// Minimum-minutes rule for a qualifying season.
#[derive(Clone, Debug, PartialEq)]
pub struct MinutesRule {
    pub default_min: f64,
    pub special: Vec<(String, f64)>,
}

impl Default for MinutesRule {
    fn default() -> Self {
        Self {
            default_min: MIN_MP_DEFAULT,
            special: MIN_MP_SPECIAL.iter().map(|(s, mp)| (s!(*s), *mp)).collect(),
        }
    }
}

impl MinutesRule {
    pub fn threshold(&self, season: &str) -> f64 {
        self.special
            .iter()
            .find(|(s, _)| s == season)
            .map(|(_, mp)| *mp)
            .unwrap_or(self.default_min)
    }
}

/// Everything the merge stage needs, fixed for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct MergeConfig {
    pub paths: Paths,
    pub minutes: MinutesRule,
    pub stats: Vec<StatSpec>,
    pub excluded_seasons: Vec<String>,
    pub min_nba_year: i32,
    pub top_seasons: usize,
    pub career_seasons: usize,
    pub overview_max_rank: u32,
    pub overview_cutoff_year: i32,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            paths: Paths::default(),
            minutes: MinutesRule::default(),
            stats: STATS.iter().map(|(c, k)| StatSpec::new(c, k)).collect(),
            excluded_seasons: EXCLUDED_SEASONS.iter().map(|s| s!(*s)).collect(),
            min_nba_year: MIN_NBA_YEAR,
            top_seasons: TOP_SEASONS,
            career_seasons: CAREER_SEASONS,
            overview_max_rank: OVERVIEW_MAX_RANK,
            overview_cutoff_year: OVERVIEW_CUTOFF_YEAR,
        }
    }
}

impl MergeConfig {
    pub fn with_paths(paths: Paths) -> Self {
        Self { paths, ..Self::default() }
    }
}

/// Harvester settings: inclusive year range and the output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarvestConfig {
    pub min_year: u32,
    pub max_year: u32,
    pub base_url: String,
    pub out_dir: PathBuf,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            min_year: DRAFT_MIN_YEAR,
            max_year: DRAFT_MAX_YEAR,
            base_url: s!(DRAFT_FINDER_URL),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl HarvestConfig {
    pub fn years(&self) -> std::ops::RangeInclusive<u32> {
        self.min_year..=self.max_year
    }

    pub fn out_path(&self) -> PathBuf {
        self.out_dir.join(DRAFT_FILE)
    }

    /// Draft-finder query for a single year, ordered by overall pick.
    pub fn url_for_year(&self, year: u32) -> String {
        format!(
            "{}?request=1&year_min={year}&year_max={year}&college_id=0\
             &pos_is_g=Y&pos_is_gf=Y&pos_is_f=Y&pos_is_fg=Y&pos_is_fc=Y&pos_is_c=Y&pos_is_cf=Y\
             &order_by=pick_overall&order_by_asc=Y",
            self.base_url
        )
    }

    pub fn with_out_dir(dir: &Path) -> Self {
        Self { out_dir: dir.to_path_buf(), ..Self::default() }
    }
}
