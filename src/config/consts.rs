// src/config/consts.rs

// Net config
pub const DRAFT_FINDER_URL: &str = "https://www.basketball-reference.com/play-index/draft_finder.cgi";
pub const USER_AGENT: &str = "rsci_merge/0.3";
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Harvest
pub const DRAFT_MIN_YEAR: u32 = 1998;
pub const DRAFT_MAX_YEAR: u32 = 2018;

// Identity
pub const PROFILE_PREFIX: &str = "/players/";
pub const PROFILE_EXT: &str = ".html";

// Roster augmentation: earliest debut season start year
pub const MIN_NBA_YEAR: i32 = 2002;

// Qualifying seasons (games * minutes per game)
pub const MIN_MP_DEFAULT: f64 = 1500.0;
pub const MIN_MP_SPECIAL: &[(&str, f64)] = &[
    ("1998-99", 915.0),  // lockout
    ("2011-12", 1207.0), // lockout
];

// Still in progress when the inputs were collected
pub const EXCLUDED_SEASONS: &[&str] = &["2018-19"];

// Aggregates
pub const TOP_SEASONS: usize = 5;
pub const CAREER_SEASONS: usize = 100;

// Overview
pub const OVERVIEW_MAX_RANK: u32 = 100;
pub const OVERVIEW_CUTOFF_YEAR: i32 = 2015;

// Stat column in the seasons input -> short key used in output column names
pub const STATS: &[(&str, &str)] = &[
    ("WS/48", "ws48"),
    ("VORP", "vorp"),
    ("PIPM", "pipm"),
    ("Wins Added", "wa"),
];

// Files
pub const DEFAULT_INPUT_DIR: &str = "input";
pub const DEFAULT_OUT_DIR: &str = "output";
pub const SEASONS_INPUT: &str = "player-seasons--rank.csv";
pub const RSCI_INPUT: &str = "rsci--bbr.csv";
pub const DRAFT_FILE: &str = "draft.csv";
pub const PLAYERS_FILE: &str = "players.csv";
pub const SEASONS_FILE: &str = "seasons.csv";
pub const OVERVIEW_FILE: &str = "overview.csv";
