// src/config/mod.rs
pub mod consts;
pub mod options;
pub mod states;

pub use options::{HarvestConfig, MergeConfig, MinutesRule, Paths, StatSpec};
