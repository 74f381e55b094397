// src/merge/college.rs

use crate::model::EnrichedPlayerRecord;

const QUALIFIERS: [&str; 2] = ["college", "university"];

/// Keep only the last named institution of a multi-school field.
///
/// `"Foo College, Bar University"` → `"Bar University"`. Fields with at most
/// one "college"/"university" word come back unchanged.
pub fn last_college(college: &str) -> String {
    // ASCII lowering keeps byte offsets aligned with the original text.
    let lower = college.to_ascii_lowercase();
    let spaced = lower.replace(',', " ");
    let hits: Vec<&str> = spaced.split(' ').filter(|w| QUALIFIERS.contains(w)).collect();
    if hits.len() <= 1 {
        return college.to_string();
    }

    let Some(last_word) = hits.last() else { return college.to_string() };
    let Some(at) = lower.rfind(*last_word) else { return college.to_string() };
    match lower[..at].rfind(',') {
        Some(comma) => college[comma + 1..].trim().to_string(),
        None => {
            logd!("No separator before last institution in '{college}'");
            college.trim().to_string()
        }
    }
}

/// Normalize the college field of every record.
pub fn normalize_colleges(players: Vec<EnrichedPlayerRecord>) -> Vec<EnrichedPlayerRecord> {
    players
        .into_iter()
        .map(|mut p| {
            p.recruit.college = p.recruit.college.map(|c| last_college(&c));
            p
        })
        .collect()
}
