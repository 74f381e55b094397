// src/merge/draft.rs
//
// Tiered draft lookup. Linear scans over the draft table: a couple of
// thousand rows per run, so no index.

use crate::model::{DraftOutcome, DraftRecord, EnrichedPlayerRecord};

/// Which rule produced a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchTier {
    Link,
    NameCollege,
    NameYear,
}

pub struct DraftMatcher<'a> {
    draft: &'a [DraftRecord],
}

impl<'a> DraftMatcher<'a> {
    pub fn new(draft: &'a [DraftRecord]) -> Self {
        Self { draft }
    }

    /// First row matching, in priority order:
    /// 1. same non-empty profile link;
    /// 2. same name and same non-empty college;
    /// 3. same name and draft year equal to the recruiting class year.
    ///
    /// Same-named players can still collide in tiers 2 and 3.
    pub fn find_draft_match(&self, player: &EnrichedPlayerRecord) -> Option<(&'a DraftRecord, MatchTier)> {
        let r = &player.recruit;

        if let Some(link) = r.link.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(d) = self.draft.iter().find(|d| d.link.trim() == link) {
                return Some((d, MatchTier::Link));
            }
        }

        if let Some(college) = r.college.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            if let Some(d) = self.draft.iter().find(|d| d.name.trim() == r.name.trim() && d.college.trim() == college) {
                return Some((d, MatchTier::NameCollege));
            }
        }

        if let Some(year) = r.recruit_year.as_deref().map(str::trim).filter(|y| !y.is_empty()) {
            if let Some(d) = self.draft.iter().find(|d| d.name.trim() == r.name.trim() && d.year.trim() == year) {
                return Some((d, MatchTier::NameYear));
            }
        }

        None
    }
}

/// Copy draft fields onto every player that matches; others are untouched.
pub fn attach_draft(players: Vec<EnrichedPlayerRecord>, draft: &[DraftRecord]) -> Vec<EnrichedPlayerRecord> {
    let matcher = DraftMatcher::new(draft);
    let mut tiers = [0usize; 3];

    let out: Vec<EnrichedPlayerRecord> = players
        .into_iter()
        .map(|p| match matcher.find_draft_match(&p) {
            Some((d, tier)) => {
                tiers[tier as usize] += 1;
                EnrichedPlayerRecord { draft: Some(DraftOutcome::from(d)), ..p }
            }
            None => p,
        })
        .collect();

    logf!(
        "Draft matches: {} by link, {} by name+college, {} by name+year, {} unmatched",
        tiers[0], tiers[1], tiers[2],
        out.len() - tiers.iter().sum::<usize>()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecruitRecord;

    fn draft_row(rank: &str, year: &str, name: &str, college: &str, link: &str) -> DraftRecord {
        DraftRecord {
            rank: s!(rank),
            year: s!(year),
            round: s!("1"),
            pick: s!(rank),
            name: s!(name),
            college: s!(college),
            link: s!(link),
        }
    }

    fn player(name: &str, link: Option<&str>, college: Option<&str>, year: Option<&str>) -> EnrichedPlayerRecord {
        EnrichedPlayerRecord::new(
            RecruitRecord {
                name: s!(name),
                link: link.map(String::from),
                college: college.map(String::from),
                recruit_year: year.map(String::from),
                ..Default::default()
            },
            None,
        )
    }

    #[test]
    fn link_beats_name_and_college() {
        let draft = vec![
            draft_row("5", "2004", "Joe Smith", "Duke", "/players/s/smithjo02.html"),
            draft_row("9", "2005", "Joe Smith", "UCLA", "/players/s/smithjo01.html"),
        ];
        let p = player("Joe Smith", Some("/players/s/smithjo01.html"), Some("Duke"), None);
        let (d, tier) = DraftMatcher::new(&draft).find_draft_match(&p).unwrap();
        assert_eq!(tier, MatchTier::Link);
        assert_eq!(d.rank, "9");
    }

    #[test]
    fn name_college_then_name_year() {
        let draft = vec![
            draft_row("1", "2003", "Al B", "Kansas", ""),
            draft_row("2", "2001", "Al B", "", ""),
        ];
        let m = DraftMatcher::new(&draft);

        let (d, tier) = m.find_draft_match(&player("Al B", None, Some("Kansas"), Some("2001"))).unwrap();
        assert_eq!((d.rank.as_str(), tier), ("1", MatchTier::NameCollege));

        let (d, tier) = m.find_draft_match(&player("Al B", None, None, Some("2001"))).unwrap();
        assert_eq!((d.rank.as_str(), tier), ("2", MatchTier::NameYear));
    }

    #[test]
    fn empty_links_and_colleges_never_match() {
        let draft = vec![draft_row("1", "2003", "Al B", "", "")];
        let m = DraftMatcher::new(&draft);
        assert!(m.find_draft_match(&player("Al B", Some(""), Some(""), None)).is_none());
        assert!(m.find_draft_match(&player("Other", None, None, Some("2003"))).is_none());
    }

    #[test]
    fn first_row_wins_within_a_tier() {
        let draft = vec![
            draft_row("7", "2002", "Al B", "Kansas", ""),
            draft_row("8", "2002", "Al B", "Kansas", ""),
        ];
        let (d, _) = DraftMatcher::new(&draft)
            .find_draft_match(&player("Al B", None, Some("Kansas"), None))
            .unwrap();
        assert_eq!(d.rank, "7");
    }

    #[test]
    fn padded_draft_cells_still_match() {
        let draft = vec![
            draft_row("4", "2002", " Cy D ", " Kansas ", ""),
            draft_row("6", "2003", "Ed F", "", " /players/f/fed01.html "),
        ];
        let m = DraftMatcher::new(&draft);

        let (d, tier) = m.find_draft_match(&player("Cy D", None, Some("Kansas "), None)).unwrap();
        assert_eq!((d.rank.as_str(), tier), ("4", MatchTier::NameCollege));

        let (d, tier) = m.find_draft_match(&player("Ed F", Some("/players/f/fed01.html"), None, None)).unwrap();
        assert_eq!((d.rank.as_str(), tier), ("6", MatchTier::Link));
    }

    #[test]
    fn unmatched_players_keep_no_draft_fields() {
        let draft = vec![draft_row("1", "2003", "Al B", "Kansas", "/players/b/bal01.html")];
        let out = attach_draft(
            vec![
                player("Al B", Some("/players/b/bal01.html"), None, None),
                player("Nobody", None, None, Some("2003")),
            ],
            &draft,
        );
        assert_eq!(out[0].draft.as_ref().unwrap().draft_year, "2003");
        assert!(out[1].draft.is_none());
        assert!(out[1].draft_year().is_none());
    }
}
