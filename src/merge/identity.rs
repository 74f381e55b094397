// src/merge/identity.rs

use crate::config::consts::{PROFILE_EXT, PROFILE_PREFIX};
use crate::model::PlayerId;

/// Player key from a profile link.
///
/// `/players/j/jamesle01.html` → `jamesle01`. Absent links, links outside
/// `/players/`, and paths without a second segment give `None`.
pub fn resolve_identifier(profile_link: Option<&str>) -> Option<PlayerId> {
    let link = profile_link?.trim();
    let rest = link.strip_prefix(PROFILE_PREFIX)?;
    let rest = rest.strip_suffix(PROFILE_EXT).unwrap_or(rest);
    let id = rest.split('/').nth(1)?;
    if id.is_empty() { return None; }
    Some(PlayerId::new(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(link: &str) -> Option<String> {
        resolve_identifier(Some(link)).map(|p| p.as_str().to_string())
    }

    #[test]
    fn extracts_second_segment() {
        assert_eq!(id("/players/j/jamesle01.html").as_deref(), Some("jamesle01"));
        assert_eq!(id("/players/d/duranke01").as_deref(), Some("duranke01"));
    }

    #[test]
    fn malformed_links_give_none() {
        assert_eq!(id(""), None);
        assert_eq!(id("/coaches/k/krzyzmi01c.html"), None);
        assert_eq!(id("https://www.basketball-reference.com/players/j/jamesle01.html"), None);
        assert_eq!(id("/players/jamesle01.html"), None);
        assert_eq!(id("/players/j/.html"), None);
        assert_eq!(resolve_identifier(None), None);
    }

    #[test]
    fn idempotent() {
        for link in ["/players/j/jamesle01.html", "nonsense", "/players/", "/players/a/b/c.html"] {
            assert_eq!(resolve_identifier(Some(link)), resolve_identifier(Some(link)));
        }
        assert_eq!(id("/players/a/b/c.html").as_deref(), Some("b"));
    }
}
