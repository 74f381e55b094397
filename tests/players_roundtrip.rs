// tests/players_roundtrip.rs
use rsci_merge::config::MergeConfig;
use rsci_merge::file::write_dataset;
use rsci_merge::merge::{self, MergeInputs, output::parse_players};
use rsci_merge::model::DraftRecord;
use rsci_merge::store::DataSet;

fn inputs() -> MergeInputs {
    let roster = DataSet::from_text(
        "name,rank,recruit_year,college,link,pos\n\
         Alpha One,1,2005,Duke,/players/a/alpha01.html,G\n\
         \"Beta, Jr.\",NR,2005,\"Foo College, Bar University\",,F\n\
         Gamma Three,3,2004,,/players/g/gamma01.html,C\n",
    )
    .unwrap();
    let seasons = DataSet::from_text(
        "bbrID,Season,HS,G,MP,name,college,link,WS/48,WS/48_rank\n\
         alpha01,2006-07,\"Dayton, OH\",80,30,Alpha One,Duke,/players/a/alpha01.html,0.125,3\n\
         alpha01,2007-08,\"Dayton, OH\",80,30,Alpha One,Duke,/players/a/alpha01.html,0.2,7\n\
         alpha01,2008-09,\"Dayton, OH\",80,30,Alpha One,Duke,/players/a/alpha01.html,0.3,1\n\
         delta01,2012-13,\"Austin, TX\",82,31,Delta Four,,/players/d/delta01.html,0.05,60\n",
    )
    .unwrap();
    let draft = vec![DraftRecord {
        rank: "2".into(),
        year: "2006".into(),
        round: "1".into(),
        pick: "2".into(),
        name: "Alpha One".into(),
        college: "Duke".into(),
        link: "/players/a/alpha01.html".into(),
    }];
    MergeInputs { seasons, roster, draft }
}

#[test]
fn player_table_reads_back_to_the_same_records() {
    let cfg = MergeConfig::default();
    let out = merge::run(&inputs(), &cfg).unwrap();

    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("players.csv");
    write_dataset(&path, &out.players_table).unwrap();

    let (headers, back) = parse_players(&DataSet::load(&path).unwrap(), &cfg).unwrap();
    assert_eq!(headers, vec!["name", "rank", "recruit_year", "college", "link", "pos"]);
    assert_eq!(back.len(), out.players.len());

    for (a, b) in out.players.iter().zip(&back) {
        assert_eq!(a.recruit.name, b.recruit.name);
        assert_eq!(a.recruit.link, b.recruit.link);
        assert_eq!(a.recruit.rank, b.recruit.rank);
        assert_eq!(a.recruit.recruit_year, b.recruit.recruit_year);
        assert_eq!(a.recruit.college, b.recruit.college);
        assert_eq!(a.recruit.extra_value("pos"), b.recruit.extra_value("pos"));
        assert_eq!(a.player_id, b.player_id);
        assert_eq!(a.draft, b.draft);
        assert_eq!(a.draft_year(), b.draft_year());
        assert_eq!(a.aggregates, b.aggregates);
    }
}

#[test]
fn valid_seasons_never_exceed_total() {
    let cfg = MergeConfig::default();
    let out = merge::run(&inputs(), &cfg).unwrap();
    for p in &out.players {
        if let Some(a) = &p.aggregates {
            assert!(a.valid_seasons <= a.total_seasons, "{}", p.recruit.name);
        }
    }
}
