// benches/merge.rs
use std::fmt::Write;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rsci_merge::{
    config::MergeConfig,
    merge::{self, MergeInputs},
    model::DraftRecord,
    specs,
    store::DataSet,
};

const STATES: [&str; 6] = ["OH", "CA", "TX", "NY", "France", "IL"];

/// ~2000 recruits, ~1200 NBA players with ~8 seasons each.
fn synthetic_inputs() -> MergeInputs {
    let mut roster = String::from("rank,name,recruit_year,college,link\n");
    let mut seasons = String::from(
        "bbrID,Season,HS,G,MP,name,college,link,WS/48,WS/48_rank,VORP,VORP_rank,PIPM,PIPM_rank,Wins Added,Wins Added_rank\n",
    );
    let mut draft = Vec::new();

    for i in 0..2000u32 {
        let year = 1998 + i / 100;
        let rank = i % 100 + 1;
        let id = format!("p{i:05}");
        let link = if i % 5 < 3 { format!("/players/p/{id}.html") } else { String::new() };
        let _ = writeln!(roster, "{rank},Player {i},{year},College {},{link}", i % 40);

        if i % 5 < 3 {
            for s in 0..(i % 12) {
                let start = year + 1 + s;
                let _ = writeln!(
                    seasons,
                    "{id},{start}-{:02},\"Town, {}\",{},{},Player {i},,{link},{:.3},{},{:.1},{},{:.1},{},{:.1},{}",
                    (start + 1) % 100,
                    STATES[(i % 6) as usize],
                    40 + (i + s) % 42,
                    15 + (i * 7 + s) % 25,
                    0.05 + (i % 17) as f64 / 100.0,
                    (i + s) % 400,
                    (i % 9) as f64 - 1.0,
                    (i * 3 + s) % 400,
                    (i % 11) as f64 - 3.0,
                    (i * 5 + s) % 400,
                    (i % 13) as f64,
                    (i * 7 + s) % 400,
                );
            }
        }
        if i % 4 == 0 {
            draft.push(DraftRecord {
                rank: (i / 4 % 60 + 1).to_string(),
                year: (year + 1).to_string(),
                round: "1".into(),
                pick: (i / 4 % 30 + 1).to_string(),
                name: format!("Player {i}"),
                college: format!("College {}", i % 40),
                link: link.clone(),
            });
        }
    }

    MergeInputs {
        seasons: DataSet::from_text(&seasons).unwrap(),
        roster: DataSet::from_text(&roster).unwrap(),
        draft,
    }
}

fn draft_page(rows: usize) -> String {
    let mut html = String::from(r#"<html><body><table id="stats"><tbody>"#);
    for i in 0..rows {
        if i % 20 == 19 {
            html.push_str(r#"<tr class="thead"><th>Rk</th></tr>"#);
        }
        let _ = write!(
            html,
            r#"<tr><th>{i}</th><td>2010</td><td>NBA</td><td>1</td><td>{i}</td><td>TM</td>
            <td><a href="/players/x/x{i:03}.html">Player {i}</a></td><td>19</td><td>G</td><td>us</td><td>College</td></tr>"#
        );
    }
    html.push_str("</tbody></table></body></html>");
    html
}

fn bench_merge(c: &mut Criterion) {
    let inputs = synthetic_inputs();
    let cfg = MergeConfig::default();

    c.bench_function("merge_run", |b| {
        b.iter(|| {
            let out = merge::run(black_box(&inputs), black_box(&cfg)).unwrap();
            black_box(out.players.len())
        })
    });
}

fn bench_draft_page(c: &mut Criterion) {
    let html = draft_page(60);

    c.bench_function("parse_draft_page", |b| {
        b.iter(|| {
            let rows = specs::draft::parse_draft_page(black_box(&html)).unwrap();
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_merge, bench_draft_page);
criterion_main!(benches);
