// tests/ranking_properties.rs
use lang_rank::aggregate::{aggregate, mean_2dp};
use lang_rank::config::consts::PYPL_FOOTER;
use lang_rank::extract::{classify_row, Rejection};
use lang_rank::specs::spec_for;
use lang_rank::{AllowList, Source, SourceRecord};

const NAMES: &[&str] = &[
    "Python", "COBOL", "Java", "python", " Go ", "C#", "Rust", "", "TypeScript", "HTML",
];
const RANKS: &[&str] = &["1", "7", "28", "29", "0", "35", "x", "-3", ""];
const VALUES: &[&str] = &["12,34%", "1.5 %", "n/a", "", "7%"];

/// Every combination of the cells above, laid out for `source`'s columns.
fn grid(source: Source) -> Vec<Vec<String>> {
    let rule = spec_for(source).rule;
    let width = rule.language_col.max(rule.percentage_col).max(rule.rank_col) + 1;
    let mut rows = Vec::new();
    for name in NAMES {
        for rank in RANKS {
            for value in VALUES {
                let mut row = vec![String::new(); width];
                row[rule.language_col] = name.to_string();
                row[rule.rank_col] = rank.to_string();
                row[rule.percentage_col] = value.to_string();
                rows.push(row);
            }
        }
    }
    rows
}

fn rec(source: Source, language: &str, pct: Option<f64>) -> SourceRecord {
    SourceRecord { source, language: language.into(), rank: None, percentage: pct }
}

#[test]
fn every_emitted_language_is_allowed() {
    let allow = AllowList::default();
    for source in Source::ALL {
        let recs = spec_for(source).extract(&allow, &grid(source));
        assert!(!recs.is_empty(), "{source} kept nothing");
        for r in &recs {
            assert!(allow.contains(&r.language), "{source} leaked {:?}", r.language);
            assert_eq!(r.source, source);
        }
    }
}

#[test]
fn pypl_ranks_stay_in_range_and_footer_never_leaks() {
    let allow = AllowList::new(["Python", PYPL_FOOTER]);
    let spec = spec_for(Source::Pypl);

    let mut rows = grid(Source::Pypl);
    rows.push(vec![s("1"), s(""), s(PYPL_FOOTER), s("1 %")]);

    let recs = spec.extract(&allow, &rows);
    assert!(!recs.is_empty());
    for r in &recs {
        let rank = r.rank.expect("PYPL records always carry a rank");
        assert!((1..=28).contains(&rank), "rank {rank}");
        assert_ne!(r.language, PYPL_FOOTER);
    }
}

#[test]
fn rejections_say_why() {
    let allow = AllowList::default();
    let pypl = spec_for(Source::Pypl);
    let row = |cells: [&str; 4]| cells.map(s).to_vec();

    assert_eq!(
        classify_row(Source::Pypl, &pypl.rule, &allow, &row(["1", "", "", "3 %"])),
        Err(Rejection::MissingLanguage)
    );
    assert!(matches!(
        classify_row(Source::Pypl, &pypl.rule, &allow, &row(["", "", PYPL_FOOTER, ""])),
        Err(Rejection::Footer(_))
    ));
    assert!(matches!(
        classify_row(Source::Pypl, &pypl.rule, &allow, &row(["x", "", "Go", "1 %"])),
        Err(Rejection::UnparsableRank(_))
    ));
    assert!(matches!(
        classify_row(Source::Pypl, &pypl.rule, &allow, &row(["1", "", "COBOL", "1 %"])),
        Err(Rejection::NotAllowed(_))
    ));
}

#[test]
fn pypl_rank_35_is_dropped() {
    // Scenario D
    let pypl = spec_for(Source::Pypl);
    let row = vec![s("35"), s(""), s("Ruby"), s("0.9 %")];
    assert_eq!(
        classify_row(Source::Pypl, &pypl.rule, &AllowList::default(), &row),
        Err(Rejection::RankOutOfRange(35))
    );
}

#[test]
fn decimal_comma_percentage() {
    // Scenario C
    let tiobe = spec_for(Source::Tiobe);
    let row = vec![s("4"), s(""), s(""), s(""), s("Java"), s("12,34%")];
    let r = classify_row(Source::Tiobe, &tiobe.rule, &AllowList::default(), &row).unwrap();
    assert_eq!(r.percentage, Some(12.34));
    assert_eq!(r.rank, Some(4));
}

#[test]
fn unranked_rows_survive_where_no_range_applies() {
    let tecsify = spec_for(Source::Tecsify);
    let row = vec![s("—"), s(""), s(""), s(""), s("Swift"), s("")];
    let r = classify_row(Source::Tecsify, &tecsify.rule, &AllowList::default(), &row).unwrap();
    assert_eq!((r.rank, r.percentage), (None, None));
}

#[test]
fn aggregate_is_repeatable_and_averages_present_slots() {
    let allow = AllowList::default();
    let [t, c, p] = Source::ALL.map(|src| spec_for(src).extract(&allow, &grid(src)));

    let first = aggregate(&t, &c, &p);
    let second = aggregate(&t, &c, &p);
    assert_eq!(first, second);

    for e in &first {
        assert!(allow.contains(&e.language));
        let expect = mean_2dp(&[e.tiobe, e.tecsify, e.pypl]);
        assert_eq!(e.average, expect, "{}", e.language);
        assert_eq!(
            e.average.is_none(),
            e.tiobe.is_none() && e.tecsify.is_none() && e.pypl.is_none()
        );
    }
}

#[test]
fn disjoint_sources_yield_the_union() {
    let tiobe = [rec(Source::Tiobe, "Python", Some(10.0)), rec(Source::Tiobe, "Java", Some(8.0))];
    let tecsify = [rec(Source::Tecsify, "Go", Some(2.0))];

    let out = aggregate(&tiobe, &tecsify, &[]);
    let langs: Vec<&str> = out.iter().map(|e| e.language.as_str()).collect();
    assert_eq!(langs, ["Python", "Java", "Go"]);

    for e in &out[..2] {
        assert_eq!((e.tecsify, e.pypl), (None, None));
        assert_eq!(e.average, e.tiobe);
    }
    assert_eq!((out[2].tiobe, out[2].tecsify, out[2].pypl), (None, Some(2.0), None));
}

#[test]
fn later_duplicate_wins_its_slot() {
    let tiobe = [
        rec(Source::Tiobe, "PHP", Some(1.0)),
        rec(Source::Tiobe, "PHP", Some(4.0)),
    ];
    let out = aggregate(&tiobe, &[], &[rec(Source::Pypl, "PHP", Some(2.0))]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].tiobe, Some(4.0));
    assert_eq!(out[0].average, Some(3.0));
}

#[test]
fn scenario_a() {
    let out = aggregate(
        &[SourceRecord { rank: Some(1), ..rec(Source::Tiobe, "Python", Some(23.5)) }],
        &[rec(Source::Tecsify, "Python", Some(20.0))],
        &[],
    );
    assert_eq!(out.len(), 1);
    let e = &out[0];
    assert_eq!(e.language, "Python");
    assert_eq!((e.tiobe, e.tecsify, e.pypl), (Some(23.5), Some(20.0), None));
    assert_eq!(e.average, Some(21.75));
}

fn s(x: &str) -> String {
    x.to_string()
}
