mod common;

use common::fixtures::{MALFORMED_JSON, OVERLAPPING_JSON, SCHEDULE_XML};
use common::{TestResult, book_in, builder_in, init_logger, read_fragment, write_schedule};
use progbook::layout::{CellStatus, Diagnostic, LayoutError};
use progbook::schedule::ScheduleError;
use progbook::{BookConfig, PipelineError};
use progbook_types::{ClockTime, RoomName};
use tempfile::tempdir;

fn rooms(names: &[&str]) -> Vec<RoomName> {
    names.iter().map(|n| RoomName::from(*n)).collect()
}

#[test]
fn test_schedule_becomes_pages_per_day() -> TestResult {
    init_logger();
    let dir = tempdir()?;
    let book = book_in(dir.path());

    let events = book.load_events(SCHEDULE_XML)?;
    let output = book.generate(&events)?;

    let pages: Vec<_> = output.grids().map(|g| (g.day.short(), g.index, g.rooms.clone())).collect();
    assert_eq!(
        pages,
        vec![
            ("sat", 0, rooms(&["J.Janson", "K.1.105"])),
            ("sat", 1, rooms(&["AW.120", "H.1302", "H.1308"])),
            ("sun", 0, rooms(&["H.1309"])),
        ]
    );
    assert_eq!(output.diagnostics().count(), 0);
    Ok(())
}

#[test]
fn test_day_start_is_rounded_to_the_label_interval() -> TestResult {
    let dir = tempdir()?;
    let book = book_in(dir.path());
    let output = book.generate(&book.load_events(SCHEDULE_XML)?)?;

    let sunday = output.grids().last().ok_or("no pages")?;
    assert_eq!(sunday.day_start, Some(ClockTime::from_hm(9, 45)));
    assert_eq!(sunday.day_stop, Some(ClockTime::from_hm(10, 40)));
    assert_eq!(sunday.rows.len(), 11);
    assert_eq!(sunday.rows[0].time_label.as_deref(), Some("09:45"));
    assert_eq!(sunday.rows[2].cells[0].status, CellStatus::Start);
    Ok(())
}

#[test]
fn test_fragments_are_written_with_hash_headers() -> TestResult {
    init_logger();
    let dir = tempdir()?;
    let schedule = write_schedule(dir.path(), "xml", SCHEDULE_XML);
    let book = book_in(dir.path());

    let output = book.generate_from_file(&schedule)?;
    assert!(!output.fragments.is_empty());

    for name in [
        "gen-chap-keynotes.tex",
        "gen-chap-maintracks.tex",
        "gen-chap-lightningtalks.tex",
        "gen-chap-certification.tex",
        "gen-chap-devrooms.tex",
        "gen-chap-tables.tex",
        "generated/keynotes.tex",
        "generated/devroom-sat-rust-h-1302.tex",
        "generated/tableify_events_sat_0.tex",
        "generated/tableify_events_sun_0.tex",
    ] {
        let text = read_fragment(dir.path(), name);
        assert!(text.starts_with("% generator-hash: "), "{} has no hash header", name);
    }

    let tables = read_fragment(dir.path(), "gen-chap-tables.tex");
    assert!(tables.contains("\\input{generated/tableify_events_sat_1.tex}"));

    let janson = read_fragment(dir.path(), "generated/tableify_events_sat_0.tex");
    assert!(janson.contains("{\\large Main tracks}"));
    assert!(janson.contains("{\\large J.Janson}"));
    assert!(janson.contains("{\\large K.1.105}"));

    let rust = read_fragment(dir.path(), "generated/devroom-sat-rust-h-1302.tex");
    assert!(rust.contains("\\label{devroom-sat-rust-h-1302}"));
    assert!(rust.contains("\\Event{Ownership \\& borrowing}{}{Grace Hopper}{Sat.}{11:30}{12:00}"));

    let main = read_fragment(dir.path(), "generated/maintrack-sat-languages-k-1-105.tex");
    assert!(main.contains("Compilers -- a field guide"));
    Ok(())
}

#[test]
fn test_rerun_leaves_unchanged_fragments_alone() -> TestResult {
    let dir = tempdir()?;
    let book = book_in(dir.path());
    let output = book.generate(&book.load_events(SCHEDULE_XML)?)?;

    assert_eq!(book.write(&output)?, output.fragments.len());
    assert_eq!(book.write(&output)?, 0);
    Ok(())
}

#[test]
fn test_parallel_layout_matches_sequential() -> TestResult {
    let dir = tempdir()?;
    let sequential = book_in(dir.path());
    let parallel = builder_in(dir.path()).with_parallel(true).build()?;

    let events = sequential.load_events(SCHEDULE_XML)?;
    assert_eq!(sequential.layout(&events)?, parallel.layout(&events)?);
    Ok(())
}

#[test]
fn test_grids_dump_as_json() -> TestResult {
    let dir = tempdir()?;
    let book = book_in(dir.path());
    let output = book.generate(&book.load_events(SCHEDULE_XML)?)?;

    let json: serde_json::Value = serde_json::from_str(&output.grids_json()?)?;
    let pages = json.as_array().ok_or("grids are not an array")?;
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[2]["grid"]["day"], "2014-02-02");
    assert_eq!(pages[2]["grid"]["rooms"][0], "H.1309");
    assert_eq!(pages[2]["grid"]["dayStart"], 585);
    assert!(pages[2]["diagnostics"].as_array().is_some_and(|d| d.is_empty()));
    Ok(())
}

#[test]
fn test_overlaps_are_reported_once() -> TestResult {
    let dir = tempdir()?;
    let book = book_in(dir.path());
    let output = book.generate(&book.load_events(OVERLAPPING_JSON)?)?;

    let diagnostics: Vec<_> = output.diagnostics().collect();
    assert_eq!(diagnostics.len(), 1);
    match diagnostics[0] {
        Diagnostic::OverlappingBooking { kept, shadowed, .. } => {
            assert_eq!(kept.as_str(), "1");
            assert_eq!(shadowed.as_str(), "2");
        }
        other => panic!("unexpected diagnostic {:?}", other),
    }
    Ok(())
}

#[test]
fn test_strict_overlaps_fail_the_run() -> TestResult {
    let dir = tempdir()?;
    let mut config = BookConfig::default();
    config.layout.strict_overlaps = true;
    let book = builder_in(dir.path()).with_config(config).with_output_dir(dir.path()).build()?;

    let events = book.load_events(OVERLAPPING_JSON)?;
    let err = book.generate(&events).unwrap_err();
    assert!(matches!(err, PipelineError::Layout(LayoutError::OverlappingBooking { .. })));
    Ok(())
}

#[test]
fn test_malformed_event_names_the_missing_field() -> TestResult {
    let dir = tempdir()?;
    let book = book_in(dir.path());

    let err = book.load_events(MALFORMED_JSON).unwrap_err();
    match err {
        PipelineError::Schedule(ScheduleError::MalformedEvent { day, event, field }) => {
            assert_eq!(day, "2014-02-01");
            assert_eq!(event, "9");
            assert_eq!(field, "start");
        }
        other => panic!("unexpected error {}", other),
    }
    Ok(())
}

#[test]
fn test_zero_page_capacity_is_rejected() -> TestResult {
    let dir = tempdir()?;
    let mut config = BookConfig::default();
    config.layout.page_capacity = 0;

    let result = builder_in(dir.path()).with_config(config).build();
    assert!(matches!(result, Err(PipelineError::Layout(LayoutError::InvalidConfig(_)))));
    Ok(())
}

#[test]
fn test_config_file_drives_the_layout() -> TestResult {
    let dir = tempdir()?;
    let config = write_schedule(
        dir.path(),
        "progbook.json",
        r#"{ "layout": { "pageCapacity": 2, "pinnedRooms": [] } }"#,
    );
    let book = builder_in(dir.path()).with_config_file(&config)?.with_output_dir(dir.path()).build()?;
    let output = book.generate(&book.load_events(SCHEDULE_XML)?)?;

    let saturday: Vec<_> = output.grids().filter(|g| g.day.short() == "sat").map(|g| g.rooms.clone()).collect();
    assert_eq!(
        saturday,
        vec![
            rooms(&["AW.120", "H.1302"]),
            rooms(&["H.1308", "J.Janson"]),
            rooms(&["K.1.105"]),
        ]
    );
    Ok(())
}
