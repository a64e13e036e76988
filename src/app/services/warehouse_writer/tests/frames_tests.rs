//! Tests for entity-to-DataFrame conversion

use super::build_test_warehouse;
use crate::app::services::warehouse_writer::frames::WarehouseFrames;
use crate::constants::columns;

#[test]
fn test_frame_heights_match_entity_counts() {
    let (dimensions, facts, populations) = build_test_warehouse();
    let frames = WarehouseFrames::build(&dimensions, &facts, &populations).unwrap();

    assert_eq!(frames.athletes.height(), dimensions.athletes.len());
    assert_eq!(frames.games.height(), dimensions.games.len());
    assert_eq!(frames.events.height(), dimensions.events.len());
    assert_eq!(frames.countries.height(), dimensions.countries.len());
    assert_eq!(frames.facts.height(), facts.len());
    assert_eq!(frames.populations.height(), populations.len());
}

#[test]
fn test_fact_frame_columns() {
    let (dimensions, facts, populations) = build_test_warehouse();
    let frames = WarehouseFrames::build(&dimensions, &facts, &populations).unwrap();

    let names: Vec<&str> = frames
        .facts
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            columns::RESULT_ID,
            columns::ATHLETE_SK,
            columns::GAMES_SK,
            columns::EVENT_SK,
            columns::COUNTRY_SK,
            columns::RANK,
            columns::TIE,
            columns::MEDAL,
            columns::TEAM_EVENT,
        ]
    );
}

#[test]
fn test_medals_export_as_labels() {
    let (dimensions, facts, populations) = build_test_warehouse();
    let frames = WarehouseFrames::build(&dimensions, &facts, &populations).unwrap();

    let medal_column = frames.facts.column(columns::MEDAL).unwrap();
    let medals: Vec<Option<&str>> = medal_column.str().unwrap().into_iter().collect();
    assert_eq!(
        medals,
        vec![Some("Gold"), Some("Silver"), Some("Gold"), None]
    );
}

#[test]
fn test_empty_warehouse_builds_empty_frames() {
    let frames = WarehouseFrames::build(&Default::default(), &[], &[]).unwrap();
    assert_eq!(frames.facts.height(), 0);
    assert_eq!(frames.athletes.height(), 0);
}
