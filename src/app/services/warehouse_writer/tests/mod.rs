//! Tests for the warehouse writer service

pub mod frames_tests;
pub mod writer_tests;

use crate::app::models::{
    CleansedRecords, DimensionSet, FactResult, MedalTier, PopulationYear,
};
use crate::app::services::dimension_builder::DimensionBuilder;
use crate::app::services::dimension_builder::tests::{
    create_clean_athlete, create_clean_region, create_clean_result,
};
use crate::app::services::fact_builder::FactBuilder;

/// Build a small warehouse with medals spread over two nations
pub fn build_test_warehouse() -> (DimensionSet, Vec<FactResult>, Vec<PopulationYear>) {
    let mut records = CleansedRecords {
        athletes: vec![
            create_clean_athlete(1, "SWE"),
            create_clean_athlete(2, "SWE"),
            create_clean_athlete(3, "NOR"),
        ],
        noc_regions: vec![
            create_clean_region("SWE", "Sweden"),
            create_clean_region("NOR", "Norway"),
        ],
        results: vec![
            create_clean_result(1, 1, 6, "Athletics", "1500 metres", "SWE"),
            create_clean_result(2, 2, 6, "Athletics", "Marathon", "SWE"),
            create_clean_result(3, 3, 6, "Athletics", "Marathon", "NOR"),
            create_clean_result(4, 1, 8, "Swimming", "100 metres", "SWE"),
        ],
        ..Default::default()
    };

    records.results[0].medal = Some(MedalTier::Gold);
    records.results[1].medal = Some(MedalTier::Silver);
    records.results[2].medal = Some(MedalTier::Gold);

    records.populations = vec![
        PopulationYear {
            country: Some("Sweden".to_string()),
            country_code: Some("SWE".to_string()),
            year: 1960,
            population: 7480000,
        },
        PopulationYear {
            country: Some("Norway".to_string()),
            country_code: Some("NOR".to_string()),
            year: 1960,
            population: 3580000,
        },
    ];

    let dimension_build = DimensionBuilder::new().build(&records);
    let fact_build = FactBuilder::new().build(&records.results, &dimension_build.lookups, None);

    (
        dimension_build.dimensions,
        fact_build.facts,
        records.populations,
    )
}
