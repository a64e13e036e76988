//! Athlete biography normalization
//!
//! Cleanses the staged biography and geocoordinate rows. The born fragment
//! feeds both the date parser and the location parser; the combined
//! measurements fragment yields height and weight independently by unit
//! adjacency. A row that fails every field is still retained with all
//! attributes absent.

use crate::app::models::{CleanAthlete, CleanAthleteGeo, RawAthleteBio, RawAthleteGeo};
use crate::app::services::text_normalizer::{
    clean_name, normalize_code, parse_date, parse_height_cm, parse_location, parse_optional_f64,
    parse_optional_i64, parse_weight_kg,
};
use indicatif::ProgressBar;

use super::stats::NormalizationStats;

/// Normalize staged biography rows into cleansed athlete records
pub fn normalize_athletes(
    raw: Vec<RawAthleteBio>,
    stats: &mut NormalizationStats,
    progress: Option<&ProgressBar>,
) -> Vec<CleanAthlete> {
    stats.athletes_in = raw.len();

    let mut cleansed = Vec::with_capacity(raw.len());
    for row in raw {
        let birth_date = parse_date(&row.born);
        let birthplace = parse_location(&row.born);
        let height_cm = parse_height_cm(&row.measurements);
        let weight_kg = parse_weight_kg(&row.measurements);

        if birth_date.is_none() {
            stats.birth_dates_absent += 1;
        }
        if birthplace.city.is_none()
            && birthplace.region.is_none()
            && birthplace.country_code.is_none()
        {
            stats.birthplaces_absent += 1;
        }
        if height_cm.is_none() {
            stats.heights_absent += 1;
        }
        if weight_kg.is_none() {
            stats.weights_absent += 1;
        }

        cleansed.push(CleanAthlete {
            athlete_id: parse_optional_i64(&row.athlete_id),
            name: clean_name(&row.name),
            sex: normalize_code(&row.sex),
            birth_date,
            birth_city: birthplace.city,
            birth_region: birthplace.region,
            birth_country_noc: birthplace.country_code,
            height_cm,
            weight_kg,
            noc: normalize_code(&row.country_noc),
        });

        if let Some(pb) = progress {
            pb.inc(1);
        }
    }

    cleansed
}

/// Normalize staged geocoordinate enrichment rows
pub fn normalize_athlete_geos(
    raw: Vec<RawAthleteGeo>,
    stats: &mut NormalizationStats,
) -> Vec<CleanAthleteGeo> {
    stats.geos_in = raw.len();

    raw.into_iter()
        .map(|row| CleanAthleteGeo {
            athlete_id: parse_optional_i64(&row.athlete_id),
            latitude: parse_optional_f64(&row.latitude),
            longitude: parse_optional_f64(&row.longitude),
        })
        .collect()
}
