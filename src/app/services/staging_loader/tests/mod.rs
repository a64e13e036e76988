//! Tests for staged input discovery and loading

pub mod discovery_tests;

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a staged CSV fixture into a directory and return its path
pub fn write_fixture(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).expect("failed to write test fixture");
    path
}

/// Create a data directory holding all five staged inputs with small,
/// internally consistent contents
pub fn create_full_data_dir() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");

    write_fixture(
        dir.path(),
        "athlete_bio.csv",
        "athlete_id,name,sex,born,measurements,country,country_noc\n\
         1,Arnold Jackson,M,\"5 April 1891 in Addlestone, Surrey (GBR)\",183 cm / 73 kg,Great Britain,GBR\n\
         2,Sid Atkinson,M,\"24 May 1901 in Durban, Natal (RSA)\",187 cm / 80 kg,South Africa,RSA\n",
    );

    write_fixture(
        dir.path(),
        "athlete_bio_locs.csv",
        "athlete_id,born_city,born_region,born_country,lat,lon\n\
         1,Addlestone,Surrey,GBR,51.37,-0.49\n",
    );

    write_fixture(
        dir.path(),
        "noc_regions.csv",
        "noc,region,notes\nGBR,UK,\nRSA,South Africa,\n",
    );

    write_fixture(
        dir.path(),
        "populations.csv",
        "country,country_code,1960,1961\n\
         United Kingdom,GBR,52400000,52800000\n\
         South Africa,ZAF,17400000,17900000\n",
    );

    write_fixture(
        dir.path(),
        "athlete_event_results.csv",
        "edition,edition_id,country_noc,sport,event,result_id,athlete,athlete_id,pos,medal,isTeamSport\n\
         1912 Summer Olympics,6,GBR,Athletics,1500 metres,10001,Arnold Jackson,1,1,Gold,False\n\
         1924 Summer Olympics,8,RSA,Athletics,110 metres Hurdles,10002,Sid Atkinson,2,=2,Silver,False\n",
    );

    dir
}
