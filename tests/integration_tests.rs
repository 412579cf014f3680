use penguin_stats::analyzers::penguins::{
    avg_bill_length_by_island_and_year, avg_body_mass_by_species_and_sex,
    bill_depth_vs_flipper_length_by_species, body_mass_difference_by_sex_and_island, run_all,
};
use penguin_stats::analyzers::types::{Metric, SpeciesMetrics};
use penguin_stats::loader::{LoadError, load_records};
use penguin_stats::output::write_report;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/penguins_sample.csv")
}

#[test]
fn test_full_pipeline() {
    let records = load_records(&fixture()).expect("Failed to load fixture");
    assert_eq!(records.len(), 8);
    assert!(records[0].field_names().all(|name| !name.is_empty()));

    let report = run_all(&records);
    let path = std::env::temp_dir().join("penguin_stats_full_pipeline.txt");
    write_report(&path, &report).expect("Failed to write report");

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Average Body Mass by Species and Sex"));
    assert!(content.contains("Adelie (MALE): 3750.0"));
    assert!(content.contains("Torgersen: -50.0"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_fixture_values() {
    let records = load_records(&fixture()).unwrap();

    let masses = avg_body_mass_by_species_and_sex(&records);
    assert_eq!(masses["Adelie (MALE)"], 3750.0);
    // Sex is not normalized outside the difference computation.
    assert_eq!(masses["Gentoo (female)"], 4500.0);
    assert!(!masses.contains_key("Adelie (NA)"));

    let bills = avg_bill_length_by_island_and_year(&records);
    assert_eq!(bills["Torgersen (2007)"], 39.3);
    // The record without a species still counts here.
    assert_eq!(bills["Dream (2008)"], 43.35);

    let diffs = body_mass_difference_by_sex_and_island(&records);
    assert_eq!(diffs["Torgersen"], -50.0);
    assert_eq!(diffs["Biscoe"], 5700.0 - (5250.0 + 4500.0) / 2.0);
    assert_eq!(diffs["Dream"], 200.0);

    let species = bill_depth_vs_flipper_length_by_species(&records);
    assert_eq!(species.len(), 3);
    assert_eq!(
        species["Adelie"],
        SpeciesMetrics {
            avg_bill_depth: 18.05,
            avg_flipper_length: 183.5,
        }
    );
}

#[test]
fn test_report_sections_match_named_functions() {
    let records = load_records(&fixture()).unwrap();
    let report = run_all(&records);

    let section = report.get("body_mass_difference_by_sex_and_island").unwrap();
    assert_eq!(section.get("Torgersen"), Some(&Metric::Value(-50.0)));
    assert_eq!(report.len(), 6);
}

#[test]
fn test_missing_input_is_fatal() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/no_such_file.csv");
    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, LoadError::MissingFile { .. }));
}
