//! The six named aggregations over the penguin dataset.

use crate::analyzers::aggregate::{
    average_by, group_by, key1, key2, numeric, paired_label, rounded_means,
};
use crate::analyzers::types::{Report, Section, SpeciesMetrics};
use crate::analyzers::utility::round2;
use crate::record::Record;
use indexmap::{IndexMap, IndexSet};
use tracing::info;

pub const SPECIES: &str = "species";
pub const ISLAND: &str = "island";
pub const BILL_LENGTH: &str = "bill_length_mm";
pub const BILL_DEPTH: &str = "bill_depth_mm";
pub const FLIPPER_LENGTH: &str = "flipper_length_mm";
pub const BODY_MASS: &str = "body_mass_g";
pub const SEX: &str = "sex";
pub const YEAR: &str = "year";

const MALE: &str = "MALE";
const FEMALE: &str = "FEMALE";

/// Mean body mass keyed `"{species} ({sex})"`.
#[tracing::instrument(skip_all)]
pub fn avg_body_mass_by_species_and_sex(records: &[Record]) -> IndexMap<String, f64> {
    average_by(records, key2(SPECIES, SEX), &numeric(BODY_MASS), paired_label)
}

/// Mean bill length keyed `"{island} ({year})"`.
#[tracing::instrument(skip_all)]
pub fn avg_bill_length_by_island_and_year(records: &[Record]) -> IndexMap<String, f64> {
    average_by(records, key2(ISLAND, YEAR), &numeric(BILL_LENGTH), paired_label)
}

/// Mean flipper length keyed `"{species} ({island})"`.
#[tracing::instrument(skip_all)]
pub fn avg_flipper_length_by_species_and_island(records: &[Record]) -> IndexMap<String, f64> {
    average_by(
        records,
        key2(SPECIES, ISLAND),
        &numeric(FLIPPER_LENGTH),
        paired_label,
    )
}

/// Mean bill depth and mean flipper length per species.
///
/// A record counts only if both measurements are present.
#[tracing::instrument(skip_all)]
pub fn bill_depth_vs_flipper_length_by_species(
    records: &[Record],
) -> IndexMap<String, SpeciesMetrics> {
    let groups = group_by(
        records,
        key1(SPECIES),
        [&numeric(BILL_DEPTH), &numeric(FLIPPER_LENGTH)],
    );

    rounded_means(&groups, String::clone)
        .into_iter()
        .map(|(species, [avg_bill_depth, avg_flipper_length])| {
            (
                species,
                SpeciesMetrics {
                    avg_bill_depth,
                    avg_flipper_length,
                },
            )
        })
        .collect()
}

/// Mean bill length keyed `"{year} ({sex})"`.
#[tracing::instrument(skip_all)]
pub fn avg_bill_length_by_year_and_sex(records: &[Record]) -> IndexMap<String, f64> {
    average_by(records, key2(YEAR, SEX), &numeric(BILL_LENGTH), paired_label)
}

/// Male minus female mean body mass per island.
///
/// Sex is compared case-insensitively. Islands lacking either sex are left
/// out. The difference is taken between unrounded means and then rounded.
#[tracing::instrument(skip_all)]
pub fn body_mass_difference_by_sex_and_island(records: &[Record]) -> IndexMap<String, f64> {
    let island_sex = key2(ISLAND, SEX);
    let key = |r: &Record| island_sex(r).map(|(island, sex)| (island, sex.to_uppercase()));
    let groups = group_by(records, key, [&numeric(BODY_MASS)]);

    let islands: IndexSet<&String> = groups.keys().map(|(island, _)| island).collect();

    let mut result = IndexMap::new();
    for island in islands {
        let mean_for = |sex: &str| {
            groups
                .get(&(island.clone(), sex.to_string()))
                .map(|acc| acc.means()[0])
        };

        if let (Some(male), Some(female)) = (mean_for(MALE), mean_for(FEMALE)) {
            result.insert(island.clone(), round2(male - female));
        }
    }

    result
}

/// Runs every aggregation in report order.
#[tracing::instrument(skip_all, fields(records = records.len()))]
pub fn run_all(records: &[Record]) -> Report {
    let mut report = Report::default();

    macro_rules! run {
        ($aggregation:ident, $title:expr) => {
            let section = Section::new($title, $aggregation(records));
            info!(
                aggregation = stringify!($aggregation),
                entries = section.len(),
                "Aggregation complete"
            );
            report.insert(stringify!($aggregation), section);
        };
    }

    run!(
        avg_body_mass_by_species_and_sex,
        "Average Body Mass by Species and Sex"
    );
    run!(
        avg_bill_length_by_island_and_year,
        "Average Bill Length by Island and Year"
    );
    run!(
        avg_flipper_length_by_species_and_island,
        "Average Flipper Length by Species and Island"
    );
    run!(
        bill_depth_vs_flipper_length_by_species,
        "Bill Depth vs Flipper Length by Species"
    );
    run!(
        avg_bill_length_by_year_and_sex,
        "Average Bill Length by Year and Sex"
    );
    run!(
        body_mass_difference_by_sex_and_island,
        "Body Mass Difference (Male - Female) by Island"
    );

    report
}
