use crate::analyzers::types::Accumulator;
use crate::analyzers::utility::{coerce_number, round2};
use crate::record::Record;
use indexmap::IndexMap;
use std::hash::Hash;
use tracing::debug;

/// Extracts one numeric value from a record, or `None` when it is absent.
pub type ValueFn<'a> = &'a dyn Fn(&Record) -> Option<f64>;

/// Returns an extractor that coerces the named field to a number.
pub fn numeric(field: &'static str) -> impl Fn(&Record) -> Option<f64> {
    move |r| coerce_number(r.get(field))
}

/// Returns a key extractor over one field, rejecting empty or missing values.
pub fn key1(field: &'static str) -> impl Fn(&Record) -> Option<String> {
    move |r| r.non_empty(field).map(str::to_owned)
}

/// Returns a key extractor over two fields, rejecting empty or missing values.
pub fn key2(a: &'static str, b: &'static str) -> impl Fn(&Record) -> Option<(String, String)> {
    move |r| Some((r.non_empty(a)?.to_owned(), r.non_empty(b)?.to_owned()))
}

/// Partitions `records` by key and sums the extracted values per group.
///
/// A record contributes only when its key is valid and every extractor
/// yields a value. Groups appear in order of their first contributing record,
/// so every returned accumulator has `count >= 1`.
pub fn group_by<K, F, const N: usize>(
    records: &[Record],
    key: F,
    values: [ValueFn<'_>; N],
) -> IndexMap<K, Accumulator<N>>
where
    K: Hash + Eq,
    F: Fn(&Record) -> Option<K>,
{
    let mut groups: IndexMap<K, Accumulator<N>> = IndexMap::new();
    let mut skipped = 0usize;

    'records: for record in records {
        let Some(k) = key(record) else {
            skipped += 1;
            continue;
        };

        let mut sample = [0.0; N];
        for (slot, extract) in sample.iter_mut().zip(values) {
            match extract(record) {
                Some(v) => *slot = v,
                None => {
                    skipped += 1;
                    continue 'records;
                }
            }
        }

        groups.entry(k).or_default().add(sample);
    }

    debug!(
        records = records.len(),
        skipped,
        groups = groups.len(),
        "Records grouped"
    );

    groups
}

/// Rounds each group's means and formats its key into a display label.
pub fn rounded_means<K, L, const N: usize>(
    groups: &IndexMap<K, Accumulator<N>>,
    label: L,
) -> IndexMap<String, [f64; N]>
where
    L: Fn(&K) -> String,
{
    groups
        .iter()
        .map(|(k, acc)| (label(k), acc.means().map(round2)))
        .collect()
}

/// Single-value grouped average: `label(key) -> round2(mean(value))`.
pub fn average_by<K, F, L>(
    records: &[Record],
    key: F,
    value: ValueFn<'_>,
    label: L,
) -> IndexMap<String, f64>
where
    K: Hash + Eq,
    F: Fn(&Record) -> Option<K>,
    L: Fn(&K) -> String,
{
    let groups = group_by(records, key, [value]);
    rounded_means(&groups, label)
        .into_iter()
        .map(|(label, [mean])| (label, mean))
        .collect()
}

/// Formats a two-field key as `"first (second)"`.
pub fn paired_label((first, second): &(String, String)) -> String {
    format!("{first} ({second})")
}
