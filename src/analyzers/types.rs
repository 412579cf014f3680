//! Data types used by the aggregation pipeline.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Running totals for one group, one slot per measured value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulator<const N: usize> {
    pub(crate) totals: [f64; N],
    pub(crate) count: usize,
}

impl<const N: usize> Default for Accumulator<N> {
    fn default() -> Self {
        Self {
            totals: [0.0; N],
            count: 0,
        }
    }
}

impl<const N: usize> Accumulator<N> {
    /// Adds one contributing record's values.
    pub fn add(&mut self, values: [f64; N]) {
        for (total, value) in self.totals.iter_mut().zip(values) {
            *total += value;
        }
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn totals(&self) -> [f64; N] {
        self.totals
    }

    /// Unrounded per-slot means. Only called on groups with `count >= 1`.
    pub fn means(&self) -> [f64; N] {
        self.totals.map(|total| total / self.count as f64)
    }
}

/// Per-species averages for the bill depth vs flipper length comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeciesMetrics {
    pub avg_bill_depth: f64,
    pub avg_flipper_length: f64,
}

impl fmt::Display for SpeciesMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avg_bill_depth: {:?}, avg_flipper_length: {:?}",
            self.avg_bill_depth, self.avg_flipper_length
        )
    }
}

/// A single reported value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Metric {
    Value(f64),
    Species(SpeciesMetrics),
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps the trailing `.0` on whole numbers.
            Metric::Value(v) => write!(f, "{v:?}"),
            Metric::Species(m) => fmt::Display::fmt(m, f),
        }
    }
}

impl From<f64> for Metric {
    fn from(v: f64) -> Self {
        Metric::Value(v)
    }
}

impl From<SpeciesMetrics> for Metric {
    fn from(m: SpeciesMetrics) -> Self {
        Metric::Species(m)
    }
}

/// Output of one named aggregation: a titled, ordered label -> value map.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Section {
    #[serde(skip)]
    pub(crate) title: &'static str,
    pub(crate) entries: IndexMap<String, Metric>,
}

impl Section {
    pub fn new<V: Into<Metric>>(title: &'static str, entries: IndexMap<String, V>) -> Self {
        Self {
            title,
            entries: entries.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }

    pub fn title(&self) -> &str {
        self.title
    }

    pub fn get(&self, label: &str) -> Option<&Metric> {
        self.entries.get(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Metric)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every aggregation, keyed by name, in run order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Report {
    sections: IndexMap<&'static str, Section>,
}

impl Report {
    pub fn insert(&mut self, name: &'static str, section: Section) {
        self.sections.insert(name, section);
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Section)> {
        self.sections.iter().map(|(k, v)| (*k, v))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
