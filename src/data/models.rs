//! Data models for annual sea-level measurements.

use serde::Serialize;

/// One annual measurement: the year and its adjusted sea level in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeaLevelRecord {
    pub year: i32,
    pub level: f64,
}

impl SeaLevelRecord {
    pub fn new(year: i32, level: f64) -> Self {
        SeaLevelRecord { year, level }
    }
}

/// An ordered set of sea-level records as read from the source
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeaLevelSeries {
    records: Vec<SeaLevelRecord>,
}

impl SeaLevelSeries {
    pub fn new(records: Vec<SeaLevelRecord>) -> Self {
        SeaLevelSeries { records }
    }

    pub fn records(&self) -> &[SeaLevelRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn min_year(&self) -> Option<i32> {
        self.records.iter().map(|r| r.year).min()
    }

    pub fn max_year(&self) -> Option<i32> {
        self.records.iter().map(|r| r.year).max()
    }

    /// Records with `year >= start_year`, order preserved
    pub fn since(&self, start_year: i32) -> SeaLevelSeries {
        SeaLevelSeries {
            records: self
                .records
                .iter()
                .filter(|r| r.year >= start_year)
                .copied()
                .collect(),
        }
    }

    /// Index of the first record whose year does not strictly increase on its predecessor.
    ///
    /// The source is expected to hold unique, ascending years; callers only
    /// report a violation, they never reorder.
    pub fn first_unordered_index(&self) -> Option<usize> {
        self.records
            .windows(2)
            .position(|pair| pair[1].year <= pair[0].year)
            .map(|i| i + 1)
    }
}

impl FromIterator<SeaLevelRecord> for SeaLevelSeries {
    fn from_iter<I: IntoIterator<Item = SeaLevelRecord>>(iter: I) -> Self {
        SeaLevelSeries::new(iter.into_iter().collect())
    }
}
