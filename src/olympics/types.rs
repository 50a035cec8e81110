//! Type definitions for Olympic participation data.
//!
//! These mirror the JSON shape served by the data source: an array of
//! countries, each with an ordered list of games participations.

use serde::{Deserialize, Serialize};

/// One nation's Olympic record.
///
/// Identifiers are expected to be unique within a loaded collection;
/// the store surfaces a lookup error if that assumption is violated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Unique country identifier
    pub id: u32,
    /// Display name (JSON field `country`)
    #[serde(rename = "country")]
    pub name: String,
    /// Games appearances in chronological order of the source data
    pub participations: Vec<Participation>,
}

impl Country {
    /// Total medals won across all participations.
    pub fn total_medals(&self) -> u64 {
        self.participations
            .iter()
            .map(|p| u64::from(p.medals_count))
            .sum()
    }

    /// Total athletes entered across all participations.
    pub fn total_athletes(&self) -> u64 {
        self.participations
            .iter()
            .map(|p| u64::from(p.athlete_count))
            .sum()
    }
}

/// One games appearance for a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    pub id: u32,
    pub year: i32,
    pub city: String,
    pub medals_count: u32,
    pub athlete_count: u32,
}

/// A derived (title, value) pair displayed above the chart.
///
/// Never persisted; recomputed from scratch on every data refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistic {
    pub title: String,
    pub value: u64,
}

impl Statistic {
    pub fn new(title: impl Into<String>, value: u64) -> Self {
        Self {
            title: title.into(),
            value,
        }
    }
}

/// Chart-ready dataset derived from a collection snapshot.
///
/// All three vectors are index-aligned with the collection order the
/// dataset was computed from. `ids` carries the country identifier for
/// each segment so chart-click navigation never has to infer an id
/// from segment position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub ids: Vec<u32>,
}

impl ChartDataset {
    /// Number of segments in the dataset.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
