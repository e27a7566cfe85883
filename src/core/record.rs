use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;

use crate::render::format_number;

/// One row of the uninsured-adults table.
///
/// The numbers drive the scales; the text keeps each cell as it was written so
/// tooltips can show it unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub state: String,
    pub male: f64,
    pub female: f64,
    male_text: String,
    female_text: String,
}

impl Record {
    #[must_use]
    pub fn new(state: impl Into<String>, male: f64, female: f64) -> Self {
        Self {
            state: state.into(),
            male,
            female,
            male_text: format_number(male),
            female_text: format_number(female),
        }
    }

    /// Replaces the display text of both values, e.g. with the source cells.
    #[must_use]
    pub fn with_source_text(mut self, male: impl Into<String>, female: impl Into<String>) -> Self {
        self.male_text = male.into();
        self.female_text = female.into();
        self
    }

    #[must_use]
    pub fn male_text(&self) -> &str {
        &self.male_text
    }

    #[must_use]
    pub fn female_text(&self) -> &str {
        &self.female_text
    }
}

/// Records sharing one `state` key, in input order.
///
/// `values` is never empty; entries are only built by [`group_by_state`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedEntry {
    pub key: String,
    values: SmallVec<[Record; 1]>,
}

impl GroupedEntry {
    #[must_use]
    pub fn values(&self) -> &[Record] {
        &self.values
    }

    /// The record that drives drawing and tooltips.
    #[must_use]
    pub fn first(&self) -> &Record {
        &self.values[0]
    }
}

/// Groups records by state, keeping first-seen order of states and input order
/// within each group.
#[must_use]
pub fn group_by_state(records: &[Record]) -> Vec<GroupedEntry> {
    let mut groups: IndexMap<&str, SmallVec<[Record; 1]>> = IndexMap::new();
    for record in records {
        groups
            .entry(record.state.as_str())
            .or_default()
            .push(record.clone());
    }

    groups
        .into_iter()
        .map(|(key, values)| GroupedEntry {
            key: key.to_owned(),
            values,
        })
        .collect()
}
