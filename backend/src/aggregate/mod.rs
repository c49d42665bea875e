// backend/src/aggregate/mod.rs

//! Group-by over the joined employee view.
//!
//! One entry point, [`aggregate`], parametrised by the grouping
//! [`Dimension`] and the [`Metric`]. Rows whose dimension is NULL are grouped
//! under the key `None` and only take part when `None` is selected.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::EmployeeView;

/// A dimension value as it appears in the view; `None` is a missing value.
pub type DimensionValue = Option<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    JobTitle,
    Country,
}

impl Dimension {
    pub fn value_of(self, row: &EmployeeView) -> Option<&str> {
        match self {
            Dimension::JobTitle => row.job_title.as_deref(),
            Dimension::Country => row.country.as_deref(),
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Dimension::JobTitle => "JobTitle",
            Dimension::Country => "Country",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    MeanCompensation,
    Count,
}

impl Metric {
    pub fn column(self) -> &'static str {
        match self {
            Metric::MeanCompensation => "YearlyCompensation",
            Metric::Count => "Count",
        }
    }
}

/// `Mean(None)` marks a group where no member has a compensation value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(u64),
    Mean(Option<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub key: DimensionValue,
    pub value: MetricValue,
}

#[derive(Debug, Default)]
struct Accumulator {
    rows: u64,
    paid: u64,
    compensation: f64,
}

impl Accumulator {
    fn push(&mut self, compensation: Option<f64>) {
        self.rows += 1;
        if let Some(c) = compensation {
            self.paid += 1;
            self.compensation += c;
        }
    }

    fn finish(self, metric: Metric) -> MetricValue {
        match metric {
            Metric::Count => MetricValue::Count(self.rows),
            Metric::MeanCompensation if self.paid == 0 => MetricValue::Mean(None),
            Metric::MeanCompensation => {
                MetricValue::Mean(Some(self.compensation / self.paid as f64))
            }
        }
    }
}

/// Filters `view` to rows whose `dimension` value is in `selected`, groups by
/// that value and computes `metric` per group.
///
/// Groups come out in the order their key first appears in `view`.
pub fn aggregate(
    view: &[EmployeeView],
    dimension: Dimension,
    metric: Metric,
    selected: &HashSet<DimensionValue>,
) -> Vec<SummaryRow> {
    if selected.is_empty() {
        return Vec::new();
    }
    let wanted: HashSet<Option<&str>> = selected.iter().map(|v| v.as_deref()).collect();

    let mut groups: Vec<(Option<&str>, Accumulator)> = Vec::new();
    let mut slots: HashMap<Option<&str>, usize> = HashMap::new();
    for row in view {
        let key = dimension.value_of(row);
        if !wanted.contains(&key) {
            continue;
        }
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push((key, Accumulator::default()));
            groups.len() - 1
        });
        groups[slot].1.push(row.yearly_compensation);
    }

    groups
        .into_iter()
        .map(|(key, acc)| SummaryRow {
            key: key.map(str::to_owned),
            value: acc.finish(metric),
        })
        .collect()
}

/// Distinct values of `dimension` in first-seen order, `None` included when
/// some row lacks the value.
pub fn distinct_values(view: &[EmployeeView], dimension: Dimension) -> Vec<DimensionValue> {
    let mut seen = HashSet::new();
    view.iter()
        .map(|row| dimension.value_of(row))
        .filter(|v| seen.insert(*v))
        .map(|v| v.map(str::to_owned))
        .collect()
}
