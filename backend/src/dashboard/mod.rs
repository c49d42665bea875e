// backend/src/dashboard/mod.rs

//! Per-session page render: view + selections in, filters and charts out.
//! Re-run in full on every selection change.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::aggregate::{aggregate, distinct_values, Dimension, DimensionValue, Metric, MetricValue};
use crate::models::EmployeeView;

pub const PAGE_TITLE: &str = "Employee Salary Analysis";
pub const UNKNOWN_LABEL: &str = "Unknown";

/// `None` means "everything observed in the view".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selections {
    #[serde(default)]
    pub job_titles: Option<Vec<DimensionValue>>,
    #[serde(default)]
    pub countries: Option<Vec<DimensionValue>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub label: String,
    pub dimension: Dimension,
    pub options: Vec<DimensionValue>,
    pub selected: Vec<DimensionValue>,
}

impl Filter {
    fn build(
        label: &str,
        dimension: Dimension,
        view: &[EmployeeView],
        requested: Option<&[DimensionValue]>,
    ) -> Self {
        let options = distinct_values(view, dimension);
        let selected = match requested {
            None => options.clone(),
            Some(req) => options.iter().filter(|o| req.contains(o)).cloned().collect(),
        };
        Self { label: label.into(), dimension, options, selected }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub key: DimensionValue,
    pub value: MetricValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub title: String,
    pub dimension: Dimension,
    pub metric: Metric,
    pub x: String,
    pub y: String,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub title: String,
    pub total_employees: i64,
    pub total_text: String,
    pub job_title_filter: Filter,
    pub country_filter: Filter,
    pub charts: Vec<Chart>,
}

pub fn render(view: &[EmployeeView], total_employees: i64, selections: &Selections) -> Dashboard {
    let job_title_filter = Filter::build(
        "Select Job Title",
        Dimension::JobTitle,
        view,
        selections.job_titles.as_deref(),
    );
    let country_filter = Filter::build(
        "Select Countries",
        Dimension::Country,
        view,
        selections.countries.as_deref(),
    );

    let charts = vec![
        chart("Average Salary by Job Title", view, Metric::MeanCompensation, &job_title_filter),
        chart("Number of Employees by Job Title", view, Metric::Count, &job_title_filter),
        chart("Average Salary by Country", view, Metric::MeanCompensation, &country_filter),
        chart("Number of Employees by Country", view, Metric::Count, &country_filter),
    ];

    Dashboard {
        title: PAGE_TITLE.into(),
        total_employees,
        total_text: format!("Total number of employees = {total_employees}"),
        job_title_filter,
        country_filter,
        charts,
    }
}

fn chart(title: &str, view: &[EmployeeView], metric: Metric, filter: &Filter) -> Chart {
    let selected: HashSet<DimensionValue> = filter.selected.iter().cloned().collect();
    let mut bars: Vec<Bar> = aggregate(view, filter.dimension, metric, &selected)
        .into_iter()
        .map(|row| Bar {
            label: row.key.clone().unwrap_or_else(|| UNKNOWN_LABEL.into()),
            key: row.key,
            value: row.value,
        })
        .collect();
    // known labels alphabetically, the unknown bucket last
    bars.sort_by(|a, b| (a.key.is_none(), &a.label).cmp(&(b.key.is_none(), &b.label)));

    Chart {
        title: title.into(),
        dimension: filter.dimension,
        metric,
        x: filter.dimension.column().into(),
        y: metric.column().into(),
        bars,
    }
}
