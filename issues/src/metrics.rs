//! Static dashboard datasets.
//!
//! These figures are presentation fixtures and are not derived from the mock
//! issue set.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use serde::Serialize;

use crate::model::{Priority, Status};

/// Accent applied to a KPI card value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Neutral,
    Critical,
    Done,
}

/// Headline metric card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Kpi {
    pub title: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
    pub tone: Tone,
}

/// One labelled value in a categorical chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub name: &'static str,
    pub value: u32,
    /// CSS token for the slice color, e.g. `status-open`.
    pub color: &'static str,
}

/// Created/resolved counts for one weekday.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DailyStat {
    pub date: &'static str,
    pub created: u32,
    pub resolved: u32,
}

pub const KPIS: [Kpi; 4] = [
    Kpi { title: "Total Issues", value: "48", caption: "+4 from last week", tone: Tone::Neutral },
    Kpi { title: "Critical Issues", value: "3", caption: "Needs immediate attention", tone: Tone::Critical },
    Kpi { title: "Resolved Today", value: "7", caption: "Great progress!", tone: Tone::Done },
    Kpi { title: "Avg. Resolution", value: "2.3", caption: "days per issue", tone: Tone::Neutral },
];

pub const STATUS_DISTRIBUTION: [Slice; 4] = [
    status_slice(Status::Open, 12),
    status_slice(Status::Triaged, 8),
    status_slice(Status::Progress, 5),
    status_slice(Status::Done, 23),
];

pub const PRIORITY_BREAKDOWN: [Slice; 4] = [
    priority_slice(Priority::Critical, 3),
    priority_slice(Priority::High, 7),
    priority_slice(Priority::Medium, 15),
    priority_slice(Priority::Low, 23),
];

pub const DAILY_ACTIVITY: [DailyStat; 7] = [
    DailyStat { date: "Mon", created: 4, resolved: 2 },
    DailyStat { date: "Tue", created: 6, resolved: 5 },
    DailyStat { date: "Wed", created: 3, resolved: 4 },
    DailyStat { date: "Thu", created: 8, resolved: 3 },
    DailyStat { date: "Fri", created: 5, resolved: 7 },
    DailyStat { date: "Sat", created: 2, resolved: 1 },
    DailyStat { date: "Sun", created: 1, resolved: 3 },
];

const fn status_slice(status: Status, value: u32) -> Slice {
    let (name, color) = match status {
        Status::Open => ("Open", "status-open"),
        Status::Triaged => ("Triaged", "status-triaged"),
        Status::Progress => ("In Progress", "status-progress"),
        Status::Done => ("Done", "status-done"),
    };
    Slice { name, value, color }
}

const fn priority_slice(priority: Priority, value: u32) -> Slice {
    let (name, color) = match priority {
        Priority::Critical => ("Critical", "priority-critical"),
        Priority::High => ("High", "priority-high"),
        Priority::Medium => ("Medium", "priority-medium"),
        Priority::Low => ("Low", "priority-low"),
    };
    Slice { name, value, color }
}

/// Sum of all slice values.
#[must_use]
pub fn total(slices: &[Slice]) -> u32 {
    slices.iter().map(|s| s.value).sum()
}

/// Largest created or resolved count, used to scale the activity axis.
#[must_use]
pub fn peak(days: &[DailyStat]) -> u32 {
    days.iter().map(|d| d.created.max(d.resolved)).max().unwrap_or(0)
}
