use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{ActivityKind, SourceKind, StaffRole};

/// A single clinical activity; unified across all eight sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    pub role: StaffRole,
    pub timestamp: DateTime<Utc>,
    /// True when no source timestamp could be parsed and `timestamp` had to
    /// be substituted with the assembly time. The record is kept rather than
    /// dropped, but the UI can caption it instead of presenting it as
    /// genuinely current.
    pub undated: bool,
    pub detail: ActivityDetail,
}

/// Kind-specific payload carried by each activity. Produced once by the
/// normalizer; downstream components match on it, never re-infer it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ActivityDetail {
    Complaint {
        description: String,
        severity: Option<String>,
        location: Option<String>,
    },
    Vital {
        title: String,
        temperature: Option<f64>,
        heart_rate: Option<f64>,
        blood_pressure: Option<String>,
        oxygen_saturation: Option<f64>,
        respiratory_rate: Option<f64>,
    },
    /// SEAR-B cardiovascular risk score split out of a vital record.
    CardioRisk {
        score: Option<f64>,
        level: Option<String>,
        notes: Option<String>,
    },
    Lab {
        test_type: String,
        value: String,
        unit: Option<String>,
        normal_range: Option<String>,
        status: Option<String>,
        notes: Option<String>,
        technician_role: Option<StaffRole>,
    },
    Handled {
        diagnosis: String,
        treatment_plan: Option<String>,
        status: Option<String>,
        priority: Option<String>,
        handler_name: Option<String>,
    },
    Visitation {
        shift: String,
        notes: Option<String>,
        medications_given: Vec<String>,
    },
    Nutrition {
        diet_plan: String,
        target_calories: Option<f64>,
        compliance_score: Option<f64>,
    },
    Pharmacy {
        items: Vec<PharmacyItem>,
        status: Option<String>,
    },
    MedicalReport {
        report_type: String,
        chief_complaint: Option<String>,
        diagnosis: Option<String>,
        doctor_name: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PharmacyItem {
    pub name: String,
    pub quantity: Option<u32>,
    pub dosage: Option<String>,
}

/// Relative window measured back from "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    Today,
    Last7Days,
    Last30Days,
    Last3Months,
    Last6Months,
    All,
}

impl TimeWindow {
    /// Window length in hours; `None` means unbounded.
    pub fn hours(self) -> Option<i64> {
        match self {
            TimeWindow::Today => Some(24),
            TimeWindow::Last7Days => Some(7 * 24),
            TimeWindow::Last30Days => Some(30 * 24),
            TimeWindow::Last3Months => Some(90 * 24),
            TimeWindow::Last6Months => Some(180 * 24),
            TimeWindow::All => None,
        }
    }
}

/// Time constraint on the feed. A relative window and an explicit range are
/// mutually exclusive by construction; the filter holds exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFilter {
    Window(TimeWindow),
    /// Inclusive calendar-date range in the display offset. `from` starts at
    /// 00:00:00.000, `to` ends at 23:59:59.999; an unset endpoint is
    /// unbounded on that side.
    Range {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl Default for TimeFilter {
    fn default() -> Self {
        TimeFilter::Window(TimeWindow::All)
    }
}

/// Filter selection sent from the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryFilter {
    /// `None` means "all".
    pub kind: Option<ActivityKind>,
    #[serde(default)]
    pub role_group: super::roles::RoleGroup,
    #[serde(default)]
    pub time: TimeFilter,
}

impl HistoryFilter {
    /// Replaces any relative window with an explicit range.
    pub fn set_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.time = TimeFilter::Range { from, to };
    }

    /// Replaces any explicit range with a relative window.
    pub fn set_window(&mut self, window: TimeWindow) {
        self.time = TimeFilter::Window(window);
    }
}

/// One calendar day's worth of the filtered feed, for progressive
/// disclosure. Member order is the feed order (newest first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
}

/// What one source contributed to an assembly. Distinguishes "zero records
/// because nothing happened" from "zero records because the fetch failed".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceOutcome {
    pub source: SourceKind,
    pub count: usize,
    pub error: Option<String>,
}

impl SourceOutcome {
    pub fn ok(source: SourceKind, count: usize) -> Self {
        Self { source, count, error: None }
    }

    pub fn failed(source: SourceKind, error: impl Into<String>) -> Self {
        Self { source, count: 0, error: Some(error.into()) }
    }
}

/// Complete assembled history for one patient; single response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryData {
    pub generated_at: DateTime<Utc>,
    /// Filtered feed, newest first.
    pub activities: Vec<Activity>,
    pub sources: Vec<SourceOutcome>,
}

/// A 5-minute lab session with test-type values pivoted into one row.
/// Derived for charting only, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabSessionBucket {
    pub date: NaiveDate,
    /// Session start, floored to the lower 5-minute mark.
    pub time: NaiveTime,
    pub values: BTreeMap<String, f64>,
}
