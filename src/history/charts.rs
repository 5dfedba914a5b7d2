//! Chart projections over the filtered feed.
//!
//! Both projections re-order ascending by time, opposite the feed, because
//! charts read left-to-right as time increases.

use chrono::{DateTime, FixedOffset, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::types::{Activity, ActivityDetail, LabSessionBucket};
use crate::models::ActivityKind;

/// One point on the vital-signs trend. A field absent on the underlying
/// record stays `None` so the line chart can skip the gap instead of
/// implying a reading of zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalTrendPoint {
    pub timestamp: DateTime<Utc>,
    pub temperature: Option<f64>,
    pub heart_rate: Option<f64>,
    pub systolic: Option<u32>,
    pub oxygen_saturation: Option<f64>,
    pub respiratory_rate: Option<f64>,
}

/// Systolic is the integer before the `/` in a "sys/dia" reading.
fn parse_systolic(blood_pressure: &str) -> Option<u32> {
    blood_pressure.split('/').next()?.trim().parse().ok()
}

/// Project the `vital` subset of a newest-first feed into ascending trend
/// points.
pub fn vital_trend(filtered: &[Activity]) -> Vec<VitalTrendPoint> {
    filtered
        .iter()
        .rev()
        .filter(|a| a.kind == ActivityKind::Vital)
        .filter_map(|a| match &a.detail {
            ActivityDetail::Vital {
                temperature,
                heart_rate,
                blood_pressure,
                oxygen_saturation,
                respiratory_rate,
                ..
            } => Some(VitalTrendPoint {
                timestamp: a.timestamp,
                temperature: *temperature,
                heart_rate: *heart_rate,
                systolic: blood_pressure.as_deref().and_then(parse_systolic),
                oxygen_saturation: *oxygen_saturation,
                respiratory_rate: *respiratory_rate,
            }),
            _ => None,
        })
        .collect()
}

/// Group the `lab` subset into 5-minute session buckets, pivoting test
/// types into columns. Iteration is ascending (stable), so within a bucket
/// the later record of a duplicated test type deterministically wins.
/// Non-numeric values are dropped here only; they stay in the list view.
pub fn lab_sessions(filtered: &[Activity], offset: FixedOffset) -> Vec<LabSessionBucket> {
    let mut buckets: BTreeMap<(chrono::NaiveDate, NaiveTime), BTreeMap<String, f64>> =
        BTreeMap::new();

    for activity in filtered.iter().rev() {
        let ActivityDetail::Lab {
            test_type, value, ..
        } = &activity.detail
        else {
            continue;
        };
        let Ok(numeric) = value.trim().parse::<f64>() else {
            continue;
        };

        let local = activity.timestamp.with_timezone(&offset);
        let time = local.time();
        let floored = NaiveTime::from_hms_opt(time.hour(), time.minute() - time.minute() % 5, 0)
            .unwrap_or(time);

        buckets
            .entry((local.date_naive(), floored))
            .or_default()
            .insert(test_type.clone(), numeric);
    }

    buckets
        .into_iter()
        .map(|((date, time), values)| LabSessionBucket { date, time, values })
        .collect()
}

/// Distinct test-type names observed across the filtered lab subset;
/// the chart legend, in stable alphabetical order.
pub fn lab_series(filtered: &[Activity]) -> Vec<String> {
    filtered
        .iter()
        .filter_map(|a| match &a.detail {
            ActivityDetail::Lab { test_type, .. } => Some(test_type.clone()),
            _ => None,
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Per-series visibility for the lab chart. The bulk "select all" state is
/// always derived from the individual toggles, never stored, so the two
/// cannot drift apart.
#[derive(Debug, Clone, Default)]
pub struct SeriesVisibility {
    hidden: BTreeSet<String>,
}

impl SeriesVisibility {
    pub fn is_active(&self, series: &str) -> bool {
        !self.hidden.contains(series)
    }

    pub fn toggle(&mut self, series: &str) {
        if !self.hidden.remove(series) {
            self.hidden.insert(series.to_string());
        }
    }

    /// True iff every known series is individually active.
    pub fn all_active(&self, series: &[String]) -> bool {
        series.iter().all(|s| self.is_active(s))
    }

    /// Bulk action: activate everything unless everything is already
    /// active, in which case deactivate everything.
    pub fn toggle_all(&mut self, series: &[String]) {
        if self.all_active(series) {
            self.hidden.extend(series.iter().cloned());
        } else {
            for s in series {
                self.hidden.remove(s);
            }
        }
    }

    pub fn reset(&mut self) {
        self.hidden.clear();
    }
}
