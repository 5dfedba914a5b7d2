//! Day grouping for progressive disclosure.

use chrono::FixedOffset;
use std::collections::BTreeSet;

use super::types::{Activity, DayGroup};

/// Partition a newest-first feed into per-calendar-day buckets in the
/// display offset. Buckets come out in descending date order with member
/// order preserved; days with nothing left after filtering are simply
/// absent.
///
/// The input being sorted descending means day keys are non-increasing, so
/// a single run-length pass suffices.
pub fn group_by_day(activities: &[Activity], offset: FixedOffset) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for activity in activities {
        let date = activity.timestamp.with_timezone(&offset).date_naive();
        match groups.last_mut() {
            Some(group) if group.date == date => group.activities.push(activity.clone()),
            _ => groups.push(DayGroup {
                date,
                activities: vec![activity.clone()],
            }),
        }
    }
    groups
}

/// Per-day expand/collapse state, keyed by `%Y-%m-%d` date string.
/// All days start collapsed; toggling one never touches another. Held
/// explicitly by the view session instead of living in ambient UI state.
#[derive(Debug, Clone, Default)]
pub struct DayExpansion {
    expanded: BTreeSet<String>,
}

impl DayExpansion {
    pub fn is_expanded(&self, date_key: &str) -> bool {
        self.expanded.contains(date_key)
    }

    pub fn toggle(&mut self, date_key: &str) {
        if !self.expanded.remove(date_key) {
            self.expanded.insert(date_key.to_string());
        }
    }

    /// Collapse everything; used when the selected patient changes.
    pub fn reset(&mut self) {
        self.expanded.clear();
    }
}
