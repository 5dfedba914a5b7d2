//! Merger and filter pipeline over normalized activities.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};

use super::roles::RoleGroup;
use super::types::{Activity, HistoryFilter, TimeFilter};

/// Merge normalized activities into one feed sorted by timestamp
/// descending. The sort is stable, so ties keep source-emission order;
/// deterministic, with no further meaning attached.
pub fn merge_descending(mut activities: Vec<Activity>) -> Vec<Activity> {
    activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    activities
}

/// Apply the kind, role-group and time filters in sequence. Input and
/// output are both newest-first.
pub fn apply_filter(
    mut activities: Vec<Activity>,
    filter: &HistoryFilter,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> Vec<Activity> {
    if let Some(kind) = filter.kind {
        activities.retain(|a| a.kind == kind);
    }

    if filter.role_group != RoleGroup::All {
        activities.retain(|a| filter.role_group.matches(a));
    }

    match &filter.time {
        TimeFilter::Window(window) => {
            if let Some(hours) = window.hours() {
                let cutoff = now - Duration::hours(hours);
                activities.retain(|a| a.timestamp >= cutoff);
            }
        }
        TimeFilter::Range { from, to } => {
            let start = from.and_then(|d| day_start(d, offset));
            let end = to.and_then(|d| day_end(d, offset));
            if let Some(start) = start {
                activities.retain(|a| a.timestamp >= start);
            }
            if let Some(end) = end {
                activities.retain(|a| a.timestamp <= end);
            }
        }
    }

    activities
}

/// Midnight (00:00:00.000) of `date` in the display offset, as UTC.
fn day_start(date: NaiveDate, offset: FixedOffset) -> Option<DateTime<Utc>> {
    let local = date.and_hms_opt(0, 0, 0)?;
    local
        .and_local_timezone(offset)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// End of day (23:59:59.999) of `date` in the display offset, as UTC.
fn day_end(date: NaiveDate, offset: FixedOffset) -> Option<DateTime<Utc>> {
    let local = date.and_hms_milli_opt(23, 59, 59, 999)?;
    local
        .and_local_timezone(offset)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}
