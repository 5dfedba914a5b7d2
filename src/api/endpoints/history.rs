//! History endpoints.
//!
//! `GET /api/patients/:id/history`; filtered, day-grouped activity feed.
//! `GET /api/patients/:id/history/charts`; vital trend + lab sessions.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::history::{
    apply_filter, group_by_day, lab_series, lab_sessions, vital_trend, DayGroup, HistoryFilter,
    LabSessionBucket, SourceOutcome, TimeWindow, VitalTrendPoint,
};
use crate::models::Patient;
use crate::sources::fetch_patient_history;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Activity type, or absent for "all".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Role group or concrete role name, default "all".
    pub role: Option<String>,
    /// Relative window: today | 7d | 30d | 3m | 6m | all.
    pub window: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl HistoryQuery {
    /// Builds the filter, rejecting a window combined with an explicit
    /// range; the two must never constrain the feed simultaneously.
    fn into_filter(self) -> Result<HistoryFilter, ApiError> {
        let mut filter = HistoryFilter::default();

        if let Some(kind) = self.kind.as_deref() {
            filter.kind = Some(kind.parse()?);
        }
        if let Some(role) = self.role.as_deref() {
            filter.role_group = role.parse()?;
        }

        let has_range = self.from.is_some() || self.to.is_some();
        if let Some(window) = self.window.as_deref() {
            if has_range {
                return Err(ApiError::BadRequest(
                    "window and from/to are mutually exclusive".into(),
                ));
            }
            filter.set_window(parse_window(window)?);
        } else if has_range {
            filter.set_range(
                self.from.as_deref().map(parse_date).transpose()?,
                self.to.as_deref().map(parse_date).transpose()?,
            );
        }

        Ok(filter)
    }
}

fn parse_window(s: &str) -> Result<TimeWindow, ApiError> {
    match s {
        "today" => Ok(TimeWindow::Today),
        "7d" => Ok(TimeWindow::Last7Days),
        "30d" => Ok(TimeWindow::Last30Days),
        "3m" => Ok(TimeWindow::Last3Months),
        "6m" => Ok(TimeWindow::Last6Months),
        "all" => Ok(TimeWindow::All),
        other => Err(ApiError::BadRequest(format!("unknown window: {other}"))),
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest(format!("invalid date: {s}")))
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub generated_at: DateTime<Utc>,
    pub patient: Option<Patient>,
    pub total: usize,
    pub days: Vec<DayGroup>,
    pub sources: Vec<SourceOutcome>,
}

/// `GET /api/patients/:id/history`
pub async fn feed(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<Uuid>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let filter = query.into_filter()?;
    let fetched = fetch_patient_history(&ctx.client, patient_id).await;

    let now = Utc::now();
    let filtered = apply_filter(fetched.activities, &filter, now, ctx.display_offset);
    let days = group_by_day(&filtered, ctx.display_offset);

    Ok(Json(HistoryResponse {
        generated_at: now,
        patient: fetched.patient,
        total: filtered.len(),
        days,
        sources: fetched.sources,
    }))
}

#[derive(Debug, Serialize)]
pub struct ChartsResponse {
    pub generated_at: DateTime<Utc>,
    pub vitals: Vec<VitalTrendPoint>,
    pub lab_sessions: Vec<LabSessionBucket>,
    pub lab_series: Vec<String>,
    pub sources: Vec<SourceOutcome>,
}

/// `GET /api/patients/:id/history/charts`
pub async fn charts(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<Uuid>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ChartsResponse>, ApiError> {
    let filter = query.into_filter()?;
    let fetched = fetch_patient_history(&ctx.client, patient_id).await;

    let now = Utc::now();
    let filtered = apply_filter(fetched.activities, &filter, now, ctx.display_offset);

    Ok(Json(ChartsResponse {
        generated_at: now,
        vitals: vital_trend(&filtered),
        lab_sessions: lab_sessions(&filtered, ctx.display_offset),
        lab_series: lab_series(&filtered),
        sources: fetched.sources,
    }))
}
