//! Concurrent fan-out over the eight sources, joined into one normalized,
//! merged feed. One source failing never affects another: each branch
//! settles on its own and a failure degrades to zero activities plus a
//! populated `SourceOutcome.error`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{SourceClient, SourceError};
use crate::history::normalize::{
    normalize_complaints, normalize_handled, normalize_labs, normalize_nutrition,
    normalize_pharmacy, normalize_reports, normalize_visitations, normalize_vitals,
};
use crate::history::{merge_descending, Activity, SourceOutcome};
use crate::models::{Patient, SourceKind};

/// Everything one fan-out produced: the merged (unfiltered, newest-first)
/// feed, the per-source outcomes, and the patient context when the vitals
/// service supplied it.
#[derive(Debug)]
pub struct PatientHistory {
    pub patient: Option<Patient>,
    pub activities: Vec<Activity>,
    pub sources: Vec<SourceOutcome>,
}

fn settle<R>(
    result: Result<Vec<R>, SourceError>,
    source: SourceKind,
    normalize: impl FnOnce(Vec<R>, DateTime<Utc>) -> Vec<Activity>,
    now: DateTime<Utc>,
    activities: &mut Vec<Activity>,
    sources: &mut Vec<SourceOutcome>,
) {
    match result {
        Ok(records) => {
            sources.push(SourceOutcome::ok(source, records.len()));
            activities.extend(normalize(records, now));
        }
        Err(e) => {
            tracing::warn!(
                source = source.as_str(),
                error = %e,
                "source fetch failed, contributing no activities"
            );
            sources.push(SourceOutcome::failed(source, e.to_string()));
        }
    }
}

/// Fetch all eight sources concurrently and wait for every one to settle;
/// a join, not a pipeline with early termination.
pub async fn fetch_patient_history(client: &SourceClient, patient_id: Uuid) -> PatientHistory {
    let now = Utc::now();

    let (complaints, vitals, labs, handled, visitations, nutrition, pharmacy, reports) = tokio::join!(
        client.fetch_complaints(patient_id),
        client.fetch_vitals(patient_id, true),
        client.fetch_labs(patient_id),
        client.fetch_handled(patient_id),
        client.fetch_visitations(patient_id),
        client.fetch_nutrition(patient_id),
        client.fetch_pharmacy(patient_id),
        client.fetch_reports(patient_id),
    );

    let mut activities = Vec::new();
    let mut sources = Vec::with_capacity(SourceKind::ALL.len());

    let mut patient = None;
    let vitals = vitals.map(|payload| {
        patient = payload.patient;
        payload.records
    });

    settle(complaints, SourceKind::Complaints, normalize_complaints, now, &mut activities, &mut sources);
    settle(vitals, SourceKind::Vitals, normalize_vitals, now, &mut activities, &mut sources);
    settle(labs, SourceKind::Labs, normalize_labs, now, &mut activities, &mut sources);
    settle(handled, SourceKind::Handled, normalize_handled, now, &mut activities, &mut sources);
    settle(visitations, SourceKind::Visitations, normalize_visitations, now, &mut activities, &mut sources);
    settle(nutrition, SourceKind::Nutrition, normalize_nutrition, now, &mut activities, &mut sources);
    settle(pharmacy, SourceKind::Pharmacy, normalize_pharmacy, now, &mut activities, &mut sources);
    settle(reports, SourceKind::Reports, normalize_reports, now, &mut activities, &mut sources);

    tracing::debug!(
        patient = %patient_id,
        total = activities.len(),
        failed = sources.iter().filter(|s| s.error.is_some()).count(),
        "assembled patient history"
    );

    PatientHistory {
        patient,
        activities: merge_descending(activities),
        sources,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    /// Stub upstream serving canned JSON for every source route, with the
    /// pharmacy service down (500) and the reports payload malformed.
    async fn spawn_stub_upstream() -> String {
        let app = Router::new()
            .route(
                "/patients/:id/complaints",
                get(|| async {
                    Json(json!([
                        {"id": "c-1", "description": "Pusing", "reported_at": "2026-03-01T08:00:00Z"},
                        {"id": "c-2", "description": "Mual", "reported_at": "2026-03-01T09:00:00Z"}
                    ]))
                }),
            )
            .route(
                "/patients/:id/vitals",
                get(|| async {
                    Json(json!({
                        "patient": {
                            "id": "7f8da2c6-93a4-4f3d-9f3e-2f1b8f0a1c55",
                            "name": "Budi Santoso",
                            "height_cm": 168.0,
                            "weight_kg": 74.0,
                            "bmi": 26.2,
                            "allergies": ["penisilin"],
                            "diabetes_type": "tipe 2",
                            "smoking_status": "berhenti"
                        },
                        "records": [
                            {"id": "v-1", "title": "Pemeriksaan TTV",
                             "blood_pressure": "130/85", "checked_at": "2026-03-01T08:30:00Z"},
                            {"id": "v-2", "title": "Pemeriksaan TTV",
                             "risk_assessment": {"score": 12.0, "level": "tinggi"},
                             "checked_at": "2026-03-01T08:35:00Z"}
                        ]
                    }))
                }),
            )
            .route(
                "/patients/:id/labs",
                get(|| async {
                    Json(json!([
                        {"id": "l-1", "test_type": "GDS", "value": "150",
                         "test_date": "2026-03-01T09:02:00Z"}
                    ]))
                }),
            )
            .route("/patients/:id/handled", get(|| async { Json(json!([])) }))
            .route(
                "/patients/:id/visitations",
                get(|| async {
                    Json(json!([
                        {"id": "vis-1", "shift": "pagi", "visited_at": "2026-03-01T06:00:00Z"}
                    ]))
                }),
            )
            .route("/patients/:id/nutrition", get(|| async { Json(json!([])) }))
            .route(
                "/patients/:id/pharmacy",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            )
            .route(
                "/patients/:id/reports",
                get(|| async { Json(json!({"not": "an array"})) }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn fan_out_degrades_per_source_and_merges_the_rest() {
        let base = spawn_stub_upstream().await;
        let client = SourceClient::new(&base, 5);
        let history = fetch_patient_history(&client, Uuid::new_v4()).await;

        // 2 complaints + 2 vitals (one becomes searB) + 1 lab + 1 visitation.
        assert_eq!(history.activities.len(), 6);
        for pair in history.activities.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }

        assert_eq!(history.sources.len(), 8);
        let outcome = |kind: SourceKind| {
            history
                .sources
                .iter()
                .find(|s| s.source == kind)
                .unwrap()
                .clone()
        };

        // Healthy sources report their record counts.
        assert_eq!(outcome(SourceKind::Complaints).count, 2);
        assert_eq!(outcome(SourceKind::Vitals).count, 2);
        assert!(outcome(SourceKind::Labs).error.is_none());

        // Empty-but-healthy is distinguishable from failed.
        let nutrition = outcome(SourceKind::Nutrition);
        assert_eq!(nutrition.count, 0);
        assert!(nutrition.error.is_none());

        let pharmacy = outcome(SourceKind::Pharmacy);
        assert_eq!(pharmacy.count, 0);
        assert!(pharmacy.error.as_deref().unwrap().contains("500"));

        let reports = outcome(SourceKind::Reports);
        assert_eq!(reports.count, 0);
        assert!(reports.error.is_some());
    }

    #[tokio::test]
    async fn vitals_payload_carries_patient_context() {
        let base = spawn_stub_upstream().await;
        let client = SourceClient::new(&base, 5);
        let history = fetch_patient_history(&client, Uuid::new_v4()).await;

        let patient = history.patient.expect("patient context");
        assert_eq!(patient.name, "Budi Santoso");
        assert_eq!(patient.allergies, vec!["penisilin"]);
    }

    #[tokio::test]
    async fn unreachable_upstream_degrades_everything() {
        // Nothing listens here; every branch must settle as failed.
        let client = SourceClient::new("http://127.0.0.1:1", 1);
        let history = fetch_patient_history(&client, Uuid::new_v4()).await;

        assert!(history.activities.is_empty());
        assert!(history.patient.is_none());
        assert_eq!(history.sources.len(), 8);
        assert!(history.sources.iter().all(|s| s.error.is_some()));
    }
}
