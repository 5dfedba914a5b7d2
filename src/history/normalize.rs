//! Normalizer: raw per-source records → canonical [`Activity`] values.
//!
//! Each converter resolves a timestamp from source-specific candidate
//! fields in priority order and assigns the staff role. Output order is
//! irrelevant; the merger re-sorts.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::types::{Activity, ActivityDetail, PharmacyItem};
use crate::models::{
    ActivityKind, ComplaintRecord, HandledRecord, LabRecord, MedicalReportRecord,
    NutritionRecord, PharmacyRecord, StaffRole, VisitationRecord, VitalRecord,
};

/// Accepted upstream timestamp formats, tried in order. Naive values are
/// taken as UTC; the upstream services store UTC and render locally.
fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// First parseable candidate wins; with none, fall back to `now` and flag
/// the activity as undated so the feed can caption it honestly instead of
/// silently placing a historical record at the top.
fn resolve_timestamp(candidates: &[Option<&str>], now: DateTime<Utc>) -> (DateTime<Utc>, bool) {
    for candidate in candidates.iter().flatten() {
        if let Some(ts) = parse_datetime(candidate) {
            return (ts, false);
        }
    }
    (now, true)
}

pub fn normalize_complaints(records: Vec<ComplaintRecord>, now: DateTime<Utc>) -> Vec<Activity> {
    records
        .into_iter()
        .map(|r| {
            let (timestamp, undated) =
                resolve_timestamp(&[r.reported_at.as_deref(), r.created_at.as_deref()], now);
            Activity {
                id: r.id,
                kind: ActivityKind::Complaint,
                role: StaffRole::Perawat,
                timestamp,
                undated,
                detail: ActivityDetail::Complaint {
                    description: r.description,
                    severity: r.severity,
                    location: r.location,
                },
            }
        })
        .collect()
}

/// A vital record carrying a risk sub-payload is a SEAR-B score, not a
/// vital sign; it moves to the `searB` bucket and never counts as both.
pub fn normalize_vitals(records: Vec<VitalRecord>, now: DateTime<Utc>) -> Vec<Activity> {
    records
        .into_iter()
        .map(|r| {
            let (timestamp, undated) =
                resolve_timestamp(&[r.checked_at.as_deref(), r.created_at.as_deref()], now);

            if let Some(risk) = r.risk_assessment {
                return Activity {
                    id: r.id,
                    kind: ActivityKind::SearB,
                    role: StaffRole::SearB,
                    timestamp,
                    undated,
                    detail: ActivityDetail::CardioRisk {
                        score: risk.score,
                        level: risk.level,
                        notes: risk.notes,
                    },
                };
            }

            let role = if r.title.to_lowercase().contains("lab") {
                StaffRole::Laboratorium
            } else {
                StaffRole::PerawatPoli
            };

            Activity {
                id: r.id,
                kind: ActivityKind::Vital,
                role,
                timestamp,
                undated,
                detail: ActivityDetail::Vital {
                    title: r.title,
                    temperature: r.temperature,
                    heart_rate: r.heart_rate,
                    blood_pressure: r.blood_pressure,
                    oxygen_saturation: r.oxygen_saturation,
                    respiratory_rate: r.respiratory_rate,
                },
            }
        })
        .collect()
}

pub fn normalize_labs(records: Vec<LabRecord>, now: DateTime<Utc>) -> Vec<Activity> {
    records
        .into_iter()
        .map(|r| {
            let (timestamp, undated) =
                resolve_timestamp(&[r.test_date.as_deref(), r.created_at.as_deref()], now);
            let technician_role = r
                .technician_role
                .as_deref()
                .and_then(|s| s.parse::<StaffRole>().ok());
            Activity {
                id: r.id,
                kind: ActivityKind::Lab,
                role: technician_role.unwrap_or(StaffRole::Laboratorium),
                timestamp,
                undated,
                detail: ActivityDetail::Lab {
                    test_type: r.test_type,
                    value: r.value,
                    unit: r.unit,
                    normal_range: r.normal_range,
                    status: r.status,
                    notes: r.notes,
                    technician_role,
                },
            }
        })
        .collect()
}

pub fn normalize_handled(records: Vec<HandledRecord>, now: DateTime<Utc>) -> Vec<Activity> {
    records
        .into_iter()
        .map(|r| {
            let (timestamp, undated) =
                resolve_timestamp(&[r.handled_at.as_deref(), r.created_at.as_deref()], now);
            Activity {
                id: r.id,
                kind: ActivityKind::Handled,
                role: StaffRole::DokterSpesialis,
                timestamp,
                undated,
                detail: ActivityDetail::Handled {
                    diagnosis: r.diagnosis,
                    treatment_plan: r.treatment_plan,
                    status: r.status,
                    priority: r.priority,
                    handler_name: r.handler_name,
                },
            }
        })
        .collect()
}

pub fn normalize_visitations(records: Vec<VisitationRecord>, now: DateTime<Utc>) -> Vec<Activity> {
    records
        .into_iter()
        .map(|r| {
            let (timestamp, undated) =
                resolve_timestamp(&[r.visited_at.as_deref(), r.created_at.as_deref()], now);
            Activity {
                id: r.id,
                kind: ActivityKind::Visitation,
                role: StaffRole::PerawatRuangan,
                timestamp,
                undated,
                detail: ActivityDetail::Visitation {
                    shift: r.shift,
                    notes: r.notes,
                    medications_given: r.medications_given,
                },
            }
        })
        .collect()
}

pub fn normalize_nutrition(records: Vec<NutritionRecord>, now: DateTime<Utc>) -> Vec<Activity> {
    records
        .into_iter()
        .map(|r| {
            let (timestamp, undated) =
                resolve_timestamp(&[r.recorded_at.as_deref(), r.created_at.as_deref()], now);
            Activity {
                id: r.id,
                kind: ActivityKind::Nutrition,
                role: StaffRole::AhliGizi,
                timestamp,
                undated,
                detail: ActivityDetail::Nutrition {
                    diet_plan: r.diet_plan,
                    target_calories: r.target_calories,
                    compliance_score: r.compliance_score,
                },
            }
        })
        .collect()
}

pub fn normalize_pharmacy(records: Vec<PharmacyRecord>, now: DateTime<Utc>) -> Vec<Activity> {
    records
        .into_iter()
        .map(|r| {
            let (timestamp, undated) =
                resolve_timestamp(&[r.dispensed_at.as_deref(), r.created_at.as_deref()], now);
            Activity {
                id: r.id,
                kind: ActivityKind::Pharmacy,
                role: StaffRole::Farmasi,
                timestamp,
                undated,
                detail: ActivityDetail::Pharmacy {
                    items: r
                        .items
                        .into_iter()
                        .map(|i| PharmacyItem {
                            name: i.name,
                            quantity: i.quantity,
                            dosage: i.dosage,
                        })
                        .collect(),
                    status: r.status,
                },
            }
        })
        .collect()
}

pub fn normalize_reports(records: Vec<MedicalReportRecord>, now: DateTime<Utc>) -> Vec<Activity> {
    records
        .into_iter()
        .map(|r| {
            let (timestamp, undated) =
                resolve_timestamp(&[r.report_date.as_deref(), r.created_at.as_deref()], now);
            Activity {
                id: r.id,
                kind: ActivityKind::MedicalReport,
                role: StaffRole::DokterPoli,
                timestamp,
                undated,
                detail: ActivityDetail::MedicalReport {
                    report_type: r.report_type,
                    chief_complaint: r.chief_complaint,
                    diagnosis: r.diagnosis,
                    doctor_name: r.doctor_name,
                },
            }
        })
        .collect()
}
