//! Raw record shapes as returned by the eight upstream services.
//!
//! Each service is an opaque collaborator owned by another team; the only
//! contract is that a record carries at least one timestamp-bearing field.
//! Timestamps arrive as strings in whatever format the owning subsystem
//! emits; the normalizer (`history::normalize`) resolves them. Optional
//! fields really are `Option` and collections default to empty so a partial
//! payload never fails deserialization.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintRecord {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub reported_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub heart_rate: Option<f64>,
    /// "systolic/diastolic", e.g. "120/80".
    #[serde(default)]
    pub blood_pressure: Option<String>,
    #[serde(default)]
    pub oxygen_saturation: Option<f64>,
    #[serde(default)]
    pub respiratory_rate: Option<f64>,
    /// Present only when the poli nurse also submitted the SEAR-B
    /// cardiovascular risk form alongside the vitals.
    #[serde(default)]
    pub risk_assessment: Option<RiskAssessment>,
    #[serde(default)]
    pub checked_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabRecord {
    pub id: String,
    pub test_type: String,
    /// Kept as text; labs report qualitative results ("negatif") as well
    /// as numbers. The chart projection parses, the list view does not.
    pub value: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub normal_range: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub technician_role: Option<String>,
    #[serde(default)]
    pub test_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandledRecord {
    pub id: String,
    pub diagnosis: String,
    #[serde(default)]
    pub treatment_plan: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub handler_name: Option<String>,
    #[serde(default)]
    pub handled_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitationRecord {
    pub id: String,
    pub shift: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub medications_given: Vec<String>,
    #[serde(default)]
    pub visited_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionRecord {
    pub id: String,
    pub diet_plan: String,
    #[serde(default)]
    pub target_calories: Option<f64>,
    #[serde(default)]
    pub compliance_score: Option<f64>,
    #[serde(default)]
    pub recorded_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PharmacyRecord {
    pub id: String,
    #[serde(default)]
    pub items: Vec<DispensedItem>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub dispensed_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispensedItem {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub dosage: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalReportRecord {
    pub id: String,
    pub report_type: String,
    #[serde(default)]
    pub chief_complaint: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub report_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
