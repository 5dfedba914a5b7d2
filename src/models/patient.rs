use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only demographic and clinical context shown next to the history
/// view. Owned by the patient registry; this subsystem never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub bmi: Option<f64>,
    #[serde(default)]
    pub allergies: Vec<String>,
    pub diabetes_type: Option<String>,
    pub smoking_status: Option<String>,
}
