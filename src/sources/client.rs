use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

use super::SourceError;
use crate::models::{
    ComplaintRecord, HandledRecord, LabRecord, MedicalReportRecord, NutritionRecord, Patient,
    PharmacyRecord, VisitationRecord, VitalRecord,
};

/// HTTP client for the per-patient query endpoints. Each upstream service
/// is owned by another subsystem; the only shared contract is the URL
/// layout and JSON record shapes in `models::records`.
pub struct SourceClient {
    base_url: String,
    http: reqwest::Client,
}

/// Vitals payload; the one endpoint that can also carry the read-only
/// patient context when asked to.
#[derive(Debug, Deserialize)]
pub struct VitalsPayload {
    #[serde(default)]
    pub patient: Option<Patient>,
    #[serde(default)]
    pub records: Vec<VitalRecord>,
}

impl SourceClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SourceError::Malformed(e.to_string()))
    }

    pub async fn fetch_complaints(
        &self,
        patient: Uuid,
    ) -> Result<Vec<ComplaintRecord>, SourceError> {
        self.get_json(&format!("patients/{patient}/complaints")).await
    }

    /// `include_patient` asks the vitals service to embed the read-only
    /// patient context alongside the records.
    pub async fn fetch_vitals(
        &self,
        patient: Uuid,
        include_patient: bool,
    ) -> Result<VitalsPayload, SourceError> {
        let mut path = format!("patients/{patient}/vitals");
        if include_patient {
            path.push_str("?include_patient=true");
        }
        self.get_json(&path).await
    }

    pub async fn fetch_labs(&self, patient: Uuid) -> Result<Vec<LabRecord>, SourceError> {
        self.get_json(&format!("patients/{patient}/labs")).await
    }

    pub async fn fetch_handled(&self, patient: Uuid) -> Result<Vec<HandledRecord>, SourceError> {
        self.get_json(&format!("patients/{patient}/handled")).await
    }

    pub async fn fetch_visitations(
        &self,
        patient: Uuid,
    ) -> Result<Vec<VisitationRecord>, SourceError> {
        self.get_json(&format!("patients/{patient}/visitations")).await
    }

    pub async fn fetch_nutrition(
        &self,
        patient: Uuid,
    ) -> Result<Vec<NutritionRecord>, SourceError> {
        self.get_json(&format!("patients/{patient}/nutrition")).await
    }

    pub async fn fetch_pharmacy(
        &self,
        patient: Uuid,
    ) -> Result<Vec<PharmacyRecord>, SourceError> {
        self.get_json(&format!("patients/{patient}/pharmacy")).await
    }

    pub async fn fetch_reports(
        &self,
        patient: Uuid,
    ) -> Result<Vec<MedicalReportRecord>, SourceError> {
        self.get_json(&format!("patients/{patient}/reports")).await
    }
}
