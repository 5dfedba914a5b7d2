//! Per-patient view session: the only durable state this subsystem owns.
//!
//! Holds the expand/collapse and series-visibility maps plus a generation
//! counter guarding against the stale-fetch race: if the user switches
//! patients while a fan-out is still in flight, the superseded response
//! must be discarded, never merged into the new patient's view.

use uuid::Uuid;

use super::charts::SeriesVisibility;
use super::group::DayExpansion;
use super::types::HistoryData;

/// Opaque proof of which selection a fetch was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken {
    generation: u64,
}

#[derive(Debug, Default)]
pub struct ViewSession {
    patient_id: Option<Uuid>,
    generation: u64,
    pub days: DayExpansion,
    pub series: SeriesVisibility,
    data: Option<HistoryData>,
}

impl ViewSession {
    /// Select a patient: bumps the generation (so in-flight fetches for the
    /// previous patient become stale), resets all view state, and returns
    /// the token the new fetch must present on completion.
    pub fn select_patient(&mut self, patient_id: Uuid) -> FetchToken {
        self.generation += 1;
        self.patient_id = Some(patient_id);
        self.days.reset();
        self.series.reset();
        self.data = None;
        FetchToken {
            generation: self.generation,
        }
    }

    /// Accept fetched data only if the token still matches the current
    /// selection. Returns false when the result was stale and dropped.
    pub fn complete_fetch(&mut self, token: FetchToken, data: HistoryData) -> bool {
        if token.generation != self.generation {
            tracing::debug!(
                stale = token.generation,
                current = self.generation,
                "discarding stale history fetch"
            );
            return false;
        }
        self.data = Some(data);
        true
    }

    pub fn patient_id(&self) -> Option<Uuid> {
        self.patient_id
    }

    pub fn data(&self) -> Option<&HistoryData> {
        self.data.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn empty_data() -> HistoryData {
        HistoryData {
            generated_at: Utc::now(),
            activities: vec![],
            sources: vec![],
        }
    }

    #[test]
    fn fetch_for_current_selection_is_accepted() {
        let mut session = ViewSession::default();
        let token = session.select_patient(Uuid::new_v4());
        assert!(session.complete_fetch(token, empty_data()));
        assert!(session.data().is_some());
    }

    #[test]
    fn stale_fetch_is_discarded_on_patient_switch() {
        let mut session = ViewSession::default();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        let stale_token = session.select_patient(first);
        let fresh_token = session.select_patient(second);

        // The first patient's response lands after the switch: dropped.
        assert!(!session.complete_fetch(stale_token, empty_data()));
        assert!(session.data().is_none());
        assert_eq!(session.patient_id(), Some(second));

        // The second patient's response is current: kept.
        assert!(session.complete_fetch(fresh_token, empty_data()));
        assert!(session.data().is_some());
    }

    #[test]
    fn switching_patient_resets_view_state() {
        let mut session = ViewSession::default();
        session.select_patient(Uuid::new_v4());
        session.days.toggle("2026-03-01");
        session.series.toggle("GDS");

        session.select_patient(Uuid::new_v4());
        assert!(!session.days.is_expanded("2026-03-01"));
        assert!(session.series.is_active("GDS"));
    }
}
