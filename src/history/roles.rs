//! Role taxonomy: the single place role membership is decided.
//!
//! Every role-based branch in the crate routes through
//! [`RoleGroup::matches`], so adding a group is exactly one change site.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::types::{Activity, ActivityDetail};
use crate::models::{ActivityKind, ModelError, StaffRole};

/// A named filter bucket over staff roles (or, for SEAR-B, over the
/// activity kind itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleGroup {
    #[default]
    All,
    /// All doctors, specialist and poli.
    Dokter,
    /// All nursing roles.
    Perawat,
    /// Poli nurse and laboratory work, including lab results whose
    /// technician was the poli nurse.
    PoliLab,
    /// SEAR-B risk scores regardless of recording role.
    SearB,
    /// Exact match on one concrete role.
    Role(StaffRole),
}

impl RoleGroup {
    pub fn matches(&self, activity: &Activity) -> bool {
        match self {
            RoleGroup::All => true,
            RoleGroup::Dokter => matches!(
                activity.role,
                StaffRole::DokterSpesialis | StaffRole::DokterPoli
            ),
            RoleGroup::Perawat => matches!(
                activity.role,
                StaffRole::PerawatRuangan | StaffRole::PerawatPoli | StaffRole::Perawat
            ),
            RoleGroup::PoliLab => {
                matches!(
                    activity.role,
                    StaffRole::PerawatPoli | StaffRole::Laboratorium
                ) || matches!(
                    &activity.detail,
                    ActivityDetail::Lab {
                        technician_role: Some(StaffRole::PerawatPoli),
                        ..
                    }
                )
            }
            RoleGroup::SearB => activity.kind == ActivityKind::SearB,
            RoleGroup::Role(role) => activity.role == *role,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleGroup::All => "all",
            RoleGroup::Dokter => "DOKTER",
            RoleGroup::Perawat => "PERAWAT",
            RoleGroup::PoliLab => "POLI_LAB",
            RoleGroup::SearB => "SEARB",
            RoleGroup::Role(role) => role.as_str(),
        }
    }
}

impl std::str::FromStr for RoleGroup {
    type Err = ModelError;

    /// Compound group names take precedence over concrete roles, so
    /// "SEARB" selects the type-based group, not the bare role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(RoleGroup::All),
            "DOKTER" => Ok(RoleGroup::Dokter),
            "PERAWAT" => Ok(RoleGroup::Perawat),
            "POLI_LAB" => Ok(RoleGroup::PoliLab),
            "SEARB" => Ok(RoleGroup::SearB),
            other => match other.parse::<StaffRole>() {
                Ok(role) => Ok(RoleGroup::Role(role)),
                Err(_) => Err(ModelError::InvalidEnum {
                    field: "RoleGroup".into(),
                    value: s.into(),
                }),
            },
        }
    }
}

impl Serialize for RoleGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RoleGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn activity(kind: ActivityKind, role: StaffRole, detail: ActivityDetail) -> Activity {
        Activity {
            id: "a-1".into(),
            kind,
            role,
            timestamp: Utc::now(),
            undated: false,
            detail,
        }
    }

    fn vital(role: StaffRole) -> Activity {
        activity(
            ActivityKind::Vital,
            role,
            ActivityDetail::Vital {
                title: "TTV".into(),
                temperature: None,
                heart_rate: None,
                blood_pressure: None,
                oxygen_saturation: None,
                respiratory_rate: None,
            },
        )
    }

    fn lab(role: StaffRole, technician_role: Option<StaffRole>) -> Activity {
        activity(
            ActivityKind::Lab,
            role,
            ActivityDetail::Lab {
                test_type: "GDS".into(),
                value: "110".into(),
                unit: None,
                normal_range: None,
                status: None,
                notes: None,
                technician_role,
            },
        )
    }

    #[test]
    fn dokter_group_covers_both_doctor_roles() {
        let group = RoleGroup::Dokter;
        assert!(group.matches(&vital(StaffRole::DokterSpesialis)));
        assert!(group.matches(&vital(StaffRole::DokterPoli)));
        assert!(!group.matches(&vital(StaffRole::PerawatPoli)));
    }

    #[test]
    fn perawat_group_covers_all_nursing_roles() {
        let group = RoleGroup::Perawat;
        for role in [
            StaffRole::PerawatRuangan,
            StaffRole::PerawatPoli,
            StaffRole::Perawat,
        ] {
            assert!(group.matches(&vital(role)));
        }
        assert!(!group.matches(&vital(StaffRole::Laboratorium)));
    }

    #[test]
    fn poli_lab_matches_roles_and_technician() {
        let group = RoleGroup::PoliLab;
        assert!(group.matches(&vital(StaffRole::PerawatPoli)));
        assert!(group.matches(&lab(StaffRole::Laboratorium, None)));
        // Lab whose embedded technician was the poli nurse matches even if
        // the resolved role were something else.
        assert!(group.matches(&lab(
            StaffRole::Laboratorium,
            Some(StaffRole::PerawatPoli)
        )));
        assert!(!group.matches(&vital(StaffRole::PerawatRuangan)));
    }

    #[test]
    fn searb_group_is_kind_based() {
        let group = RoleGroup::SearB;
        let risk = activity(
            ActivityKind::SearB,
            StaffRole::SearB,
            ActivityDetail::CardioRisk {
                score: Some(12.0),
                level: None,
                notes: None,
            },
        );
        assert!(group.matches(&risk));
        assert!(!group.matches(&vital(StaffRole::PerawatPoli)));
    }

    #[test]
    fn parse_prefers_group_over_role() {
        assert_eq!("SEARB".parse::<RoleGroup>().unwrap(), RoleGroup::SearB);
        assert_eq!("all".parse::<RoleGroup>().unwrap(), RoleGroup::All);
        assert_eq!(
            "AHLI_GIZI".parse::<RoleGroup>().unwrap(),
            RoleGroup::Role(StaffRole::AhliGizi)
        );
        assert!("GIZI".parse::<RoleGroup>().is_err());
    }
}
