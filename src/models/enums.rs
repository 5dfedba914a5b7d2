use crate::models::ModelError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Serde uses the same wire string as `as_str`, so values round-trip
/// through the upstream JSON and the API untouched.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

// The closed activity vocabulary. Only the normalizer assigns these;
// nothing downstream re-infers a kind from payload shape.
str_enum!(ActivityKind {
    Complaint => "complaint",
    Vital => "vital",
    Lab => "lab",
    SearB => "searB",
    Handled => "handled",
    Visitation => "visitation",
    Nutrition => "nutrition",
    Pharmacy => "pharmacy",
    MedicalReport => "medical-report",
});

str_enum!(StaffRole {
    DokterSpesialis => "DOKTER_SPESIALIS",
    DokterPoli => "DOKTER_POLI",
    PerawatRuangan => "PERAWAT_RUANGAN",
    PerawatPoli => "PERAWAT_POLI",
    Perawat => "PERAWAT",
    Laboratorium => "LABORATORIUM",
    AhliGizi => "AHLI_GIZI",
    Farmasi => "FARMASI",
    Administrasi => "ADMINISTRASI",
    SearB => "SEARB",
});

/// The eight upstream services a patient's history is assembled from.
str_enum!(SourceKind {
    Complaints => "complaints",
    Vitals => "vitals",
    Labs => "labs",
    Handled => "handled",
    Visitations => "visitations",
    Nutrition => "nutrition",
    Pharmacy => "pharmacy",
    Reports => "reports",
});

impl SourceKind {
    pub const ALL: [SourceKind; 8] = [
        SourceKind::Complaints,
        SourceKind::Vitals,
        SourceKind::Labs,
        SourceKind::Handled,
        SourceKind::Visitations,
        SourceKind::Nutrition,
        SourceKind::Pharmacy,
        SourceKind::Reports,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn activity_kind_round_trip() {
        for (variant, s) in [
            (ActivityKind::Complaint, "complaint"),
            (ActivityKind::Vital, "vital"),
            (ActivityKind::Lab, "lab"),
            (ActivityKind::SearB, "searB"),
            (ActivityKind::Handled, "handled"),
            (ActivityKind::Visitation, "visitation"),
            (ActivityKind::Nutrition, "nutrition"),
            (ActivityKind::Pharmacy, "pharmacy"),
            (ActivityKind::MedicalReport, "medical-report"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(ActivityKind::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn staff_role_round_trip() {
        for (variant, s) in [
            (StaffRole::DokterSpesialis, "DOKTER_SPESIALIS"),
            (StaffRole::DokterPoli, "DOKTER_POLI"),
            (StaffRole::PerawatRuangan, "PERAWAT_RUANGAN"),
            (StaffRole::PerawatPoli, "PERAWAT_POLI"),
            (StaffRole::Perawat, "PERAWAT"),
            (StaffRole::Laboratorium, "LABORATORIUM"),
            (StaffRole::AhliGizi, "AHLI_GIZI"),
            (StaffRole::Farmasi, "FARMASI"),
            (StaffRole::Administrasi, "ADMINISTRASI"),
            (StaffRole::SearB, "SEARB"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(StaffRole::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&ActivityKind::MedicalReport).unwrap();
        assert_eq!(json, "\"medical-report\"");
        let back: ActivityKind = serde_json::from_str("\"searB\"").unwrap();
        assert_eq!(back, ActivityKind::SearB);

        let json = serde_json::to_string(&StaffRole::PerawatPoli).unwrap();
        assert_eq!(json, "\"PERAWAT_POLI\"");
    }

    #[test]
    fn source_kind_covers_all_eight() {
        assert_eq!(SourceKind::ALL.len(), 8);
        for kind in SourceKind::ALL {
            assert_eq!(SourceKind::from_str(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(ActivityKind::from_str("vitals").is_err());
        assert!(StaffRole::from_str("dokter_spesialis").is_err());
        assert!(SourceKind::from_str("").is_err());
    }
}
