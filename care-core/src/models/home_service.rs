use serde::{Deserialize, Serialize};

/// Home-care sub-services a recipient can combine under the monthly ceiling.
///
/// Selecting sub-services does not change the computed amounts (the ceiling
/// is per grade, not per service); at least one must be chosen before the
/// wizard lets the user past the benefit-type step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HomeService {
    VisitingCare,
    VisitingBath,
    VisitingNursing,
    DayNightCare,
    ShortStay,
    WelfareEquipment,
}

impl HomeService {
    pub const ALL: [HomeService; 6] = [
        Self::VisitingCare,
        Self::VisitingBath,
        Self::VisitingNursing,
        Self::DayNightCare,
        Self::ShortStay,
        Self::WelfareEquipment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VisitingCare => "visiting-care",
            Self::VisitingBath => "visiting-bath",
            Self::VisitingNursing => "visiting-nursing",
            Self::DayNightCare => "day-night-care",
            Self::ShortStay => "short-stay",
            Self::WelfareEquipment => "welfare-equipment",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "visiting-care" => Some(Self::VisitingCare),
            "visiting-bath" => Some(Self::VisitingBath),
            "visiting-nursing" => Some(Self::VisitingNursing),
            "day-night-care" => Some(Self::DayNightCare),
            "short-stay" => Some(Self::ShortStay),
            "welfare-equipment" => Some(Self::WelfareEquipment),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VisitingCare => "방문요양",
            Self::VisitingBath => "방문목욕",
            Self::VisitingNursing => "방문간호",
            Self::DayNightCare => "주야간보호",
            Self::ShortStay => "단기보호",
            Self::WelfareEquipment => "복지용구",
        }
    }
}
