use serde::{Deserialize, Serialize};

/// Which of the two benefit categories the recipient uses.
///
/// Home (재가) benefits are capped by a monthly ceiling per grade; facility
/// (시설) benefits are billed at a daily rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BenefitType {
    Home,
    Facility,
}

impl BenefitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Facility => "facility",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "home" => Some(Self::Home),
            "facility" => Some(Self::Facility),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "재가급여",
            Self::Facility => "시설급여",
        }
    }
}
