use serde::{Deserialize, Serialize};

/// Long-term-care eligibility grade (장기요양등급).
///
/// Grades 1 through 5 are ordered from most to least care-intensive; the
/// cognitive-support grade (인지지원등급) is a separate tier with its own
/// benefit ceiling and no facility benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CareGrade {
    One,
    Two,
    Three,
    Four,
    Five,
    CognitiveSupport,
}

impl CareGrade {
    /// All grades, in display order.
    pub const ALL: [CareGrade; 6] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::CognitiveSupport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::CognitiveSupport => "cognitive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1" => Some(Self::One),
            "2" => Some(Self::Two),
            "3" => Some(Self::Three),
            "4" => Some(Self::Four),
            "5" => Some(Self::Five),
            "cognitive" => Some(Self::CognitiveSupport),
            _ => None,
        }
    }

    /// Korean display label as it appears on the eligibility notice.
    pub fn label(&self) -> &'static str {
        match self {
            Self::One => "1등급",
            Self::Two => "2등급",
            Self::Three => "3등급",
            Self::Four => "4등급",
            Self::Five => "5등급",
            Self::CognitiveSupport => "인지지원등급",
        }
    }
}
