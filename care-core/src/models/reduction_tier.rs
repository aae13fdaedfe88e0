use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Government-granted copay reduction tier.
///
/// The tier value is the percentage *removed* from the normal copay, so the
/// multiplier that stays in effect is the inverted remainder: a 60% reduction
/// leaves 40% of the copay rate, a 40% reduction leaves 60%, and a full
/// (100%) reduction leaves nothing. This inversion is intentional and matches
/// the NHIS reduction notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReductionTier {
    /// No reduction granted.
    None,
    /// 40% copay reduction.
    Forty,
    /// 60% copay reduction.
    Sixty,
    /// Full exemption (basic livelihood security recipients).
    Full,
}

impl ReductionTier {
    pub const ALL: [ReductionTier; 4] = [Self::None, Self::Forty, Self::Sixty, Self::Full];

    /// The reduction percentage as printed on the notice (0, 40, 60, 100).
    pub fn percent(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Forty => 40,
            Self::Sixty => 60,
            Self::Full => 100,
        }
    }

    /// Fraction of the normal copay rate that remains payable.
    pub fn copay_multiplier(&self) -> Decimal {
        match self {
            Self::None => Decimal::ONE,
            Self::Forty => Decimal::new(6, 1),
            Self::Sixty => Decimal::new(4, 1),
            Self::Full => Decimal::ZERO,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "0" => Some(Self::None),
            "40" => Some(Self::Forty),
            "60" => Some(Self::Sixty),
            "100" => Some(Self::Full),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "일반 (감경 없음)",
            Self::Forty => "40% 감경",
            Self::Sixty => "60% 감경",
            Self::Full => "전액 면제",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn multiplier_is_inverted_remainder_of_percent() {
        assert_eq!(ReductionTier::None.copay_multiplier(), dec!(1));
        assert_eq!(ReductionTier::Forty.copay_multiplier(), dec!(0.6));
        assert_eq!(ReductionTier::Sixty.copay_multiplier(), dec!(0.4));
        assert_eq!(ReductionTier::Full.copay_multiplier(), dec!(0));
    }

    #[test]
    fn parse_accepts_percent_codes() {
        for tier in ReductionTier::ALL {
            assert_eq!(ReductionTier::parse(&tier.percent().to_string()), Some(tier));
        }
        assert_eq!(ReductionTier::parse("50"), None);
    }
}
