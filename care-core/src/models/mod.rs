mod benefit_type;
mod care_grade;
mod cost_table;
mod home_service;
mod reduction_tier;

pub use benefit_type::BenefitType;
pub use care_grade::CareGrade;
pub use cost_table::{CostTable, GradeRate};
pub use home_service::HomeService;
pub use reduction_tier::ReductionTier;
