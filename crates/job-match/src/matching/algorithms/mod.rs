//! The three scoring strategies the ensemble coordinator chooses between.

mod composite;
mod tie_breaker;
mod weighted_sum;

pub use composite::skill_experience_composite;
pub use tie_breaker::eligibility_education_tie_breaker;
pub use weighted_sum::weighted_sum;
