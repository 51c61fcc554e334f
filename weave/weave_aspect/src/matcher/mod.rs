//! Advice matching.
//!
//! This module decides which advisors apply to which join points of a class.

mod advice_map;
mod advice_matcher;

pub use advice_map::AdviceMap;
pub use advice_matcher::AdviceMatcher;
