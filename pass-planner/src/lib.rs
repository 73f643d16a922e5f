//! Transit subscription planner.
//!
//! Answers: "given how I travel over a year, which combination of season
//! passes, discount cards and wallets is cheapest?"

pub mod catalog;
pub mod domain;
pub mod planner;
pub mod report;
