//! Domain types for the subscription planner.
//!
//! This module contains the validated building blocks the planner works on:
//! times and validity windows, tariff zones, money, products and journeys.
//! Types enforce their invariants at construction (and deserialization)
//! time, so code that receives them can trust their validity.

mod journey;
mod money;
mod product;
mod time;
mod zone;

pub use journey::Journey;
pub use money::{InvalidAmount, Money};
pub use product::{AgeBracket, Coverage, DiscountRate, InvalidDiscountRate, SubscriptionProduct};
pub use time::{TimeError, TimeOfDay, TimeWindow, in_range};
pub use zone::{InvalidZoneSpec, NATIONWIDE_KEYWORD, ZoneId, ZoneSpec, covers};
