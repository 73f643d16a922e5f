//! Recurring journeys.

use serde::{Deserialize, Serialize};

use super::{Money, TimeOfDay, ZoneSpec};

/// A trip made `count` times a year at the same time over the same zones.
///
/// `full_price` is the undiscounted single-ticket fare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    pub name: String,
    pub zones: ZoneSpec,
    #[serde(rename = "time")]
    pub departure: TimeOfDay,
    pub full_price: Money,
    pub count: u32,
}

impl Journey {
    pub fn new(
        name: impl Into<String>,
        zones: ZoneSpec,
        departure: TimeOfDay,
        full_price: Money,
        count: u32,
    ) -> Self {
        Self {
            name: name.into(),
            zones,
            departure,
            full_price,
            count,
        }
    }

    /// Cost of paying the full fare for every occurrence.
    pub fn pay_as_you_go(&self) -> Money {
        self.full_price * self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pay_as_you_go_multiplies_count() {
        let journey = Journey::new(
            "default",
            ZoneSpec::zones([110]).unwrap(),
            TimeOfDay::parse_hhmm("12:00").unwrap(),
            Money::from_cents(460),
            584,
        );
        assert_eq!(journey.pay_as_you_go(), Money::from_cents(268_640));
    }

    #[test]
    fn from_catalog_json() {
        let json = r#"{"name": "canton", "zones": "ZURICH", "time": "08:00", "full_price": 17.8, "count": 6}"#;
        let journey: Journey = serde_json::from_str(json).unwrap();
        assert_eq!(journey.zones, ZoneSpec::region("ZURICH").unwrap());
        assert_eq!(journey.departure.to_string(), "08:00");
        assert_eq!(journey.full_price, Money::from_cents(1780));

        let bad = r#"{"name": "x", "zones": [110], "time": "8:00", "full_price": 1, "count": 1}"#;
        assert!(serde_json::from_str::<Journey>(bad).is_err());
    }
}
