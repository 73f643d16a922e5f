//! Tariff zones and zone coverage.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog keyword for nationwide coverage.
pub const NATIONWIDE_KEYWORD: &str = "all";

/// A numeric tariff zone code (e.g. 110 for the city of Zurich).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(pub u16);

impl fmt::Debug for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZoneId({})", self.0)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a catalog zone specification has no valid shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid zone spec: {reason}")]
pub struct InvalidZoneSpec {
    reason: &'static str,
}

/// The area a pass covers or a journey requires.
///
/// The three forms are never coerced into each other; [`covers`] holds the
/// only rules relating them.
///
/// In catalogs a spec is written as `"all"`, a region name such as
/// `"ZURICH"`, or a non-empty array of zone codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawZoneSpec", into = "RawZoneSpec")]
pub enum ZoneSpec {
    /// The whole tariff network.
    Nationwide,
    /// A named area containing every zone of its tariff.
    Region(String),
    /// An explicit, non-empty set of zones.
    ZoneSet(BTreeSet<ZoneId>),
}

impl ZoneSpec {
    /// Build a zone set from raw zone codes.
    ///
    /// ```
    /// use pass_planner::domain::ZoneSpec;
    ///
    /// assert!(ZoneSpec::zones([110, 140]).is_ok());
    /// assert!(ZoneSpec::zones(Vec::new()).is_err());
    /// ```
    pub fn zones(codes: impl IntoIterator<Item = u16>) -> Result<Self, InvalidZoneSpec> {
        let set: BTreeSet<ZoneId> = codes.into_iter().map(ZoneId).collect();
        if set.is_empty() {
            return Err(InvalidZoneSpec {
                reason: "zone set must not be empty",
            });
        }
        Ok(ZoneSpec::ZoneSet(set))
    }

    /// Build a region spec.
    pub fn region(name: impl Into<String>) -> Result<Self, InvalidZoneSpec> {
        let name = name.into();
        if name.is_empty() {
            return Err(InvalidZoneSpec {
                reason: "region name must not be empty",
            });
        }
        if name == NATIONWIDE_KEYWORD {
            return Err(InvalidZoneSpec {
                reason: "region name is reserved for nationwide coverage",
            });
        }
        Ok(ZoneSpec::Region(name))
    }
}

impl fmt::Display for ZoneSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneSpec::Nationwide => f.write_str("nationwide"),
            ZoneSpec::Region(name) => f.write_str(name),
            ZoneSpec::ZoneSet(zones) => {
                let codes: Vec<String> = zones.iter().map(ZoneId::to_string).collect();
                write!(f, "zones {}", codes.join("+"))
            }
        }
    }
}

/// Catalog representation of a [`ZoneSpec`].
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawZoneSpec {
    Name(String),
    Zones(Vec<u16>),
}

impl TryFrom<RawZoneSpec> for ZoneSpec {
    type Error = InvalidZoneSpec;

    fn try_from(raw: RawZoneSpec) -> Result<Self, Self::Error> {
        match raw {
            RawZoneSpec::Name(name) if name == NATIONWIDE_KEYWORD => Ok(ZoneSpec::Nationwide),
            RawZoneSpec::Name(name) => ZoneSpec::region(name),
            RawZoneSpec::Zones(codes) => ZoneSpec::zones(codes),
        }
    }
}

impl From<ZoneSpec> for RawZoneSpec {
    fn from(spec: ZoneSpec) -> Self {
        match spec {
            ZoneSpec::Nationwide => RawZoneSpec::Name(NATIONWIDE_KEYWORD.to_string()),
            ZoneSpec::Region(name) => RawZoneSpec::Name(name),
            ZoneSpec::ZoneSet(zones) => RawZoneSpec::Zones(zones.into_iter().map(|z| z.0).collect()),
        }
    }
}

/// Returns true if `coverage` satisfies `requested`.
///
/// The relation is asymmetric. Rules, first match wins:
/// 1. nationwide coverage covers anything;
/// 2. a nationwide request needs nationwide coverage;
/// 3. a region covers the same region and any zone set;
/// 4. a zone set covers a zone set it contains;
/// 5. nothing else is covered.
///
/// ```
/// use pass_planner::domain::{ZoneSpec, covers};
///
/// let city = ZoneSpec::zones([110]).unwrap();
/// let canton = ZoneSpec::region("ZURICH").unwrap();
/// assert!(covers(&canton, &city));
/// assert!(!covers(&city, &canton));
/// assert!(covers(&ZoneSpec::Nationwide, &canton));
/// ```
pub fn covers(coverage: &ZoneSpec, requested: &ZoneSpec) -> bool {
    match (coverage, requested) {
        (ZoneSpec::Nationwide, _) => true,
        (_, ZoneSpec::Nationwide) => false,
        (ZoneSpec::Region(own), ZoneSpec::Region(wanted)) => own == wanted,
        (ZoneSpec::Region(_), ZoneSpec::ZoneSet(_)) => true,
        (ZoneSpec::ZoneSet(own), ZoneSpec::ZoneSet(wanted)) => wanted.is_subset(own),
        (ZoneSpec::ZoneSet(_), ZoneSpec::Region(_)) => false,
    }
}
