//! Static zone table
//!
//! Each case area the guide can focus on maps to one read-only `ZoneInfo`
//! record. The table is a `static` array indexed by `Zone`, so every `Zone`
//! value has exactly one record and the records never change at runtime.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Case area the user can inspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Overview,
    Bottom,
    Side,
    Top,
    Rear,
}

/// Direction a fan moves air relative to the case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Airflow {
    Intake,
    Exhaust,
}

/// Blade orientation of a fan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FanKind {
    Standard,
    Reverse,
}

/// Read-only description of one zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneInfo {
    pub zone: Zone,
    pub title: &'static str,
    pub flow: Option<Airflow>,
    pub fan: Option<FanKind>,
    pub description: &'static str,
    pub details: Option<&'static str>,
}

static ZONE_TABLE: [ZoneInfo; 5] = [
    ZoneInfo {
        zone: Zone::Overview,
        title: "Overview",
        flow: None,
        fan: None,
        description: "The secret of aquarium-style cases is the chimney effect (hot air rises) combined with positive side pressure.",
        details: Some("Cool air comes in from the bottom and the side, cools the GPU and CPU, and hot air is pushed out through the top and the rear."),
    },
    ZoneInfo {
        zone: Zone::Bottom,
        title: "Bottom",
        flow: Some(Airflow::Intake),
        fan: Some(FanKind::Reverse),
        description: "This is the main air inlet for the GPU. Reverse fans are used here so the good-looking side (the blades) stays visible while air is pulled upward.",
        details: None,
    },
    ZoneInfo {
        zone: Zone::Side,
        title: "Side",
        flow: Some(Airflow::Intake),
        fan: Some(FanKind::Reverse),
        description: "Makes up for the missing front intake. Blows fresh air straight onto the motherboard and VRM. Reverse fans keep the look without showing the rear grille.",
        details: None,
    },
    ZoneInfo {
        zone: Zone::Top,
        title: "Top",
        flow: Some(Airflow::Exhaust),
        fan: Some(FanKind::Standard),
        description: "Hot air rises naturally. Standard fans here push the air out and show their good-looking side to anyone looking from below.",
        details: None,
    },
    ZoneInfo {
        zone: Zone::Rear,
        title: "Rear",
        flow: Some(Airflow::Exhaust),
        fan: Some(FanKind::Standard),
        description: "Removes leftover heat from the CPU cooler. A standard fan is the right pick here.",
        details: None,
    },
];

impl Zone {
    /// Display order, also the order of the zone buttons
    pub const ALL: [Zone; 5] = [Zone::Overview, Zone::Bottom, Zone::Side, Zone::Top, Zone::Rear];

    fn index(self) -> usize {
        match self {
            Zone::Overview => 0,
            Zone::Bottom => 1,
            Zone::Side => 2,
            Zone::Top => 3,
            Zone::Rear => 4,
        }
    }

    /// Record for this zone
    pub fn info(self) -> &'static ZoneInfo {
        &ZONE_TABLE[self.index()]
    }

    /// Full table in display order
    pub fn table() -> &'static [ZoneInfo] {
        &ZONE_TABLE
    }

    pub fn name(self) -> &'static str {
        match self {
            Zone::Overview => "overview",
            Zone::Bottom => "bottom",
            Zone::Side => "side",
            Zone::Top => "top",
            Zone::Rear => "rear",
        }
    }

    /// Next zone in display order, wrapping around
    pub fn next(self) -> Zone {
        Zone::ALL[(self.index() + 1) % Zone::ALL.len()]
    }

    /// Previous zone in display order, wrapping around
    pub fn previous(self) -> Zone {
        Zone::ALL[(self.index() + Zone::ALL.len() - 1) % Zone::ALL.len()]
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Zone {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::ALL
            .iter()
            .copied()
            .find(|zone| zone.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("Unknown zone '{}'", s))
    }
}

impl Airflow {
    pub fn label(self) -> &'static str {
        match self {
            Airflow::Intake => "Intake",
            Airflow::Exhaust => "Exhaust",
        }
    }

    /// The other direction
    pub fn flipped(self) -> Airflow {
        match self {
            Airflow::Intake => Airflow::Exhaust,
            Airflow::Exhaust => Airflow::Intake,
        }
    }
}

impl FanKind {
    pub const ALL: [FanKind; 2] = [FanKind::Standard, FanKind::Reverse];

    pub fn label(self) -> &'static str {
        match self {
            FanKind::Standard => "Standard (Forward)",
            FanKind::Reverse => "Reverse Blade",
        }
    }

    /// Short text printed on the fan hub
    pub fn hub_label(self) -> &'static str {
        match self {
            FanKind::Standard => "STD",
            FanKind::Reverse => "REV",
        }
    }
}

impl ZoneInfo {
    /// Role text, e.g. "Intake"
    pub fn role(&self) -> Option<&'static str> {
        self.flow.map(Airflow::label)
    }

    /// Recommended fan text, e.g. "Reverse Blade"
    pub fn fan_type(&self) -> Option<&'static str> {
        self.fan.map(FanKind::label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_keyed_by_zone() {
        for zone in Zone::ALL {
            assert_eq!(zone.info().zone, zone);
        }
        assert_eq!(Zone::table().len(), Zone::ALL.len());
    }

    #[test]
    fn test_rear_record() {
        let rear = Zone::Rear.info();
        assert_eq!(rear.title, "Rear");
        assert_eq!(rear.role(), Some("Exhaust"));
        assert_eq!(rear.fan_type(), Some("Standard (Forward)"));
    }

    #[test]
    fn test_overview_has_details_but_no_role() {
        let overview = Zone::Overview.info();
        assert!(overview.role().is_none());
        assert!(overview.fan_type().is_none());
        assert!(overview.details.is_some());
    }

    #[test]
    fn test_intake_zones_use_reverse_fans() {
        for zone in [Zone::Bottom, Zone::Side] {
            assert_eq!(zone.info().flow, Some(Airflow::Intake));
            assert_eq!(zone.info().fan, Some(FanKind::Reverse));
        }
        for zone in [Zone::Top, Zone::Rear] {
            assert_eq!(zone.info().flow, Some(Airflow::Exhaust));
            assert_eq!(zone.info().fan, Some(FanKind::Standard));
        }
    }

    #[test]
    fn test_zone_cycling_wraps() {
        assert_eq!(Zone::Overview.next(), Zone::Bottom);
        assert_eq!(Zone::Rear.next(), Zone::Overview);
        assert_eq!(Zone::Overview.previous(), Zone::Rear);

        let mut zone = Zone::Top;
        for _ in 0..Zone::ALL.len() {
            zone = zone.next();
        }
        assert_eq!(zone, Zone::Top);
    }

    #[test]
    fn test_zone_from_str() {
        assert_eq!("rear".parse::<Zone>().unwrap(), Zone::Rear);
        assert_eq!(" Side ".parse::<Zone>().unwrap(), Zone::Side);
        assert!("front".parse::<Zone>().is_err());
    }
}
