//! Runway contaminant catalog.
//!
//! A fixed table mapping each reportable contaminant, per runway surface,
//! to its runway condition code, advisory crosswind and dispatch flag.
//! Descriptions are display attributes of [`ContaminantId`]; legacy
//! description strings are mapped onto the enum at the boundary.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Runway surface category selecting which catalog rows apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SurfaceKind {
    Gravel,
    Paved,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 2] = [SurfaceKind::Gravel, SurfaceKind::Paved];

    /// The "not selected" label shown before a contaminant is picked.
    ///
    /// Never matches a catalog row.
    pub fn placeholder(self) -> &'static str {
        match self {
            SurfaceKind::Gravel => "SELECT GRAVEL CONTAMINANT",
            SurfaceKind::Paved => "SELECT PAVED CONTAMINANT",
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceKind::Gravel => f.write_str("GRAVEL"),
            SurfaceKind::Paved => f.write_str("PAVED"),
        }
    }
}

impl FromStr for SurfaceKind {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "gravel" => Ok(SurfaceKind::Gravel),
            "paved" | "pavement" => Ok(SurfaceKind::Paved),
            _ => Err(CatalogError::UnknownSurface(value.to_string())),
        }
    }
}

/// Every contaminant the catalog knows about, independent of surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContaminantId {
    Dry,
    Frost,
    Wet,
    SlushShallow,
    DrySnowShallow,
    WetSnowShallow,
    CompactedSnowCold,
    SlipperyWhenWet,
    DrySnowDeep,
    WetSnowDeep,
    CompactedSnowWarm,
    SnowOverCompactedSnow,
    StandingWater,
    SlushDeep,
    IceCold,
    IceWarm,
    WetIce,
    SlushOverIce,
    WaterOverCompactedSnow,
    GravelDrySnowShallow,
    GravelDrySnowDeep,
    GravelSlushDeep,
}

impl ContaminantId {
    pub const ALL: [ContaminantId; 22] = [
        ContaminantId::Dry,
        ContaminantId::Frost,
        ContaminantId::Wet,
        ContaminantId::SlushShallow,
        ContaminantId::DrySnowShallow,
        ContaminantId::WetSnowShallow,
        ContaminantId::CompactedSnowCold,
        ContaminantId::SlipperyWhenWet,
        ContaminantId::DrySnowDeep,
        ContaminantId::WetSnowDeep,
        ContaminantId::CompactedSnowWarm,
        ContaminantId::SnowOverCompactedSnow,
        ContaminantId::StandingWater,
        ContaminantId::SlushDeep,
        ContaminantId::IceCold,
        ContaminantId::IceWarm,
        ContaminantId::WetIce,
        ContaminantId::SlushOverIce,
        ContaminantId::WaterOverCompactedSnow,
        ContaminantId::GravelDrySnowShallow,
        ContaminantId::GravelDrySnowDeep,
        ContaminantId::GravelSlushDeep,
    ];

    /// Human-readable description, as reported on the dispatch form.
    pub fn description(self) -> &'static str {
        match self {
            ContaminantId::Dry => "Dry",
            ContaminantId::Frost => "Frost",
            ContaminantId::Wet => "Wet (Includes Damp and 0.13 in or less depth of water)",
            ContaminantId::SlushShallow => "Slush 0.13 in or less depth",
            ContaminantId::DrySnowShallow => "Dry Snow 0.13 in or less depth",
            ContaminantId::WetSnowShallow => "Wet Snow 0.13 in or less depth",
            ContaminantId::CompactedSnowCold => "Compacted Snow: -15ºC and colder OAT",
            ContaminantId::SlipperyWhenWet => "Slippery When Wet",
            ContaminantId::DrySnowDeep => "Dry Snow more than 0.13 in depth",
            ContaminantId::WetSnowDeep => "Wet Snow more than 0.13 in depth",
            ContaminantId::CompactedSnowWarm => "Compacted Snow: warmer than -15ºC OAT",
            ContaminantId::SnowOverCompactedSnow => "Dry Snow or Wet Snow over Compacted Snow",
            ContaminantId::StandingWater => "Standing Water more than 0.13 in depth",
            ContaminantId::SlushDeep => "Slush more than 0.13 in depth",
            ContaminantId::IceCold => "Ice: colder than -7ºC OAT",
            ContaminantId::IceWarm => "Ice: -7ºC and warmer OAT",
            ContaminantId::WetIce => "Wet Ice",
            ContaminantId::SlushOverIce => "Slush over Ice",
            ContaminantId::WaterOverCompactedSnow => "Water on top of Compacted Snow",
            ContaminantId::GravelDrySnowShallow => "Dry Snow 1.0 in or less depth",
            ContaminantId::GravelDrySnowDeep => "Dry Snow more than 1.0 in depth",
            ContaminantId::GravelSlushDeep => "Slush Greater than 0.13 in depth",
        }
    }

    /// Map a legacy description string onto the enum. Exact match only.
    pub fn from_description(description: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.description() == description)
    }

    /// Aircraft maximum depth (inches) for depth-graded contaminants whose
    /// description only gives a lower bound.
    pub fn max_depth_in(self) -> Option<f32> {
        match self {
            ContaminantId::DrySnowDeep | ContaminantId::GravelDrySnowDeep => Some(4.0),
            ContaminantId::WetSnowDeep
            | ContaminantId::SlushDeep
            | ContaminantId::GravelSlushDeep
            | ContaminantId::StandingWater => Some(0.5),
            _ => None,
        }
    }
}

impl fmt::Display for ContaminantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for ContaminantId {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_description(value)
            .ok_or_else(|| CatalogError::UnknownContaminant(value.to_string()))
    }
}

/// One row of the contaminant catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub contaminant: ContaminantId,
    pub surface: SurfaceKind,
    /// Runway condition code, 0 (NO-GO) to 6.
    pub code: u8,
    /// Advisory maximum crosswind for `code`, in knots.
    pub max_crosswind_kt: u16,
    /// Dispatch must be called to verify this condition.
    pub call_dxp: bool,
}

impl CatalogEntry {
    pub fn description(&self) -> &'static str {
        self.contaminant.description()
    }
}

/// Advisory maximum crosswind (kt) for a runway condition code.
pub const fn advisory_crosswind_kt(code: u8) -> u16 {
    match code {
        6 => 35,
        5 => 31,
        4 => 27,
        3 => 20,
        2 => 15,
        1 => 10,
        _ => 0,
    }
}

const fn row(
    contaminant: ContaminantId,
    surface: SurfaceKind,
    code: u8,
    call_dxp: bool,
) -> CatalogEntry {
    CatalogEntry {
        contaminant,
        surface,
        code,
        max_crosswind_kt: advisory_crosswind_kt(code),
        call_dxp,
    }
}

use ContaminantId as C;
use SurfaceKind::{Gravel as G, Paved as P};

static CATALOG: [CatalogEntry; 37] = [
    // Gravel
    row(C::Dry, G, 6, false),
    row(C::Frost, G, 5, false),
    row(C::Wet, G, 5, false),
    row(C::GravelDrySnowShallow, G, 5, false),
    row(C::WetSnowShallow, G, 5, false),
    row(C::SlushShallow, G, 4, false),
    row(C::CompactedSnowCold, G, 4, false),
    row(C::GravelDrySnowDeep, G, 3, true),
    row(C::WetSnowDeep, G, 3, false),
    row(C::CompactedSnowWarm, G, 3, false),
    row(C::SnowOverCompactedSnow, G, 3, false),
    row(C::StandingWater, G, 2, true),
    row(C::GravelSlushDeep, G, 1, true),
    row(C::IceCold, G, 1, true),
    row(C::IceWarm, G, 0, true),
    row(C::WetIce, G, 0, true),
    row(C::SlushOverIce, G, 0, true),
    row(C::WaterOverCompactedSnow, G, 0, true),
    // Paved
    row(C::Dry, P, 6, false),
    row(C::Frost, P, 5, false),
    row(C::Wet, P, 5, false),
    row(C::SlushShallow, P, 5, false),
    row(C::DrySnowShallow, P, 5, false),
    row(C::WetSnowShallow, P, 5, false),
    row(C::CompactedSnowCold, P, 4, false),
    row(C::SlipperyWhenWet, P, 3, true),
    row(C::DrySnowDeep, P, 3, false),
    row(C::WetSnowDeep, P, 3, false),
    row(C::CompactedSnowWarm, P, 3, false),
    row(C::SnowOverCompactedSnow, P, 3, false),
    row(C::StandingWater, P, 2, true),
    row(C::SlushDeep, P, 2, true),
    row(C::IceCold, P, 1, true),
    row(C::IceWarm, P, 0, true),
    row(C::WetIce, P, 0, true),
    row(C::SlushOverIce, P, 0, true),
    row(C::WaterOverCompactedSnow, P, 0, true),
];

/// All catalog rows in table order.
pub fn entries() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Catalog rows for one surface, in table order.
pub fn entries_for(surface: SurfaceKind) -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter().filter(move |entry| entry.surface == surface)
}

/// Find the row for a contaminant on a surface.
pub fn lookup(contaminant: ContaminantId, surface: SurfaceKind) -> Option<&'static CatalogEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.contaminant == contaminant && entry.surface == surface)
}

/// Find the row for a legacy description string on a surface.
///
/// Placeholders and unknown strings return `None`.
pub fn lookup_description(description: &str, surface: SurfaceKind) -> Option<&'static CatalogEntry> {
    let entry = ContaminantId::from_description(description).and_then(|id| lookup(id, surface));
    if entry.is_none() {
        tracing::trace!(description, %surface, "no catalog row");
    }
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_descriptions_are_unique() {
        let descriptions: HashSet<&str> =
            ContaminantId::ALL.iter().map(|id| id.description()).collect();
        assert_eq!(descriptions.len(), ContaminantId::ALL.len());
    }

    #[test]
    fn test_one_row_per_contaminant_and_surface() {
        let mut seen = HashSet::new();
        for entry in entries() {
            assert!(
                seen.insert((entry.contaminant, entry.surface)),
                "duplicate row for {:?} on {}",
                entry.contaminant,
                entry.surface
            );
            assert!(entry.code <= 6);
            assert_eq!(entry.max_crosswind_kt, advisory_crosswind_kt(entry.code));
        }
    }

    #[test]
    fn test_known_codes() {
        let code = |d: &str, s| lookup_description(d, s).map(|e| e.code);
        assert_eq!(code("Dry Snow more than 1.0 in depth", SurfaceKind::Gravel), Some(3));
        assert_eq!(code("Ice: -7ºC and warmer OAT", SurfaceKind::Paved), Some(0));
        assert_eq!(code("Ice: -7ºC and warmer OAT", SurfaceKind::Gravel), Some(0));
        assert_eq!(code("Frost", SurfaceKind::Paved), Some(5));
        assert_eq!(code("Slush Greater than 0.13 in depth", SurfaceKind::Gravel), Some(1));
        assert_eq!(code("Dry", SurfaceKind::Paved), Some(6));
    }

    #[test]
    fn test_placeholders_never_match() {
        for surface in SurfaceKind::ALL {
            for other in SurfaceKind::ALL {
                assert!(lookup_description(other.placeholder(), surface).is_none());
            }
        }
    }

    #[test]
    fn test_surface_specific_rows() {
        // Gravel-only depth band has no paved row.
        assert!(lookup_description("Dry Snow more than 1.0 in depth", SurfaceKind::Paved).is_none());
        assert!(lookup(ContaminantId::SlipperyWhenWet, SurfaceKind::Gravel).is_none());
        assert!(lookup(ContaminantId::SlipperyWhenWet, SurfaceKind::Paved).is_some());
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(lookup_description("frost", SurfaceKind::Paved).is_none());
        assert!(lookup_description(" Frost", SurfaceKind::Paved).is_none());
        assert!(lookup_description("", SurfaceKind::Gravel).is_none());
    }

    #[test]
    fn test_entries_for_surface() {
        assert!(entries_for(SurfaceKind::Gravel).all(|e| e.surface == SurfaceKind::Gravel));
        let paved = entries_for(SurfaceKind::Paved).count();
        let gravel = entries_for(SurfaceKind::Gravel).count();
        assert_eq!(paved + gravel, entries().len());
    }

    #[test]
    fn test_surface_from_str() {
        assert_eq!("Gravel".parse::<SurfaceKind>(), Ok(SurfaceKind::Gravel));
        assert_eq!(" PAVED ".parse::<SurfaceKind>(), Ok(SurfaceKind::Paved));
        assert_eq!(
            "grass".parse::<SurfaceKind>(),
            Err(CatalogError::UnknownSurface("grass".to_string()))
        );
    }

    #[test]
    fn test_contaminant_from_str() {
        assert_eq!("Wet Ice".parse::<ContaminantId>(), Ok(ContaminantId::WetIce));
        assert!(matches!(
            "SELECT PAVED CONTAMINANT".parse::<ContaminantId>(),
            Err(CatalogError::UnknownContaminant(_))
        ));
    }
}
