pub mod content;
mod japan;

use serde::{Deserialize, Serialize};

use crate::models::region::Region;
use crate::models::vibe::Vibe;

/// Result of resolving a city id against the catalog.
///
/// Explicit two-tier lookup: exact id match first, then a normalized
/// (trim + lowercase) fallback. A miss is reported as `Unknown` rather than
/// guessed at; callers render unknown ids title-cased.
#[derive(Debug, Clone, PartialEq)]
pub enum CityMatch<'a> {
    Known(&'a Region),
    Unknown(String),
}

/// The static Region/City/Vibe catalog. Immutable once constructed; the
/// recommendation engine reads only structural fields (`best_for`, city
/// membership), which content overrides never touch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub regions: Vec<Region>,
    pub vibes: Vec<Vibe>,
}

impl Catalog {
    /// The bundled Japan catalog.
    pub fn japan() -> Self {
        japan::build()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn region(&self, region_id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == region_id)
    }

    pub fn vibe(&self, vibe_id: &str) -> Option<&Vibe> {
        self.vibes.iter().find(|v| v.id == vibe_id)
    }

    /// Resolve the region owning a city id.
    pub fn region_of_city(&self, city_id: &str) -> CityMatch<'_> {
        for region in &self.regions {
            if region.cities.iter().any(|c| c.id == city_id) {
                return CityMatch::Known(region);
            }
        }
        // Fallback tier: trim + lowercase, for ids that arrive as free text.
        let normalized = city_id.trim().to_lowercase();
        for region in &self.regions {
            if region
                .cities
                .iter()
                .any(|c| c.id.to_lowercase() == normalized || c.name.to_lowercase() == normalized)
            {
                return CityMatch::Known(region);
            }
        }
        CityMatch::Unknown(city_id.to_string())
    }

    /// Display name for a city id: the catalog name when known, otherwise the
    /// raw id title-cased. Never fails.
    pub fn city_display_name(&self, city_id: &str) -> String {
        for region in &self.regions {
            if let Some(city) = region.cities.iter().find(|c| c.id == city_id) {
                return city.name.clone();
            }
        }
        title_case(city_id)
    }
}

/// Title-case a raw identifier for display: "osaka-bay" -> "Osaka Bay".
pub fn title_case(raw: &str) -> String {
    raw.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
