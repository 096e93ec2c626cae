use serde::{Deserialize, Serialize};

/// A top-level geographic grouping of cities (e.g. "Kansai").
///
/// Regions are catalog data: loaded once, never mutated at runtime. Display
/// text may be replaced by content overrides, but `best_for` and `cities`
/// are structural and always come from the bundled catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub cities: Vec<City>,
    /// Vibe ids this region is a strong match for.
    pub best_for: Vec<String>,
    pub highlights: Vec<String>,
    pub hero_image: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl Region {
    /// Whether a city id belongs to this region's known city list.
    pub fn has_city(&self, city_id: &str) -> bool {
        self.cities.iter().any(|c| c.id == city_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
}

impl City {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}
