use serde::{Deserialize, Serialize};

/// A point of interest as returned by the location data source.
///
/// Budget and duration arrive as free text ("¥1,200", "2 hours") and are
/// parsed into numeric fields during enrichment, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    /// Category label (culture / food / nature / shopping / view / ...).
    pub category: String,
    #[serde(default)]
    pub subtype: Option<String>,
    pub city: String,
    pub prefecture: String,
    pub coordinates: (f64, f64),
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub wheelchair_accessible: bool,
    #[serde(default)]
    pub vegetarian_friendly: bool,
    #[serde(default)]
    pub permanently_closed: bool,
    #[serde(default)]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub photos: Vec<String>,
}

/// A location plus the derived fields the explore pipeline filters on.
///
/// Produced by `services::enrichment::enrich`; a pure function of the raw
/// record, so re-enriching yields an identical value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancedLocation {
    pub location: Location,
    /// Parsed budget in yen; `None` when the free text was unparsable.
    pub budget_yen: Option<u32>,
    /// Parsed visit duration in minutes; `None` when unparsable.
    pub duration_minutes: Option<u32>,
    /// Derived tag set; always at least one tag.
    pub tags: Vec<String>,
    /// Rating clamped into 0.0..=5.0.
    pub rating: f32,
}

/// Optional per-location detail fetched lazily for the detail view.
/// Never required by filtering or sorting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDetails {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub opening_hours: Vec<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub rating: f32,
    pub text: String,
}
