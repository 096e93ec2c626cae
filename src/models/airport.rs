use serde::{Deserialize, Serialize};

/// An arrival airport as returned by the airport data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airport {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub city: String,
    pub iata_code: String,
    /// Region label from the source; lower-cased to match catalog region ids.
    pub region: String,
    pub coordinates: (f64, f64),
}

impl Airport {
    /// Build the trip builder's entry point from this airport.
    ///
    /// The region id is normalized (trim + lowercase) but not validated
    /// against the catalog: an unknown region simply never matches any
    /// scored region, which is the graceful behavior the wizard wants.
    pub fn entry_point(&self) -> EntryPoint {
        EntryPoint {
            airport_id: self.id.clone(),
            name: self.name.clone(),
            iata_code: self.iata_code.clone(),
            region_id: self.region.trim().to_lowercase(),
            coordinates: self.coordinates,
        }
    }
}

/// The selected arrival airport, normalized for scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryPoint {
    pub airport_id: String,
    pub name: String,
    pub iata_code: String,
    pub region_id: String,
    pub coordinates: (f64, f64),
}
