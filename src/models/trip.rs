use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::airport::EntryPoint;

/// Upper bound on how many vibes a user may select at once.
pub const MAX_SELECTED_VIBES: usize = 3;

/// Shared state accumulated across the trip builder steps.
///
/// `regions` is always the projection of `cities` through the catalog's
/// city-to-region relation (see `services::trip_state`); it is re-derived
/// inside every mutation and must never be edited on its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripBuilderData {
    /// Selected vibe ids, in selection order, at most `MAX_SELECTED_VIBES`.
    pub vibes: Vec<String>,
    pub entry_point: Option<EntryPoint>,
    /// Selected city ids (set semantics; may include non-catalog ids).
    pub cities: Vec<String>,
    /// Derived region ids, kept in sync with `cities`.
    pub regions: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub duration_days: Option<u32>,
    pub group: Option<GroupType>,
    pub budget_level: Option<BudgetLevel>,
    #[serde(default)]
    pub wheelchair_needed: bool,
    #[serde(default)]
    pub vegetarian: bool,
    /// One-shot latch for the default city selection. Lives in the state
    /// itself so it survives view remounts.
    #[serde(default)]
    pub has_auto_selected: bool,
}

impl TripBuilderData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_vibe(&self, vibe_id: &str) -> bool {
        self.vibes.iter().any(|v| v == vibe_id)
    }

    pub fn has_city(&self, city_id: &str) -> bool {
        self.cities.iter().any(|c| c == city_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    Solo,
    Couple,
    Family,
    Friends,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Budget,
    Moderate,
    Luxury,
}
