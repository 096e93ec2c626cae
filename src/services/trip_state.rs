//! Update rules for the shared trip builder state.
//!
//! Every mutation that touches `cities` re-derives `regions` through the one
//! projection function in this module, in the same update, so the two fields
//! can never be observed out of sync.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::{Catalog, CityMatch};
use crate::models::airport::EntryPoint;
use crate::models::location::Location;
use crate::models::trip::{TripBuilderData, MAX_SELECTED_VIBES};
use crate::services::auto_select::{auto_select_cities, AutoSelectConfig};
use crate::services::region_scoring::RegionScorer;

/// Project a selected-city set onto the owning regions. Deduplicated and
/// order-independent; unknown city ids contribute nothing.
pub fn derive_regions_from_cities(catalog: &Catalog, cities: &[String]) -> Vec<String> {
    let mut regions: Vec<String> = Vec::new();
    for city in cities {
        if let CityMatch::Known(region) = catalog.region_of_city(city) {
            if !regions.contains(&region.id) {
                regions.push(region.id.clone());
            }
        }
    }
    regions
}

/// Flip a single city in or out of the selection and re-derive `regions`.
pub fn toggle_city(trip: &mut TripBuilderData, catalog: &Catalog, city_id: &str) {
    if let Some(pos) = trip.cities.iter().position(|c| c == city_id) {
        trip.cities.remove(pos);
    } else {
        trip.cities.push(city_id.to_string());
    }
    trip.regions = derive_regions_from_cities(catalog, &trip.cities);
}

/// Replace the whole city selection (deduplicating) and re-derive `regions`.
pub fn set_cities(trip: &mut TripBuilderData, catalog: &Catalog, cities: Vec<String>) {
    trip.cities.clear();
    for city in cities {
        if !trip.cities.contains(&city) {
            trip.cities.push(city);
        }
    }
    trip.regions = derive_regions_from_cities(catalog, &trip.cities);
}

/// Toggle a vibe, keeping selection order and the size bound. Adding a vibe
/// past the bound is a no-op.
pub fn toggle_vibe(trip: &mut TripBuilderData, vibe_id: &str) {
    if let Some(pos) = trip.vibes.iter().position(|v| v == vibe_id) {
        trip.vibes.remove(pos);
    } else if trip.vibes.len() < MAX_SELECTED_VIBES {
        trip.vibes.push(vibe_id.to_string());
    }
}

pub fn set_entry_point(trip: &mut TripBuilderData, entry_point: Option<EntryPoint>) {
    trip.entry_point = entry_point;
}

pub fn set_duration(trip: &mut TripBuilderData, duration_days: Option<u32>) {
    trip.duration_days = duration_days;
}

/// Set the trip dates and recompute the duration from them. Inverted or
/// half-set ranges leave the duration unset.
pub fn set_dates(
    trip: &mut TripBuilderData,
    start: Option<chrono::NaiveDate>,
    end: Option<chrono::NaiveDate>,
) {
    trip.start_date = start;
    trip.end_date = end;
    trip.duration_days = match (start, end) {
        (Some(start), Some(end)) if end >= start => Some((end - start).num_days() as u32 + 1),
        _ => None,
    };
}

/// Reset the wizard to a fresh state, auto-select latch included.
pub fn clear(trip: &mut TripBuilderData) {
    *trip = TripBuilderData::default();
}

/// Run the default city selection once, and only when the user has made no
/// explicit city choice yet. The `has_auto_selected` latch lives in the trip
/// state itself, so a later deselect-to-empty is never overridden and the
/// guard survives view remounts.
pub fn apply_auto_selection(
    trip: &mut TripBuilderData,
    catalog: &Catalog,
    scorer: &RegionScorer,
    config: &AutoSelectConfig,
) {
    if trip.has_auto_selected {
        return;
    }
    // The latch is consumed on the first opportunity, whether or not a
    // selection is made: finding manual picks here means the user got there
    // first, and clearing those picks later must not re-fill them.
    trip.has_auto_selected = true;

    if !trip.cities.is_empty() {
        return;
    }

    let cities = auto_select_cities(
        catalog,
        scorer,
        &trip.vibes,
        trip.entry_point.as_ref(),
        trip.duration_days,
        config,
    );
    set_cities(trip, catalog, cities);
}

/// UI selection state of one region, derived from the global city selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionSelectionState {
    None,
    Partial,
    Full,
}

/// Region labels for cities that arrived outside the static catalog, keyed
/// by lower-cased city id. Built from fetched location records so free-text
/// selections can still be attributed to a region.
#[derive(Debug, Clone, Default)]
pub struct DynamicCityIndex {
    by_city: HashMap<String, String>,
}

impl DynamicCityIndex {
    pub fn from_locations(locations: &[Location]) -> Self {
        let mut by_city = HashMap::new();
        for loc in locations {
            by_city
                .entry(loc.city.trim().to_lowercase())
                .or_insert_with(|| loc.prefecture.clone());
        }
        Self { by_city }
    }

    pub fn region_label(&self, city_id: &str) -> Option<&str> {
        self.by_city
            .get(&city_id.trim().to_lowercase())
            .map(String::as_str)
    }
}

/// Compute a region's selection state from the selected-city set.
///
/// A region is `Full` only when every known city is selected and no extra
/// dynamically matched city is attributed to it; the extra selection drops
/// it back to `Partial` because the known-set fraction is no longer exactly
/// one. An unknown region id is simply `None`.
pub fn region_selection_state(
    catalog: &Catalog,
    region_id: &str,
    selected_cities: &[String],
    dynamic: &DynamicCityIndex,
) -> RegionSelectionState {
    let Some(region) = catalog.region(region_id) else {
        return RegionSelectionState::None;
    };

    let selected_known = selected_cities
        .iter()
        .filter(|c| region.has_city(c))
        .count();

    let dynamic_extras = selected_cities
        .iter()
        .filter(|c| !region.has_city(c))
        .filter(|c| match catalog.region_of_city(c) {
            // A normalized-tier match to this region counts toward it too.
            CityMatch::Known(owner) => owner.id == region.id,
            CityMatch::Unknown(_) => dynamic
                .region_label(c)
                .map(|label| label.eq_ignore_ascii_case(&region.name))
                .unwrap_or(false),
        })
        .count();

    if selected_known == 0 && dynamic_extras == 0 {
        RegionSelectionState::None
    } else if selected_known == region.cities.len() && dynamic_extras == 0 {
        RegionSelectionState::Full
    } else {
        RegionSelectionState::Partial
    }
}
