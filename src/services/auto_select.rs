use crate::catalog::Catalog;
use crate::models::airport::EntryPoint;
use crate::services::region_scoring::RegionScorer;

const MAX_AUTO_CITIES: usize = 4;
const DAYS_PER_CITY: u32 = 3;
const DEFAULT_TRIP_DAYS: u32 = 4;

#[derive(Debug, Clone)]
pub struct AutoSelectConfig {
    pub max_cities: usize,
    /// Roughly one city per this many trip days.
    pub days_per_city: u32,
    /// Assumed trip length when the user has not set dates yet.
    pub default_trip_days: u32,
}

impl Default for AutoSelectConfig {
    fn default() -> Self {
        Self {
            max_cities: MAX_AUTO_CITIES,
            days_per_city: DAYS_PER_CITY,
            default_trip_days: DEFAULT_TRIP_DAYS,
        }
    }
}

/// Pick a default set of cities for a user who has not chosen any yet.
///
/// Walks the region-score ranking pulling representative cities from the
/// strongest regions first; the entry-point region leads when it is set and
/// scores above zero. The city count scales with trip duration, bounded by
/// `max_cities`. No vibes selected means no opinion: returns an empty list.
pub fn auto_select_cities(
    catalog: &Catalog,
    scorer: &RegionScorer,
    selected_vibes: &[String],
    entry_point: Option<&EntryPoint>,
    duration_days: Option<u32>,
    config: &AutoSelectConfig,
) -> Vec<String> {
    if selected_vibes.is_empty() {
        return Vec::new();
    }

    let days = duration_days.unwrap_or(config.default_trip_days).max(1);
    let target = (days.div_ceil(config.days_per_city) as usize).clamp(1, config.max_cities);

    let scored = scorer.score_regions(catalog, selected_vibes, entry_point);
    let mut ranked: Vec<_> = scorer
        .rank(scored)
        .into_iter()
        .filter(|s| s.total_score > 0.0)
        .collect();

    // The entry region leads the walk when it made the cut.
    if let Some(ep) = entry_point {
        if let Some(pos) = ranked.iter().position(|s| s.region_id == ep.region_id) {
            let entry = ranked.remove(pos);
            ranked.insert(0, entry);
        }
    }

    // Round-robin across the ranked regions: first city of each, then the
    // second, until the target is met or the cities run out.
    let mut cities = Vec::new();
    let mut depth = 0;
    while cities.len() < target {
        let mut pulled_any = false;
        for scored in &ranked {
            if cities.len() >= target {
                break;
            }
            let Some(region) = catalog.region(&scored.region_id) else {
                continue;
            };
            if let Some(city) = region.cities.get(depth) {
                cities.push(city.id.clone());
                pulled_any = true;
            }
        }
        if !pulled_any {
            break;
        }
        depth += 1;
    }

    cities
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vibes(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_vibes_means_no_selection() {
        let catalog = Catalog::japan();
        let scorer = RegionScorer::default();
        let cities = auto_select_cities(
            &catalog,
            &scorer,
            &[],
            None,
            Some(10),
            &AutoSelectConfig::default(),
        );
        assert!(cities.is_empty());
    }

    #[test]
    fn test_longer_trips_pick_more_cities() {
        let catalog = Catalog::japan();
        let scorer = RegionScorer::default();
        let config = AutoSelectConfig::default();
        let vibes = vibes(&["temples_tradition", "foodie_paradise"]);

        let short = auto_select_cities(&catalog, &scorer, &vibes, None, Some(3), &config);
        let long = auto_select_cities(&catalog, &scorer, &vibes, None, Some(12), &config);

        assert!(!short.is_empty());
        assert!(long.len() > short.len());
        assert!(long.len() <= config.max_cities);
    }

    #[test]
    fn test_entry_region_city_comes_first() {
        let catalog = Catalog::japan();
        let scorer = RegionScorer::default();
        let entry = EntryPoint {
            airport_id: "kix".to_string(),
            name: "Kansai International".to_string(),
            iata_code: "KIX".to_string(),
            region_id: "kansai".to_string(),
            coordinates: (34.4347, 135.2441),
        };

        let cities = auto_select_cities(
            &catalog,
            &scorer,
            &vibes(&["foodie_paradise"]),
            Some(&entry),
            Some(6),
            &AutoSelectConfig::default(),
        );

        // Kansai scores above zero for foodie, so its representative leads.
        assert_eq!(cities.first().map(String::as_str), Some("kyoto"));
    }

    #[test]
    fn test_zero_scoring_entry_region_is_not_forced() {
        let catalog = Catalog::japan();
        let scorer = RegionScorer::default();
        // Kanto has no snow_country match; it must not lead just because
        // the traveler lands there.
        let entry = EntryPoint {
            airport_id: "hnd".to_string(),
            name: "Haneda".to_string(),
            iata_code: "HND".to_string(),
            region_id: "kanto".to_string(),
            coordinates: (35.5494, 139.7798),
        };

        let cities = auto_select_cities(
            &catalog,
            &scorer,
            &vibes(&["snow_country"]),
            Some(&entry),
            Some(6),
            &AutoSelectConfig::default(),
        );

        assert!(!cities.is_empty());
        assert!(!cities.contains(&"tokyo".to_string()));
    }
}
