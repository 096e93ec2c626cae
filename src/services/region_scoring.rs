use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::airport::EntryPoint;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Points added per selected vibe present in a region's `best_for` list.
    pub vibe_match_weight: f32,
    /// Minimum score required for a region to be flagged as recommended.
    /// Strictly positive: a zero-match region is never recommended, even
    /// when it is the entry-point region.
    pub minimum_recommend_score: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            vibe_match_weight: 10.0,
            minimum_recommend_score: 5.0,
        }
    }
}

impl ScoringWeights {
    /// Create weights from environment variables or use defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            vibe_match_weight: std::env::var("TRIP_VIBE_MATCH_WEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.vibe_match_weight),
            minimum_recommend_score: std::env::var("TRIP_MIN_RECOMMEND_SCORE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.minimum_recommend_score),
        }
    }
}

/// One catalog region with its score against the user's current picks.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRegion {
    pub region_id: String,
    pub total_score: f32,
    pub is_recommended: bool,
    /// Whether this region owns the selected entry airport. A separate
    /// signal from the vibe score, never folded into `total_score`.
    pub is_entry_point_region: bool,
}

#[derive(Default)]
pub struct RegionScorer {
    pub weights: ScoringWeights,
}

impl RegionScorer {
    pub fn new() -> Self {
        let weights = ScoringWeights::from_env();
        log::debug!("RegionScorer initialized with weights: {:?}", weights);
        Self { weights }
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Score every catalog region against the selected vibes.
    ///
    /// Returns exactly one entry per region, in catalog order. Pure and
    /// deterministic: no I/O, no side effects.
    pub fn score_regions(
        &self,
        catalog: &Catalog,
        selected_vibes: &[String],
        entry_point: Option<&EntryPoint>,
    ) -> Vec<ScoredRegion> {
        catalog
            .regions
            .iter()
            .map(|region| {
                let matched = selected_vibes
                    .iter()
                    .filter(|vibe| region.best_for.iter().any(|b| b == *vibe))
                    .count();
                let total_score = matched as f32 * self.weights.vibe_match_weight;

                ScoredRegion {
                    region_id: region.id.clone(),
                    total_score,
                    is_recommended: total_score > self.weights.minimum_recommend_score,
                    is_entry_point_region: entry_point
                        .map(|ep| ep.region_id == region.id)
                        .unwrap_or(false),
                }
            })
            .collect()
    }

    /// Rank scored regions by score descending. Stable, so equally scored
    /// regions keep their catalog order.
    pub fn rank(&self, mut scored: Vec<ScoredRegion>) -> Vec<ScoredRegion> {
        scored.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_entry_per_region_in_catalog_order() {
        let catalog = Catalog::japan();
        let scorer = RegionScorer::default();
        let scored = scorer.score_regions(
            &catalog,
            &["temples_tradition".to_string(), "nature_escape".to_string()],
            None,
        );

        assert_eq!(scored.len(), catalog.regions.len());
        for (s, r) in scored.iter().zip(catalog.regions.iter()) {
            assert_eq!(s.region_id, r.id);
        }
    }

    #[test]
    fn test_empty_vibes_scores_zero_everywhere() {
        let catalog = Catalog::japan();
        let scorer = RegionScorer::default();
        let scored = scorer.score_regions(&catalog, &[], None);

        for s in &scored {
            assert_eq!(s.total_score, 0.0);
            assert!(!s.is_recommended);
        }
    }

    #[test]
    fn test_more_matches_score_strictly_higher() {
        let catalog = Catalog::japan();
        let scorer = RegionScorer::default();
        let vibes = vec![
            "temples_tradition".to_string(),
            "foodie_paradise".to_string(),
        ];
        let scored = scorer.score_regions(&catalog, &vibes, None);

        let kansai = scored.iter().find(|s| s.region_id == "kansai").unwrap();
        let chugoku = scored.iter().find(|s| s.region_id == "chugoku").unwrap();
        let okinawa = scored.iter().find(|s| s.region_id == "okinawa").unwrap();

        // Kansai matches both vibes, Chugoku one, Okinawa none.
        assert!(kansai.total_score > chugoku.total_score);
        assert!(chugoku.total_score > okinawa.total_score);
        assert!(kansai.is_recommended);
        assert!(chugoku.is_recommended);
        assert!(!okinawa.is_recommended);
    }
}
