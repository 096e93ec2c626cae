//! Display-text overrides from the CMS.
//!
//! Overrides can replace what a region or vibe *says*, never what it *is*:
//! there is deliberately no way to override `best_for` or city membership,
//! so scoring and selection are unaffected by whether overrides are present.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentOverride {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub hero_image: Option<String>,
    pub gallery: Option<Vec<String>>,
}

/// Overrides keyed by region id and vibe id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentOverrides {
    #[serde(default)]
    pub regions: HashMap<String, ContentOverride>,
    #[serde(default)]
    pub vibes: HashMap<String, ContentOverride>,
}

impl ContentOverrides {
    /// Produce a display copy of the catalog with overrides merged in.
    /// Unknown keys are ignored.
    pub fn apply(&self, catalog: &Catalog) -> Catalog {
        let mut merged = catalog.clone();

        for region in &mut merged.regions {
            if let Some(over) = self.regions.get(&region.id) {
                if let Some(name) = &over.name {
                    region.name = name.clone();
                }
                if let Some(tagline) = &over.tagline {
                    region.tagline = tagline.clone();
                }
                if let Some(description) = &over.description {
                    region.description = description.clone();
                }
                if let Some(hero) = &over.hero_image {
                    region.hero_image = Some(hero.clone());
                }
                if let Some(gallery) = &over.gallery {
                    region.gallery = gallery.clone();
                }
            }
        }

        for vibe in &mut merged.vibes {
            if let Some(over) = self.vibes.get(&vibe.id) {
                if let Some(name) = &over.name {
                    vibe.name = name.clone();
                }
                if let Some(description) = &over.description {
                    vibe.description = description.clone();
                }
            }
        }

        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_touch_display_text_only() {
        let catalog = Catalog::japan();
        let mut overrides = ContentOverrides::default();
        overrides.regions.insert(
            "kansai".to_string(),
            ContentOverride {
                name: Some("Kansai — Autumn Special".to_string()),
                tagline: Some("Momiji season".to_string()),
                ..Default::default()
            },
        );

        let merged = overrides.apply(&catalog);
        let before = catalog.region("kansai").unwrap();
        let after = merged.region("kansai").unwrap();

        assert_eq!(after.name, "Kansai — Autumn Special");
        assert_eq!(after.tagline, "Momiji season");
        // Structural fields are untouched.
        assert_eq!(after.best_for, before.best_for);
        assert_eq!(after.cities.len(), before.cities.len());
    }

    #[test]
    fn test_unknown_override_keys_ignored() {
        let catalog = Catalog::japan();
        let mut overrides = ContentOverrides::default();
        overrides
            .regions
            .insert("narnia".to_string(), ContentOverride::default());

        let merged = overrides.apply(&catalog);
        assert_eq!(merged.regions.len(), catalog.regions.len());
    }
}
