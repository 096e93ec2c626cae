//! Derivation of filterable fields from raw location records.
//!
//! Everything here is a pure function of the raw record. Malformed text is
//! never an error: the derived field becomes `None` and bucketed filters
//! treat it as "does not match".

use std::sync::OnceLock;

use regex::Regex;

use crate::models::location::{EnhancedLocation, Location};

fn digit_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d[\d,]*").expect("digit run regex"))
}

fn duration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(minutes?|mins?|hours?|hrs?|days?)")
            .expect("duration regex")
    })
}

/// Parse a free-text budget into yen.
///
/// "Free" (any casing) is zero; otherwise the first integer run is used with
/// currency symbols and thousands separators stripped, so "¥1,500" is 1500
/// and "about ¥2,000 per person" is 2000. Unparsable text is `None`.
pub fn parse_budget(text: &str) -> Option<u32> {
    // "free" must stand alone as a word: "Gluten-free set ¥800" is a price,
    // not free admission.
    let lower = text.to_lowercase();
    if lower
        .split_whitespace()
        .map(|tok| tok.trim_matches(|c: char| !c.is_alphanumeric()))
        .any(|tok| tok == "free")
    {
        return Some(0);
    }
    let m = digit_run_re().find(text)?;
    m.as_str().replace(',', "").parse().ok()
}

/// Parse a free-text visit duration into minutes.
///
/// Matches a number (decimals allowed) followed by a unit word, unit matched
/// case-insensitively: "1.5 hours" is 90, "2 days" is 2880, "lunch" is `None`.
pub fn parse_duration(text: &str) -> Option<u32> {
    let caps = duration_re().captures(text)?;
    let amount: f64 = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps.get(2)?.as_str().to_lowercase();

    let minutes = if unit.starts_with("min") {
        amount
    } else if unit.starts_with("hour") || unit.starts_with("hr") {
        amount * 60.0
    } else {
        amount * 24.0 * 60.0
    };

    if minutes < 0.0 {
        return None;
    }
    Some(minutes.round() as u32)
}

/// Derive the tag set for a location: keyword matches against the name plus
/// a category fallback, so every location carries at least one tag.
pub fn derive_tags(name: &str, category: &str) -> Vec<String> {
    const KEYWORD_TAGS: &[(&str, &[&str])] = &[
        ("temples", &["temple", "shrine", "pagoda", "torii", "buddha"]),
        (
            "food",
            &["ramen", "sushi", "market", "izakaya", "yatai", "sake", "kaiseki"],
        ),
        (
            "nature",
            &["park", "garden", "mountain", "forest", "bamboo", "lake", "gorge"],
        ),
        (
            "views",
            &["tower", "observatory", "skytree", "viewpoint", "panorama"],
        ),
        ("onsen", &["onsen", "hot spring", "bathhouse", "sento"]),
        ("shopping", &["shopping", "mall", "arcade", "dori", "street"]),
        ("museums", &["museum", "gallery", "aquarium"]),
        ("nightlife", &["bar", "neon", "karaoke", "nightlife"]),
    ];

    let name_lower = name.to_lowercase();
    let mut tags: Vec<String> = Vec::new();

    for (tag, keywords) in KEYWORD_TAGS {
        if keywords.iter().any(|kw| name_lower.contains(kw)) {
            tags.push(tag.to_string());
        }
    }

    let base = match category.to_lowercase().as_str() {
        "culture" => "culture",
        "food" => "food",
        "nature" => "nature",
        "shopping" => "shopping",
        "view" | "views" => "views",
        "nightlife" => "nightlife",
        _ => "sightseeing",
    };
    if !tags.iter().any(|t| t == base) {
        tags.push(base.to_string());
    }

    tags
}

/// Enrich one raw location with its derived fields.
///
/// Reads only the raw record, so enriching the same location twice yields an
/// identical result.
pub fn enrich(location: &Location) -> EnhancedLocation {
    EnhancedLocation {
        budget_yen: location.budget.as_deref().and_then(parse_budget),
        duration_minutes: location.duration.as_deref().and_then(parse_duration),
        tags: derive_tags(&location.name, &location.category),
        rating: location.rating.clamp(0.0, 5.0),
        location: location.clone(),
    }
}

pub fn enrich_all(locations: &[Location]) -> Vec<EnhancedLocation> {
    locations.iter().map(enrich).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_budget_examples() {
        assert_eq!(parse_budget("Free"), Some(0));
        assert_eq!(parse_budget("free entry"), Some(0));
        assert_eq!(parse_budget("¥1,500"), Some(1500));
        assert_eq!(parse_budget("about ¥2,000 per person"), Some(2000));
        assert_eq!(parse_budget("¥500-¥1,000"), Some(500));
        assert_eq!(parse_budget("varies"), None);
        assert_eq!(parse_budget(""), None);
    }

    #[test]
    fn test_free_only_matches_as_a_whole_word() {
        assert_eq!(parse_budget("Gluten-free set ¥800"), Some(800));
        assert_eq!(parse_budget("Free."), Some(0));
        assert_eq!(parse_budget("entry is free of charge"), Some(0));
        assert_eq!(parse_budget("freeform donation"), None);
    }

    #[test]
    fn test_parse_duration_examples() {
        assert_eq!(parse_duration("2 hours"), Some(120));
        assert_eq!(parse_duration("1.5 hours"), Some(90));
        assert_eq!(parse_duration("90 minutes"), Some(90));
        assert_eq!(parse_duration("45 min"), Some(45));
        assert_eq!(parse_duration("1 day"), Some(1440));
        assert_eq!(parse_duration("2 days"), Some(2880));
        assert_eq!(parse_duration("2 HOURS"), Some(120));
        assert_eq!(parse_duration("lunch"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[test]
    fn test_every_location_gets_a_tag() {
        let tags = derive_tags("Some Unnamed Spot", "mystery");
        assert_eq!(tags, vec!["sightseeing".to_string()]);

        let tags = derive_tags("Fushimi Inari Shrine", "culture");
        assert!(tags.contains(&"temples".to_string()));
        assert!(tags.contains(&"culture".to_string()));
    }

    #[test]
    fn test_category_tag_not_duplicated() {
        let tags = derive_tags("Nishiki Market", "food");
        assert_eq!(tags.iter().filter(|t| *t == "food").count(), 1);
    }

    #[test]
    fn test_rating_clamped() {
        let mut loc = sample_location();
        loc.rating = 7.2;
        assert_eq!(enrich(&loc).rating, 5.0);
        loc.rating = -1.0;
        assert_eq!(enrich(&loc).rating, 0.0);
    }

    fn sample_location() -> Location {
        Location {
            id: "loc-1".to_string(),
            name: "Kinkaku-ji Temple".to_string(),
            category: "culture".to_string(),
            subtype: None,
            city: "Kyoto".to_string(),
            prefecture: "Kansai".to_string(),
            coordinates: (35.0394, 135.7292),
            rating: 4.7,
            review_count: 1200,
            budget: Some("¥500".to_string()),
            duration: Some("1 hour".to_string()),
            price_level: Some(1),
            wheelchair_accessible: true,
            vegetarian_friendly: false,
            permanently_closed: false,
            open_now: Some(true),
            photos: Vec::new(),
        }
    }

    #[test]
    fn test_enrichment_is_idempotent() {
        let loc = sample_location();
        let once = enrich(&loc);
        let twice = enrich(&once.location);
        assert_eq!(once, twice);
    }
}
