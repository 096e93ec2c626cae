//! The explore surface's filter/sort/page pipeline.
//!
//! Each stage is a pure transform over the previous one: enrich, then a
//! conjunction of independently optional predicates, then sort, then a
//! slice-based page window. Any change to query, filters or sort resets the
//! page counter so stale pagination never shows against new results.

use crate::models::filters::{
    ActiveFilter, BudgetBucket, DurationBucket, ExploreFilters, FilterType, SortOrder,
};
use crate::models::location::{EnhancedLocation, Location};
use crate::services::enrichment::enrich_all;

pub const PAGE_SIZE: usize = 12;

/// Whether one enriched location passes the current filter conjunction.
/// Unset fields are vacuously true; a location passes iff every active
/// predicate holds.
pub fn matches_filters(loc: &EnhancedLocation, filters: &ExploreFilters) -> bool {
    let raw = &loc.location;

    if !filters.query.trim().is_empty() {
        let q = filters.query.trim().to_lowercase();
        let hit = raw.name.to_lowercase().contains(&q)
            || raw.city.to_lowercase().contains(&q)
            || raw.prefecture.to_lowercase().contains(&q)
            || loc.tags.iter().any(|t| t.to_lowercase().contains(&q));
        if !hit {
            return false;
        }
    }

    if let Some(prefecture) = &filters.prefecture {
        if !raw.prefecture.eq_ignore_ascii_case(prefecture) {
            return false;
        }
    }

    if let Some(city) = &filters.city {
        if !raw.city.eq_ignore_ascii_case(city) {
            return false;
        }
    }

    if !filters.categories.is_empty()
        && !filters
            .categories
            .iter()
            .any(|c| raw.category.eq_ignore_ascii_case(c))
    {
        return false;
    }

    if !filters.subtypes.is_empty() {
        let Some(subtype) = &raw.subtype else {
            return false;
        };
        if !filters.subtypes.iter().any(|s| subtype.eq_ignore_ascii_case(s)) {
            return false;
        }
    }

    if let Some(level) = filters.price_level {
        if raw.price_level != Some(level) {
            return false;
        }
    }

    // Unparsed budgets/durations never match a set bucket.
    if let Some(bucket) = filters.budget {
        match loc.budget_yen {
            Some(yen) if bucket.contains(yen) => {}
            _ => return false,
        }
    }

    if let Some(bucket) = filters.duration {
        match loc.duration_minutes {
            Some(minutes) if bucket.contains(minutes) => {}
            _ => return false,
        }
    }

    if filters.wheelchair_accessible && !raw.wheelchair_accessible {
        return false;
    }

    if filters.vegetarian_friendly && !raw.vegetarian_friendly {
        return false;
    }

    if filters.open_now && (raw.permanently_closed || raw.open_now == Some(false)) {
        return false;
    }

    true
}

/// Explore view state: the enriched dataset plus filters, sort and page.
#[derive(Debug, Clone)]
pub struct ExploreState {
    locations: Vec<EnhancedLocation>,
    filters: ExploreFilters,
    sort: SortOrder,
    page: usize,
}

impl Default for ExploreState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ExploreState {
    pub fn new(raw: Vec<Location>) -> Self {
        Self {
            locations: enrich_all(&raw),
            filters: ExploreFilters::default(),
            sort: SortOrder::Relevance,
            page: 1,
        }
    }

    /// Replace the source list (fresh fetch or cache load) and re-enrich.
    /// The pipeline behaves identically either way.
    pub fn set_locations(&mut self, raw: Vec<Location>) {
        self.locations = enrich_all(&raw);
        self.page = 1;
    }

    pub fn filters(&self) -> &ExploreFilters {
        &self.filters
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Apply any filter mutation; the page counter resets in the same update.
    pub fn update_filters(&mut self, f: impl FnOnce(&mut ExploreFilters)) {
        f(&mut self.filters);
        self.page = 1;
    }

    pub fn set_query(&mut self, query: &str) {
        self.update_filters(|filters| filters.query = query.to_string());
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn load_more(&mut self) {
        self.page += 1;
    }

    /// Filtered + sorted view, before the page window.
    pub fn results(&self) -> Vec<&EnhancedLocation> {
        let mut results: Vec<&EnhancedLocation> = self
            .locations
            .iter()
            .filter(|loc| matches_filters(loc, &self.filters))
            .collect();

        match self.sort {
            SortOrder::Relevance => {}
            SortOrder::Popular => {
                results.sort_by(|a, b| {
                    b.rating
                        .partial_cmp(&a.rating)
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then_with(|| a.location.name.cmp(&b.location.name))
                });
            }
        }

        results
    }

    /// The visible slice: always `results[0 .. page * PAGE_SIZE]`.
    pub fn visible(&self) -> Vec<&EnhancedLocation> {
        let results = self.results();
        let end = (self.page() * PAGE_SIZE).min(results.len());
        results[..end].to_vec()
    }

    pub fn has_more(&self) -> bool {
        self.results().len() > self.page() * PAGE_SIZE
    }

    /// One chip per non-default filter field, each reversible on its own.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let f = &self.filters;
        let mut chips = Vec::new();

        if !f.query.trim().is_empty() {
            chips.push(chip(FilterType::Query, &f.query, &format!("\"{}\"", f.query.trim())));
        }
        if let Some(prefecture) = &f.prefecture {
            chips.push(chip(FilterType::Prefecture, prefecture, prefecture));
        }
        if let Some(city) = &f.city {
            chips.push(chip(FilterType::City, city, city));
        }
        for category in &f.categories {
            chips.push(chip(FilterType::Category, category, category));
        }
        for subtype in &f.subtypes {
            chips.push(chip(FilterType::Subtype, subtype, subtype));
        }
        if let Some(level) = f.price_level {
            chips.push(chip(
                FilterType::PriceLevel,
                &level.to_string(),
                &"¥".repeat(level.max(1) as usize),
            ));
        }
        if let Some(bucket) = f.budget {
            chips.push(chip(FilterType::Budget, bucket.as_str(), bucket.label()));
        }
        if let Some(bucket) = f.duration {
            chips.push(chip(FilterType::Duration, bucket.as_str(), bucket.label()));
        }
        if f.wheelchair_accessible {
            chips.push(chip(FilterType::Wheelchair, "true", "Wheelchair accessible"));
        }
        if f.vegetarian_friendly {
            chips.push(chip(FilterType::Vegetarian, "true", "Vegetarian friendly"));
        }
        if f.open_now {
            chips.push(chip(FilterType::OpenNow, "true", "Open now"));
        }

        chips
    }

    /// Reverse exactly the field a chip was derived from, leaving every
    /// other field alone.
    pub fn remove_filter(&mut self, active: &ActiveFilter) {
        self.update_filters(|f| match active.filter_type {
            FilterType::Query => f.query.clear(),
            FilterType::Prefecture => f.prefecture = None,
            FilterType::City => f.city = None,
            FilterType::Category => f.categories.retain(|c| c != &active.value),
            FilterType::Subtype => f.subtypes.retain(|s| s != &active.value),
            FilterType::PriceLevel => f.price_level = None,
            FilterType::Budget => f.budget = None,
            FilterType::Duration => f.duration = None,
            FilterType::Wheelchair => f.wheelchair_accessible = false,
            FilterType::Vegetarian => f.vegetarian_friendly = false,
            FilterType::OpenNow => f.open_now = false,
        });
    }

    /// Reset every filter field to its default at once.
    pub fn clear_filters(&mut self) {
        self.update_filters(|f| *f = ExploreFilters::default());
    }
}

fn chip(filter_type: FilterType, value: &str, label: &str) -> ActiveFilter {
    ActiveFilter {
        filter_type,
        value: value.to_string(),
        label: label.to_string(),
    }
}

impl BudgetBucket {
    /// Parse the chip value back into a bucket; the inverse of `as_str`.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "free" => Some(BudgetBucket::Free),
            "under_1000" => Some(BudgetBucket::Under1000),
            "between_1000_and_3000" => Some(BudgetBucket::Between1000And3000),
            "over_3000" => Some(BudgetBucket::Over3000),
            _ => None,
        }
    }
}

impl DurationBucket {
    /// Parse the chip value back into a bucket; the inverse of `as_str`.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "short" => Some(DurationBucket::Short),
            "medium" => Some(DurationBucket::Medium),
            "long" => Some(DurationBucket::Long),
            _ => None,
        }
    }
}
