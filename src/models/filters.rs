use serde::{Deserialize, Serialize};

/// Filter state for the explore surface. Every field is optional; an unset
/// field's predicate is vacuously true, so the default value matches every
/// location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExploreFilters {
    /// Free-text query, matched case-insensitively against name, city,
    /// prefecture and derived tags.
    #[serde(default)]
    pub query: String,
    pub prefecture: Option<String>,
    pub city: Option<String>,
    /// Category membership (any-of when non-empty).
    #[serde(default)]
    pub categories: Vec<String>,
    /// Subtype membership (any-of when non-empty).
    #[serde(default)]
    pub subtypes: Vec<String>,
    /// Exact price-level match (0-4, Places-style).
    pub price_level: Option<u8>,
    pub budget: Option<BudgetBucket>,
    pub duration: Option<DurationBucket>,
    #[serde(default)]
    pub wheelchair_accessible: bool,
    /// Only meaningful alongside a food category, but honored whenever set.
    #[serde(default)]
    pub vegetarian_friendly: bool,
    #[serde(default)]
    pub open_now: bool,
}

impl ExploreFilters {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Budget buckets in yen. Unparsed budgets (`None`) never match a set bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetBucket {
    Free,
    Under1000,
    Between1000And3000,
    Over3000,
}

impl BudgetBucket {
    pub fn contains(&self, budget_yen: u32) -> bool {
        match self {
            BudgetBucket::Free => budget_yen == 0,
            BudgetBucket::Under1000 => budget_yen < 1000,
            BudgetBucket::Between1000And3000 => (1000..=3000).contains(&budget_yen),
            BudgetBucket::Over3000 => budget_yen > 3000,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetBucket::Free => "Free",
            BudgetBucket::Under1000 => "Under ¥1,000",
            BudgetBucket::Between1000And3000 => "¥1,000–¥3,000",
            BudgetBucket::Over3000 => "Over ¥3,000",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetBucket::Free => "free",
            BudgetBucket::Under1000 => "under_1000",
            BudgetBucket::Between1000And3000 => "between_1000_and_3000",
            BudgetBucket::Over3000 => "over_3000",
        }
    }
}

/// Visit-duration buckets in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationBucket {
    /// Under an hour.
    Short,
    /// One to three hours.
    Medium,
    /// Over three hours.
    Long,
}

impl DurationBucket {
    pub fn contains(&self, minutes: u32) -> bool {
        match self {
            DurationBucket::Short => minutes < 60,
            DurationBucket::Medium => (60..=180).contains(&minutes),
            DurationBucket::Long => minutes > 180,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DurationBucket::Short => "Under 1 hour",
            DurationBucket::Medium => "1–3 hours",
            DurationBucket::Long => "Over 3 hours",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationBucket::Short => "short",
            DurationBucket::Medium => "medium",
            DurationBucket::Long => "long",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Source order, untouched.
    #[default]
    Relevance,
    /// Rating descending, name ascending on ties.
    Popular,
}

/// One removable filter chip shown above the explore grid. Carries enough
/// information (`filter_type` + `value`) to reverse exactly the field it was
/// derived from and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilter {
    pub filter_type: FilterType,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    Query,
    Prefecture,
    City,
    Category,
    Subtype,
    PriceLevel,
    Budget,
    Duration,
    Wheelchair,
    Vegetarian,
    OpenNow,
}
