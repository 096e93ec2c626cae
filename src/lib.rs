//! Planning core for a Japan trip-builder front end.
//!
//! Two pipelines over client-held data: the region recommendation engine
//! (vibe scoring, default city selection, trip state update rules) and the
//! explore filter/sort/page pipeline over fetched location lists. Map and
//! card rendering, routing and the CMS live elsewhere; this crate owns the
//! decision logic they render.

pub mod catalog;
pub mod models;
pub mod services;

pub use catalog::{Catalog, CityMatch};
pub use models::airport::{Airport, EntryPoint};
pub use models::filters::{ActiveFilter, BudgetBucket, DurationBucket, ExploreFilters, SortOrder};
pub use models::location::{EnhancedLocation, Location, LocationDetails};
pub use models::region::{City, Region};
pub use models::trip::TripBuilderData;
pub use models::vibe::Vibe;
pub use services::explore::{ExploreState, PAGE_SIZE};
pub use services::region_scoring::{RegionScorer, ScoredRegion, ScoringWeights};
