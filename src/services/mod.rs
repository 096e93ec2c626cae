pub mod auto_select;
pub mod cache;
pub mod debounce;
pub mod enrichment;
pub mod explore;
pub mod region_scoring;
pub mod sources;
pub mod trip_state;
