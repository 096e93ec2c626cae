pub mod airport;
pub mod filters;
pub mod location;
pub mod region;
pub mod trip;
pub mod vibe;
