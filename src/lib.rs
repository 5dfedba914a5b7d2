pub mod api; // History API router
pub mod config;
pub mod history; // Activity aggregation + timeline engine
pub mod models;
pub mod sources; // Upstream record service adapters
