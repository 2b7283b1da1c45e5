// Domain layer - Filters, analytics payloads, page state, view atoms
pub mod analytics;
pub mod filters;
pub mod store;
pub mod view;
