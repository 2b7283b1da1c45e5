// Application layer - Page services and the analytics API seam
pub mod analytics_api;
pub mod costs_service;
pub mod overview_service;
pub mod reports_service;
pub mod trends_service;
pub mod venues_service;
