// Infrastructure layer - Configuration and the mock backend adapter
pub mod config;
pub mod mock_api;
