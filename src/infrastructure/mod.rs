// Infrastructure layer - Configuration loading
pub mod config;
