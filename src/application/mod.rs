// Application layer - Use cases and ports
pub mod chart_pipeline;
pub mod loading;
pub mod power_repository;
pub mod power_service;
pub mod station_service;
