pub mod advisor;
pub mod api;
pub mod app;
pub mod config;
pub mod fetch_error;
pub mod fetcher;
pub mod forecast;
pub mod services;
pub mod storage;
