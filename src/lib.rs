//! HTTP gateway turning datum time-range queries into search backend
//! requests and normalizing the responses into flat time-series records.

pub mod api;
pub mod app_state;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod routes;
