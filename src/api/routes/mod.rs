//! API route declarations

pub mod query_routes;
