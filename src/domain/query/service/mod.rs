//! Datum query orchestration and response normalization

pub mod datum_query_service;
pub mod query_render_service;
pub mod record_mapper;
