//! File-backed storage (search templates)

pub mod template;
