pub mod datum_query;
pub mod datum_record;
pub mod query_mode;
pub mod query_template;
