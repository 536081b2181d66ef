pub mod query_dto;
