// Search backend client and its response shapes
pub mod search_client;
pub mod search_response_dto;
