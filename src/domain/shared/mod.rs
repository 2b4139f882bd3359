pub mod error_dto;
