pub mod error_mapper;
pub mod interactive;
pub mod text;
