pub mod app_config;
pub mod baseten_config;
