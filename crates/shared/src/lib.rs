pub mod advice;
pub mod clock;
pub mod config;
mod config_env;
pub mod models;
pub mod service;
pub mod session_memo;
pub mod timezone;
pub mod validation;
