pub mod app;
pub mod config;
pub mod consts;
pub mod errors;
pub mod extract;
pub mod handlers;
pub mod llm_client;
pub mod models;
pub mod persistence;
pub mod prompt;
pub mod service;
pub mod validation;
