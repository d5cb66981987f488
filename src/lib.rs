pub mod app;
pub mod config;
pub mod consts;
pub mod errors;
pub mod handlers;
pub mod llm_client;
pub mod llm_request;
pub mod models;
pub mod page;
pub mod prompts;
pub mod service;

#[cfg(test)]
mod test_utils;
