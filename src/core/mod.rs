//! Configuration, data model and message formatting shared by every entry point

pub mod config;
pub mod message;
pub mod models;
