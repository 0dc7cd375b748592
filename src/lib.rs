pub mod cli;
pub mod clients;
pub mod config;
pub mod form;
pub mod models;
pub mod page;
pub mod prompt;
pub mod render;
pub mod utils;
