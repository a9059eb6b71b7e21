pub mod config;
pub mod dom;
