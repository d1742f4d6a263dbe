pub mod config;
pub mod input;
pub mod render;
pub mod summary;
