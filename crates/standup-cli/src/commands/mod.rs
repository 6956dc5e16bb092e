pub mod common;
pub mod config;
pub mod history;
pub mod import;
pub mod pick;
pub mod submit;
