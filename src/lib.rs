pub mod config;
pub mod db;
pub mod pages;
pub mod server;
pub mod traits;
pub mod types;
