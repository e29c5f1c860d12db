pub mod config;
pub mod repo;
pub mod search;
pub mod serve;
pub mod user;
