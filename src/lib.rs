pub mod config;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod prompt;
pub mod services;
pub mod startup;
