pub mod providers;
pub mod resolver;
