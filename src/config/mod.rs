mod config;

pub use config::{Config, CONFIG};
