pub mod checkin;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod store;

pub use error::{Error, Result};
