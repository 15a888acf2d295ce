mod store;

pub use store::LogStore;
