mod record;

pub use record::VisitorRecord;
