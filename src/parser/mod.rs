mod parser;

pub use parser::{format_record, parse_record_line, SEPARATOR, TIMESTAMP_FORMAT};
