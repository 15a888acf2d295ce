mod checkin;

pub use checkin::{validate_name, CheckIn};
