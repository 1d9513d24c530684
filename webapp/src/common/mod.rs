pub mod context;
pub mod storage;
pub mod style;

use chrono::{DateTime, Local, Utc};

pub fn local_date(at: Option<DateTime<Utc>>) -> String {
    match at {
        Some(at) => at.with_timezone(&Local).format("%b %e, %Y").to_string(),
        None => String::from("unknown date"),
    }
}
