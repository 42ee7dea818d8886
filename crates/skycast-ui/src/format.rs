//! Display formatting for weather values, matching what the screens show:
//! rounded whole numbers and 12-hour clock times.

use chrono::{NaiveDate, NaiveDateTime};

/// "25°"
pub fn temperature(value: f64) -> String {
    format!("{}°", value.round() as i64)
}

/// "2 PM"
pub fn hour(time: NaiveDateTime) -> String {
    time.format("%-I %p").to_string()
}

/// "1013 hpa"
pub fn pressure(value: f64) -> String {
    format!("{} hpa", value.round() as i64)
}

/// "32 %"
pub fn humidity(value: f64) -> String {
    format!("{} %", value.round() as i64)
}

/// "12 km/h"
pub fn wind(value: f64) -> String {
    format!("{} km/h", value.round() as i64)
}

/// "Today", "Tomorrow", then weekday names
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if Some(date) == today.succ_opt() {
        "Tomorrow".to_string()
    } else {
        date.format("%A").to_string()
    }
}
