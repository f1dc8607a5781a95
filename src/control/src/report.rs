use time::{macros::format_description, Duration, OffsetDateTime};

use crate::state::{Notification, Temperature};

pub static SUBJECT: &str = "frost protection";

pub fn format_timestamp(at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    // Formatting a full date and time with this description cannot fail
    at.format(&format).unwrap_or_else(|_| at.to_string())
}

// Whole hours plus remaining minutes, rounded to the nearest minute
pub fn format_duration(elapsed: Duration) -> String {
    let seconds = elapsed.whole_seconds().max(0);
    let minutes = (seconds + 30) / 60;

    let hours = minutes / 60;
    let remainder = minutes - hours * 60;

    format!("{}h{}m", hours, remainder)
}

pub fn activated(at: OffsetDateTime) -> Notification {
    Notification {
        subject: SUBJECT.to_string(),
        body: format!("Turning on {}", format_timestamp(at)),
    }
}

pub fn deactivated(
    at: OffsetDateTime,
    start: OffsetDateTime,
    min_temperature: Temperature,
) -> Notification {
    let body = [
        format!("Turning off {}", format_timestamp(at)),
        format!("duration: {}", format_duration(at - start)),
        format!("min temp: {}", min_temperature),
    ]
    .join("\n");

    Notification {
        subject: SUBJECT.to_string(),
        body,
    }
}
