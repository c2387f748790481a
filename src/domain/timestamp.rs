use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Current UTC time as `2025-01-31T12:00:00.000Z`.
pub fn now_iso8601() -> String {
	format_iso8601(OffsetDateTime::now_utc())
}

pub fn format_iso8601(at: OffsetDateTime) -> String {
	let format = format_description!(
		"[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
	);
	at.to_offset(UtcOffset::UTC)
		.format(format)
		.unwrap_or_else(|_| at.unix_timestamp().to_string())
}

pub fn now_unix_millis() -> i128 {
	OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
}
