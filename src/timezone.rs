use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// Get the UTC offset of `canonical_timezone` (e.g. "Pacific/Auckland") at
/// the instant `date_time`.
///
/// Returns `None` if `canonical_timezone` is not a known timezone name.
pub fn get_offset_at(canonical_timezone: &str, date_time: &OffsetDateTime) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(date_time).to_utc())
}

/// Express the instant `date_time` as wall-clock time in `canonical_timezone`.
pub fn to_local_time(date_time: OffsetDateTime, canonical_timezone: &str) -> Option<OffsetDateTime> {
    get_offset_at(canonical_timezone, &date_time).map(|offset| date_time.to_offset(offset))
}

/// Interpret the wall-clock time `local` as a time in `canonical_timezone`.
///
/// The offset is looked up as if `local` were UTC, which only differs from
/// the exact answer within an hour of a daylight saving transition.
pub fn assume_local_time(
    local: PrimitiveDateTime,
    canonical_timezone: &str,
) -> Option<OffsetDateTime> {
    get_offset_at(canonical_timezone, &local.assume_utc()).map(|offset| local.assume_offset(offset))
}
