//! UTC normalization for builder timestamps
//!
//! Builders accept naive datetimes (read as UTC) and zone-aware
//! datetimes (converted to UTC). The result must not precede
//! 1950-01-01T00:00:00Z, the first instant UTCTime can express.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::error::{Error, Result};

/// 1950-01-01T00:00:00Z as seconds since the Unix epoch.
const EARLIEST_TIMESTAMP: i64 = -631_152_000;

/// Datetime inputs accepted by the builders.
pub trait AsUtc {
    fn as_utc(&self) -> DateTime<Utc>;
}

impl AsUtc for NaiveDateTime {
    fn as_utc(&self) -> DateTime<Utc> {
        self.and_utc()
    }
}

impl<Tz: TimeZone> AsUtc for DateTime<Tz> {
    fn as_utc(&self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}

/// Earliest instant a builder accepts.
pub fn earliest() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(EARLIEST_TIMESTAMP, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Normalize `value` to UTC and reject instants before 1950.
pub(crate) fn normalize<T: AsUtc + ?Sized>(field: &'static str, value: &T) -> Result<DateTime<Utc>> {
    let utc = value.as_utc();
    if utc.timestamp() < EARLIEST_TIMESTAMP {
        return Err(Error::TimeBefore1950 { field, value: utc });
    }
    Ok(utc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};
    use rstest::rstest;

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_earliest_is_1950() {
        assert_eq!(earliest().naive_utc(), naive(1950, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_naive_is_read_as_utc() {
        let value = naive(2002, 1, 1, 12, 1, 0);
        let utc = normalize("revocation date", &value).unwrap();
        assert_eq!(utc.naive_utc(), value);
    }

    #[rstest]
    #[case::west(-8, naive(2012, 1, 16, 22, 43, 0), naive(2012, 1, 17, 6, 43, 0))]
    #[case::east(9, naive(2012, 1, 17, 15, 43, 0), naive(2012, 1, 17, 6, 43, 0))]
    #[case::zero(0, naive(2012, 1, 17, 6, 43, 0), naive(2012, 1, 17, 6, 43, 0))]
    fn test_aware_is_converted(
        #[case] offset_hours: i32,
        #[case] local: NaiveDateTime,
        #[case] expected: NaiveDateTime,
    ) {
        let tz = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        let value = tz.from_local_datetime(&local).unwrap();
        let utc = normalize("revocation date", &value).unwrap();
        assert_eq!(utc.naive_utc(), expected);
    }

    #[rstest]
    #[case::long_before(naive(1940, 8, 10, 0, 0, 0))]
    #[case::one_second_before(naive(1949, 12, 31, 23, 59, 59))]
    fn test_rejects_before_1950(#[case] value: NaiveDateTime) {
        let err = normalize("revocation date", &value).unwrap_err();
        assert!(matches!(err, Error::TimeBefore1950 { .. }), "{err:?}");
    }

    #[test]
    fn test_sub_second_before_1950_is_rejected() {
        let value = naive(1949, 12, 31, 23, 59, 59) + chrono::Duration::milliseconds(500);
        assert!(normalize("revocation date", &value).is_err());
    }

    #[test]
    fn test_accepts_exactly_1950() {
        let value = naive(1950, 1, 1, 0, 0, 0);
        assert!(normalize("revocation date", &value).is_ok());
    }

    #[test]
    fn test_offset_can_cross_the_1950_boundary() {
        // 1950-01-01T01:00+02:00 is 1949-12-31T23:00Z
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let value = tz
            .from_local_datetime(&naive(1950, 1, 1, 1, 0, 0))
            .unwrap();
        assert!(normalize("revocation date", &value).is_err());
    }
}
