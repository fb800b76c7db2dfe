use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use super::{ExtensionValue, StandardExtension};
use crate::deprecation::{self, Deprecation};
use crate::time::AsUtc;

/*
RFC 5280 Section 5.3.2

id-ce-invalidityDate OBJECT IDENTIFIER ::= { id-ce 24 }

InvalidityDate ::=  GeneralizedTime
*/

/// InvalidityDate extension
/// OID: 2.5.29.24
///
/// The date on which the key is known or suspected to have been
/// compromised. Stored in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct InvalidityDate {
    invalidity_date: DateTime<Utc>,
}

impl InvalidityDate {
    pub fn new(value: impl AsUtc) -> Self {
        Self {
            invalidity_date: value.as_utc(),
        }
    }

    pub fn invalidity_date_utc(&self) -> DateTime<Utc> {
        self.invalidity_date
    }

    /// The invalidity date as a naive UTC datetime.
    #[deprecated(since = "0.1.0", note = "use `invalidity_date_utc` instead")]
    pub fn invalidity_date(&self) -> NaiveDateTime {
        deprecation::emit(Deprecation {
            item: "InvalidityDate::invalidity_date",
            replacement: "InvalidityDate::invalidity_date_utc",
            since: "0.1.0",
        });
        self.invalidity_date.naive_utc()
    }
}

impl StandardExtension for InvalidityDate {
    const OID: &'static str = "2.5.29.24";
    const NAME: &'static str = "invalidityDate";

    fn from_value(value: &ExtensionValue) -> Option<&Self> {
        match value {
            ExtensionValue::InvalidityDate(date) => Some(date),
            _ => None,
        }
    }
}

impl From<InvalidityDate> for ExtensionValue {
    fn from(value: InvalidityDate) -> Self {
        ExtensionValue::InvalidityDate(value)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use chrono::{FixedOffset, NaiveDate, TimeZone};

    #[test]
    fn test_aware_input_is_normalized() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let local = NaiveDate::from_ymd_opt(2015, 1, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();
        let date = InvalidityDate::new(tz.from_local_datetime(&local).unwrap());
        assert_eq!(
            date.invalidity_date_utc().naive_utc(),
            NaiveDate::from_ymd_opt(2015, 1, 2)
                .unwrap()
                .and_hms_opt(1, 0, 0)
                .unwrap()
        );
    }

    #[test]
    #[allow(deprecated)]
    fn test_naive_accessor_emits_deprecation() {
        let value = NaiveDate::from_ymd_opt(2015, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let date = InvalidityDate::new(value);

        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let naive = deprecation::with_hook(
            move |_: &Deprecation| counter.set(counter.get() + 1),
            || date.invalidity_date(),
        );
        assert_eq!(naive, value);
        assert_eq!(count.get(), 1);
    }
}
