//! Property-based tests for index-name date extraction.
//!
//! # Invariants
//! - Any valid calendar date appended as `YYYY.MM.DD` is extracted exactly
//! - Names that do not end in three numeric groups never yield a date

use chrono::{Datelike, NaiveDate, Timelike};
use es_client::{IndexDateError, date_from_index_name};
use proptest::prelude::*;

fn valid_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1000i32..=9999, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn prefix_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,12}-",
        "[a-z]{1,8}-[0-9]\\.[0-9]\\.[0-9]-",
        "[a-z]{1,8}-[0-9]\\.[0-9]\\.[0-9]\\.",
    ]
}

proptest! {
    #[test]
    fn prop_trailing_date_is_extracted(prefix in prefix_strategy(), date in valid_date_strategy()) {
        let name = format!("{}{}", prefix, date.format("%Y.%m.%d"));
        let extracted = date_from_index_name(&name).unwrap();

        prop_assert_eq!(extracted.date_naive(), date);
        prop_assert_eq!(extracted.hour(), 0);
        prop_assert_eq!(extracted.minute(), 0);
        prop_assert_eq!(extracted.second(), 0);
        prop_assert_eq!(extracted.year(), date.year());
    }

    #[test]
    fn prop_names_without_trailing_digits_have_no_date(name in "[a-z.\\-_]{0,24}[a-z_\\-]") {
        let result = date_from_index_name(&name);
        prop_assert_eq!(result, Err(IndexDateError::DateNotFound { name: name.clone() }));
    }

    #[test]
    fn prop_out_of_range_month_is_parse_error(year in 1000i32..=9999, month in 13u32..=99, day in 1u32..=28) {
        let name = format!("logs-{year:04}.{month:02}.{day:02}");
        let is_parse_error = matches!(
            date_from_index_name(&name),
            Err(IndexDateError::DateParse { .. })
        );
        prop_assert!(is_parse_error);
    }
}
