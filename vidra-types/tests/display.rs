use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use vidra_types::display::{
    format_duration, format_relative_date, format_timestamp_secs, format_views,
};

#[test]
fn views_known_values() {
    assert_eq!(format_views(1_500_000), "1.5M");
    assert_eq!(format_views(500), "500");
    assert_eq!(format_views(0), "0");
}

#[test]
fn views_scale_boundaries() {
    assert_eq!(format_views(999), "999");
    assert_eq!(format_views(1_000), "1K");
    assert_eq!(format_views(23_400), "23.4K");
    assert_eq!(format_views(1_000_000), "1M");
    assert_eq!(format_views(1_999_999), "1.9M");
    assert_eq!(format_views(2_100_000_000), "2.1B");
}

#[test]
fn duration_known_values() {
    assert_eq!(format_duration(3661), "1:01:01");
    assert_eq!(format_duration(90), "1:30");
    assert_eq!(format_duration(0), "00:00");
}

#[test]
fn duration_edges() {
    assert_eq!(format_duration(59), "0:59");
    assert_eq!(format_duration(3600), "1:00:00");
    assert_eq!(format_duration(36_000), "10:00:00");
}

#[test]
fn relative_date_units() {
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    assert_eq!(format_relative_date(now - Duration::seconds(30), now), "Recently");
    assert_eq!(format_relative_date(now - Duration::minutes(5), now), "5 minutes ago");
    assert_eq!(format_relative_date(now - Duration::hours(1), now), "1 hour ago");
    assert_eq!(format_relative_date(now - Duration::days(3), now), "3 days ago");
    assert_eq!(format_relative_date(now - Duration::days(10), now), "1 week ago");
    assert_eq!(format_relative_date(now - Duration::days(70), now), "2 months ago");
    assert_eq!(format_relative_date(now - Duration::days(800), now), "2 years ago");
    // Provider clock ahead of ours.
    assert_eq!(format_relative_date(now + Duration::hours(2), now), "Recently");
}

#[test]
fn timestamp_zero_is_unknown() {
    assert_eq!(format_timestamp_secs(0), "Recently");
    assert_eq!(format_timestamp_secs(-5), "Recently");
}

proptest! {
    #[test]
    fn views_never_empty_and_ascii(v in any::<u64>()) {
        let s = format_views(v);
        prop_assert!(!s.is_empty());
        prop_assert!(s.is_ascii());
    }

    #[test]
    fn views_under_thousand_are_verbatim(v in 0u64..1000) {
        prop_assert_eq!(format_views(v), v.to_string());
    }

    #[test]
    fn duration_is_pure_and_well_formed(secs in 0u64..1_000_000) {
        let a = format_duration(secs);
        let b = format_duration(secs);
        prop_assert_eq!(&a, &b);
        let parts: Vec<&str> = a.split(':').collect();
        prop_assert!(parts.len() == 2 || parts.len() == 3);
        // Every segment after the first is zero-padded to two digits.
        for p in &parts[1..] {
            prop_assert_eq!(p.len(), 2);
        }
    }
}
