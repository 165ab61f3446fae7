//! Pure formatters turning raw provider counters into short display strings.
//!
//! These are total functions of their input; no locale handling, no I/O.

use chrono::{DateTime, Utc};

/// Format a raw view count into a short string: `1_500_000` becomes `"1.5M"`,
/// `500` stays `"500"`.
///
/// A trailing `.0` is dropped, so exactly one million renders as `"1M"`.
#[must_use]
pub fn format_views(views: u64) -> String {
    const THOUSAND: u64 = 1_000;
    const MILLION: u64 = 1_000_000;
    const BILLION: u64 = 1_000_000_000;

    let scaled = |n: u64, unit: u64, suffix: &str| {
        // One decimal of precision, truncated rather than rounded so counts
        // never overstate (1_999_999 is "1.9M", not "2M").
        let tenths = n / (unit / 10);
        if tenths % 10 == 0 {
            format!("{}{suffix}", tenths / 10)
        } else {
            format!("{}.{}{suffix}", tenths / 10, tenths % 10)
        }
    };

    if views >= BILLION {
        scaled(views, BILLION, "B")
    } else if views >= MILLION {
        scaled(views, MILLION, "M")
    } else if views >= THOUSAND {
        scaled(views, THOUSAND, "K")
    } else {
        views.to_string()
    }
}

/// Format a duration in whole seconds as `H:MM:SS`, or `M:SS` under an hour.
///
/// Zero (the default for an unknown duration) renders as `"00:00"`.
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    if seconds == 0 {
        return "00:00".to_string();
    }
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Render a past timestamp relative to `now`: `"3 days ago"`, `"1 month ago"`.
///
/// Timestamps in the future (clock skew between us and the provider) and
/// anything under a minute old collapse to `"Recently"`, which is also the
/// default when a provider omits the upload date entirely.
#[must_use]
pub fn format_relative_date(when: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(when).num_seconds();
    if elapsed < 60 {
        return "Recently".to_string();
    }

    let unit = |count: i64, name: &str| {
        if count == 1 {
            format!("1 {name} ago")
        } else {
            format!("{count} {name}s ago")
        }
    };

    let minutes = elapsed / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    if days >= 365 {
        unit(days / 365, "year")
    } else if days >= 30 {
        unit(days / 30, "month")
    } else if days >= 7 {
        unit(days / 7, "week")
    } else if days >= 1 {
        unit(days, "day")
    } else if hours >= 1 {
        unit(hours, "hour")
    } else {
        unit(minutes, "minute")
    }
}

/// [`format_relative_date`] against the current wall clock.
#[must_use]
pub fn format_relative_date_now(when: DateTime<Utc>) -> String {
    format_relative_date(when, Utc::now())
}

/// Format a unix timestamp in seconds relative to the current wall clock.
///
/// Non-positive timestamps are treated as unknown and render `"Recently"`.
#[must_use]
pub fn format_timestamp_secs(secs: i64) -> String {
    if secs <= 0 {
        return "Recently".to_string();
    }
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map_or_else(|| "Recently".to_string(), format_relative_date_now)
}
