//! Display formatting for raw provider fields.
//!
//! Every function here is total: malformed input degrades to a neutral
//! rendering (`0 views`, `just now`, `0:00`) instead of failing.

use std::sync::LazyLock;

use jiff::Timestamp;
use regex::Regex;

/// A non-negative count as reported by the provider.
///
/// The YouTube API reports statistics as decimal strings, while the sample
/// catalog and callers usually hold plain integers, so both convert into this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Count(pub u64);

impl From<u64> for Count {
    fn from(n: u64) -> Self {
        Count(n)
    }
}

impl From<u32> for Count {
    fn from(n: u32) -> Self {
        Count(u64::from(n))
    }
}

impl From<i64> for Count {
    fn from(n: i64) -> Self {
        Count(u64::try_from(n).unwrap_or(0))
    }
}

impl From<&str> for Count {
    fn from(raw: &str) -> Self {
        Count(parse_count(raw))
    }
}

impl From<String> for Count {
    fn from(raw: String) -> Self {
        Count(parse_count(&raw))
    }
}

impl From<&String> for Count {
    fn from(raw: &String) -> Self {
        Count(parse_count(raw))
    }
}

/// Read the leading integer of `raw`, ignoring anything after it.
///
/// Leading whitespace and a `+` sign are skipped. Negative values and input
/// without leading digits read as zero; values too large for `u64` saturate.
pub fn parse_count(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('-') {
        return 0;
    }
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(u64::MAX)
    }
}

/// Render `n / divisor` with one decimal place, rounding half up.
fn one_decimal(n: u128, divisor: u128) -> String {
    let tenths = (n * 10 + divisor / 2) / divisor;
    format!("{}.{}", tenths / 10, tenths % 10)
}

fn format_scaled(count: Count, noun: &str) -> String {
    let n = u128::from(count.0);
    if n >= 1_000_000 {
        format!("{}M {}", one_decimal(n, 1_000_000), noun)
    } else if n >= 1_000 {
        format!("{}K {}", one_decimal(n, 1_000), noun)
    } else {
        format!("{} {}", n, noun)
    }
}

/// Format a view count, e.g. `999 views`, `1.5K views`, `2.3M views`.
pub fn format_views(views: impl Into<Count>) -> String {
    format_scaled(views.into(), "views")
}

/// Format a subscriber count, e.g. `12.0K subscribers`.
pub fn format_subscribers(subscribers: impl Into<Count>) -> String {
    format_scaled(subscribers.into(), "subscribers")
}

/// Approximate calendar units, largest first. A month is always 30 days.
const TIME_UNITS: [(&str, i64); 6] = [
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("week", 604_800),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
];

/// Describe how long ago the RFC 3339 timestamp `published_at` was, relative
/// to the current time. Unparseable input is `just now`.
pub fn format_time_ago(published_at: &str) -> String {
    match published_at.parse::<Timestamp>() {
        Ok(then) => format_time_ago_at(then, Timestamp::now()),
        Err(_) => "just now".to_string(),
    }
}

/// Describe how long before `now` the instant `then` was.
///
/// Picks the largest unit that fits at least once, e.g. `3 weeks ago`.
/// Anything under a minute, or in the future, is `just now`.
pub fn format_time_ago_at(then: Timestamp, now: Timestamp) -> String {
    let seconds = now.duration_since(then).as_secs();

    for (unit, unit_seconds) in TIME_UNITS {
        let count = seconds / unit_seconds;
        if count >= 1 {
            let plural = if count > 1 { "s" } else { "" };
            return format!("{} {}{} ago", count, unit, plural);
        }
    }

    "just now".to_string()
}

static ISO_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("duration pattern is valid")
});

/// Format an ISO 8601 duration such as `PT1H2M3S` as `1:02:03`.
///
/// Only hour, minute and second components are understood. Input that does not
/// contain a `PT` designator renders as `0:00`.
pub fn format_duration(token: &str) -> String {
    let Some(caps) = ISO_DURATION.captures(token) else {
        return "0:00".to_string();
    };

    let component = |index: usize| {
        caps.get(index)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };
    let hours = component(1);
    let minutes = component(2);
    let seconds = component(3);

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
