//! Display helpers shared by the pages.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Format accepted and produced by `<input type="datetime-local">`.
pub const DATETIME_LOCAL_FMT: &str = "%Y-%m-%dT%H:%M";

/// "Jan 2, 2006" in the viewer's time zone.
pub fn format_date(dt: DateTime<Utc>) -> String {
    format_date_in(dt, &Local)
}

pub fn format_date_in<Tz: TimeZone>(dt: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.with_timezone(tz).format("%b %-d, %Y").to_string()
}

/// "Jan 2, 2006, 3:04 PM" in the viewer's time zone.
pub fn format_date_time(dt: DateTime<Utc>) -> String {
    format_date_time_in(dt, &Local)
}

pub fn format_date_time_in<Tz: TimeZone>(dt: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.with_timezone(tz).format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// Relative age such as "5 minutes ago"; a month or older shows the date.
pub fn time_ago(dt: DateTime<Utc>) -> String {
    time_ago_from(dt, Utc::now())
}

pub fn time_ago_from(dt: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - dt).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = hours / 24;
    if days < 30 {
        return plural(days, "day");
    }

    format_date(dt)
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// Cuts `text` to at most `max` characters, appending "..." when cut.
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let mut out: String = text.chars().take(max).collect();
    out.truncate(out.trim_end().len());
    out.push_str("...");
    out
}

/// Plain text of an HTML fragment: tags dropped, common entities decoded,
/// whitespace collapsed.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    // open attribute quote inside a tag; `>` does not close the tag there
    let mut quote: Option<char> = None;

    for c in html.chars() {
        if !in_tag {
            match c {
                '<' => in_tag = true,
                _ => text.push(c),
            }
            continue;
        }

        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => {
                in_tag = false;
                text.push(' ');
            }
            _ => {}
        }
    }

    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Value for a `datetime-local` input showing `dt` in `tz`.
pub fn to_datetime_local_in<Tz: TimeZone>(dt: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.with_timezone(tz).format(DATETIME_LOCAL_FMT).to_string()
}

/// Parses a `datetime-local` value; `None` for blank or malformed input.
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(value, DATETIME_LOCAL_FMT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_format_date_in_utc() {
        assert_eq!(format_date_in(at("2024-03-05T18:30:00Z"), &Utc), "Mar 5, 2024");
    }

    #[test]
    fn test_format_date_time_in_utc() {
        assert_eq!(
            format_date_time_in(at("2024-03-05T18:07:00Z"), &Utc),
            "Mar 5, 2024, 6:07 PM"
        );
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = at("2024-03-05T12:00:00Z");
        assert_eq!(time_ago_from(now - Duration::seconds(10), now), "just now");
        assert_eq!(time_ago_from(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(time_ago_from(now - Duration::minutes(45), now), "45 minutes ago");
        assert_eq!(time_ago_from(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(time_ago_from(now - Duration::days(1), now), "1 day ago");
    }

    #[test]
    fn test_time_ago_future_is_just_now() {
        let now = at("2024-03-05T12:00:00Z");
        assert_eq!(time_ago_from(now + Duration::hours(2), now), "just now");
    }

    #[test]
    fn test_strip_html_ignores_gt_inside_quoted_attributes() {
        assert_eq!(strip_html(r#"<a title="x>y">Link</a>"#), "Link");
        assert_eq!(strip_html("<img alt='a > b' src=\"/c.png\">after"), "after");
    }

    #[test]
    fn test_time_ago_old_dates_match_format_date() {
        let now = at("2024-03-05T12:00:00Z");
        let old = now - Duration::days(45);
        assert_eq!(time_ago_from(old, now), format_date(old));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("hello world again", 11), "hello world...");
        assert_eq!(truncate_text("hello world", 6), "hello...");
    }

    #[test]
    fn test_truncate_text_counts_chars_not_bytes() {
        assert_eq!(truncate_text("नमस्ते दुनिया", 3), "नमस...");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(
            strip_html("<p>Hello&nbsp;<strong>world</strong></p><p>Tom &amp; Jerry</p>"),
            "Hello world Tom & Jerry"
        );
    }

    #[test]
    fn test_datetime_local_round_trip_in_fixed_offset() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let value = to_datetime_local_in(at("2024-03-05T18:30:00Z"), &ist);
        assert_eq!(value, "2024-03-06T00:00");
        assert!(parse_datetime_local(&value).is_some());
    }

    #[test]
    fn test_parse_datetime_local_rejects_blank_and_garbage() {
        assert!(parse_datetime_local("  ").is_none());
        assert!(parse_datetime_local("next tuesday").is_none());
        assert!(parse_datetime_local("tomorrow").is_none());
    }
}
