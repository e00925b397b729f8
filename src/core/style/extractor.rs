use std::ops::RangeInclusive;
use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;

use super::category::Category;

// Digit runs are matched greedily and length-checked afterwards; the regex
// crate has no lookaround, and `123:45` must not yield `23:45`.
static COUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9０-９]+)\s*件").expect("valid count regex"));
static KANJI_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9０-９]+)時([0-9０-９]+)分").expect("valid time regex")
});
static CLOCK_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9０-９]+)[:：]([0-9０-９]+)").expect("valid clock regex")
});
static DATA_VOLUME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9０-９]+(?:[.．][0-9０-９]+)?)\s*(TB|GB|MB|KB|バイト|件|個|B)")
        .expect("valid volume regex")
});

/// Pull a bracketed side annotation out of `text`, gated by `category`.
///
/// Only the first match of a pattern class is used. Full-width digits are
/// accepted and always rendered as ASCII.
pub fn extract_annotation(text: &str, category: Category) -> Option<String> {
    let annotation = match category {
        Category::Acknowledgment | Category::Report => extract_count(text),
        Category::Understanding => extract_time(text),
        Category::Analysis => extract_data_volume(text),
        _ => None,
    };
    if let Some(found) = &annotation {
        tracing::debug!(%category, annotation = %found, "extracted side annotation");
    }
    annotation
}

fn extract_count(text: &str) -> Option<String> {
    let caps = COUNT_PATTERN.captures(text)?;
    Some(format!("【現在{}件】", to_ascii_digits(&caps[1])))
}

fn extract_time(text: &str) -> Option<String> {
    let time = first_valid_time(&KANJI_TIME_PATTERN, text, 1..=2)
        .or_else(|| first_valid_time(&CLOCK_TIME_PATTERN, text, 2..=2))?;
    Some(format!("【時刻{}:{:02}】", time.hour(), time.minute()))
}

/// First capture in `text` that is a real clock time. `25時70分` is skipped,
/// as is any hour run longer than two digits or a minute run outside
/// `minute_digits`.
fn first_valid_time(
    pattern: &Regex,
    text: &str,
    minute_digits: RangeInclusive<usize>,
) -> Option<NaiveTime> {
    pattern.captures_iter(text).find_map(|caps| {
        let hour = to_ascii_digits(&caps[1]);
        let minute = to_ascii_digits(&caps[2]);
        if !(1..=2).contains(&hour.len()) || !minute_digits.contains(&minute.len()) {
            return None;
        }
        NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
    })
}

fn extract_data_volume(text: &str) -> Option<String> {
    let caps = DATA_VOLUME_PATTERN.captures(text)?;
    let unit = &caps[2];
    let unit = if unit.is_ascii() {
        unit.to_ascii_uppercase()
    } else {
        unit.to_string()
    };
    Some(format!("【データ量{}{unit}】", to_ascii_digits(&caps[1])))
}

/// Fold full-width digits and the full-width period to ASCII.
fn to_ascii_digits(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '０'..='９' => char::from_digit(u32::from(c) - u32::from('０'), 10).unwrap_or(c),
            '．' => '.',
            _ => c,
        })
        .collect()
}
