//! Value formatting shared by chart tooltips, card values, and table cells.
//!
//! - `format_value` maps a raw scalar plus an optional semantic type to display text
//! - Locale-aware digit grouping (`30,000.00` vs `30.000,00`) through `num_format`
//! - Dates render in UTC so output does not depend on the host time zone
//! - Numeric parsing mirrors the lenient prefix rules the tearsheet producers rely on

use crate::models::{Scalar, SemanticType};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use num_format::{Locale, ToFormattedString};
use regex::Regex;
use std::sync::LazyLock;

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("valid regex")
});

static INT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+").expect("valid regex"));

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().replace('-', "_").as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en, // default
    }
}

/// Display settings for formatted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    locale: &'static Locale,
}

impl Default for Formatter {
    fn default() -> Self {
        Self { locale: &Locale::en }
    }
}

impl Formatter {
    /// Formatter for a locale tag such as `"en"` or `"de"`.
    pub fn new(locale_tag: &str) -> Self {
        Self {
            locale: map_locale(locale_tag),
        }
    }

    pub fn locale(&self) -> &'static Locale {
        self.locale
    }

    /// Format `value` according to its semantic type.
    ///
    /// `None` and `Scalar::Null` always yield an empty string, and booleans render as
    /// `Yes`/`No` whatever the type. Values a type cannot interpret fall back to
    /// their plain string form.
    pub fn format(&self, value: Option<&Scalar>, ty: Option<SemanticType>) -> String {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            return String::new();
        };
        if let Scalar::Bool(b) = value {
            return if *b { "Yes" } else { "No" }.to_string();
        }

        match ty {
            Some(SemanticType::Percent) => match numeric(value) {
                Some(n) => format!("{}%", to_fixed(n, 2)),
                None => value.to_string(),
            },
            Some(SemanticType::Decimal) => match numeric(value) {
                Some(n) => to_fixed(n, 2),
                None => value.to_string(),
            },
            Some(SemanticType::Integer) => {
                let n = match value {
                    Scalar::Text(s) => parse_int(s),
                    other => other.as_number(),
                };
                match n {
                    Some(n) if n.is_finite() => self.grouped(n, 0),
                    Some(n) if !n.is_nan() => js_number_string(n),
                    _ => value.to_string(),
                }
            }
            Some(SemanticType::Date) => self
                .to_datetime(value)
                .map(|dt| dt.format(self.date_pattern()).to_string())
                .unwrap_or_else(|| value.to_string()),
            Some(SemanticType::DateTime) => self
                .to_datetime(value)
                .map(|dt| dt.format(self.datetime_pattern()).to_string())
                .unwrap_or_else(|| value.to_string()),
            Some(SemanticType::Monetary) => match numeric(value) {
                Some(n) => self.currency(n),
                None => value.to_string(),
            },
            Some(SemanticType::String) => value.to_string(),
            Some(SemanticType::DayDuration) => match numeric(value) {
                Some(n) if n == 1.0 => "1 day".to_string(),
                Some(n) => format!("{} days", js_number_string(n)),
                None => value.to_string(),
            },
            Some(SemanticType::Duration) => match numeric(value) {
                Some(nanos) => format_duration(nanos / 1e9),
                None => value.to_string(),
            },
            Some(SemanticType::Other) | None => match value {
                Scalar::Number(n) => self.grouped(*n, 2),
                other => other.to_string(),
            },
        }
    }

    /// Interpret a scalar as a point in time: numbers are epoch-millis, strings are dates.
    pub fn to_datetime(&self, value: &Scalar) -> Option<DateTime<Utc>> {
        match value {
            Scalar::Number(ms) => millis_to_datetime(*ms),
            Scalar::Text(s) => parse_date_millis(s).and_then(|ms| millis_to_datetime(ms as f64)),
            Scalar::Bool(_) | Scalar::Null => None,
        }
    }

    /// Fixed-point rendering with locale digit grouping, e.g. `1,234.50`.
    pub fn grouped(&self, value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return js_number_string(value);
        }
        let fixed = to_fixed(value, decimals);
        let (sign, unsigned) = match fixed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", fixed.as_str()),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (unsigned, None),
        };
        let int_grouped = match int_part.parse::<u128>() {
            Ok(n) => n.to_formatted_string(self.locale),
            Err(_) => int_part.to_string(),
        };
        match frac_part {
            Some(f) => format!("{sign}{int_grouped}{}{f}", self.locale.decimal()),
            None => format!("{sign}{int_grouped}"),
        }
    }

    /// USD in en-US notation whatever the display locale.
    fn currency(&self, value: f64) -> String {
        let amount = Formatter::default().grouped(value.abs(), 2);
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{sign}${amount}")
    }

    fn date_pattern(&self) -> &'static str {
        match self.locale.name() {
            "de" => "%d.%m.%Y",
            "nl" => "%d-%m-%Y",
            "fr" | "es" | "it" | "pt" => "%d/%m/%Y",
            _ => "%-m/%-d/%Y",
        }
    }

    fn datetime_pattern(&self) -> &'static str {
        match self.locale.name() {
            "de" => "%d.%m.%Y, %H:%M:%S",
            "nl" => "%d-%m-%Y %H:%M:%S",
            "fr" | "es" | "it" | "pt" => "%d/%m/%Y %H:%M:%S",
            _ => "%-m/%-d/%Y, %-I:%M:%S %p",
        }
    }
}

/// Format with the default (English) formatter.
pub fn format_value(value: Option<&Scalar>, ty: Option<SemanticType>) -> String {
    Formatter::default().format(value, ty)
}

/// Human-readable duration from a number of **seconds**.
///
/// Below a millisecond renders microseconds, below a second milliseconds,
/// otherwise `{d}d {h}:{m}:{s}`. The sign is kept for negative durations.
pub fn format_duration(seconds: f64) -> String {
    if seconds == 0.0 {
        return "0 seconds".to_string();
    }
    let sign = if seconds < 0.0 { "-" } else { "" };
    let seconds = seconds.abs();

    if seconds < 0.001 {
        return format!("{sign}{} µs", (seconds * 1_000_000.0).round());
    }
    if seconds < 1.0 {
        return format!("{sign}{} ms", (seconds * 1000.0).round());
    }

    let days = (seconds / 86_400.0).floor();
    let hours = ((seconds % 86_400.0) / 3600.0).floor();
    let minutes = ((seconds % 3600.0) / 60.0).floor();
    let rest = to_fixed(seconds % 60.0, 0);
    format!("{sign}{days}d {hours}:{minutes}:{rest}")
}

/// Fixed-point string with `digits` decimals; exact ties round away from zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return js_number_string(value);
    }
    // The long expansion is exact far enough past `digits` to decide the rounding.
    let expanded = format!("{:.40}", value.abs());
    let (int_part, frac_part) = expanded.split_once('.').unwrap_or((&expanded, ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    if frac_part.as_bytes().get(digits).is_some_and(|b| *b >= b'5') {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, 1);
                int_len += 1;
                break;
            }
            i -= 1;
            if kept[i] == 9 {
                kept[i] = 0;
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (i, d) in kept.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + d));
    }
    out
}

/// Plain string form of a number: integers without a fraction, `NaN`, `Infinity`.
pub fn js_number_string(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

/// Parse the leading float of a string, ignoring leading whitespace and any
/// trailing garbage (`"12.5%"` → 12.5). `None` when there is no numeric prefix.
pub fn parse_float(s: &str) -> Option<f64> {
    let m = FLOAT_PREFIX.find(s.trim_start())?;
    m.as_str().parse::<f64>().ok()
}

/// Parse the leading integer of a string (`"42 days"` → 42).
pub fn parse_int(s: &str) -> Option<f64> {
    let m = INT_PREFIX.find(s.trim_start())?;
    m.as_str().parse::<f64>().ok()
}

/// Parse a date or date-time string into epoch-millis (UTC).
///
/// Accepts RFC 3339, ISO-like `YYYY-MM-DD[ T]HH:MM[:SS[.fff]]`, and the plain
/// date forms `YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY`.
pub fn parse_date_millis(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for f in DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, f) {
            return Some(ndt.and_utc().timestamp_millis());
        }
    }
    const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
    for f in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, f) {
            return d
                .and_hms_opt(0, 0, 0)
                .map(|ndt| ndt.and_utc().timestamp_millis());
        }
    }
    None
}

fn millis_to_datetime(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(ms.trunc() as i64)
}

fn numeric(value: &Scalar) -> Option<f64> {
    value.as_number().filter(|n| !n.is_nan())
}
