use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use std::fmt;

/// Label shown when a date cannot be parsed, same text as the JS `Date` sentinel
pub const INVALID_DATE: &str = "Invalid Date";

/// Locale used when the browser does not report one
#[allow(dead_code)]
pub const FALLBACK_LOCALE: &str = "en-US";

const SHORT_DATE_FORMAT: &str = "%-m/%-d/%Y";
const TIME_FORMAT: &str = "%-I:%M:%S %p";

/// A timestamp ready to be shown with the host's date/time formatting.
///
/// Parsing never fails. Input that cannot be read as an instant renders as
/// [`INVALID_DATE`] for both the date and the time label.
///
/// In the browser the labels come straight from the JS `Date` object
/// (`toLocaleDateString` / `toLocaleTimeString`) using the navigator
/// language. Elsewhere (SSR, tests) the instant is parsed with chrono and
/// rendered in the local time zone with the en-US short patterns.
#[derive(Clone, Debug, PartialEq)]
pub struct LocaleDateTime {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    raw: String,
    instant: Option<DateTime<Utc>>,
}

impl LocaleDateTime {
    pub fn parse(raw: &str) -> Self {
        Self::parse_in(raw, &Local)
    }

    /// Parse with offset-less date-times read as wall-clock time in `tz`
    pub fn parse_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Self {
        let instant = parse_instant(raw, tz);
        if instant.is_none() {
            log::debug!("Unparseable activity date: {:?}", raw);
        }

        Self {
            raw: raw.to_string(),
            instant,
        }
    }

    #[allow(dead_code)]
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.instant
    }

    #[allow(dead_code)]
    pub fn is_valid(&self) -> bool {
        self.instant.is_some()
    }

    /// Short date label, e.g. "3/15/2024"
    #[cfg(not(target_arch = "wasm32"))]
    pub fn format_date(&self) -> String {
        self.format_date_in(&Local)
    }

    /// Time label, e.g. "2:30:00 PM"
    #[cfg(not(target_arch = "wasm32"))]
    pub fn format_time(&self) -> String {
        self.format_time_in(&Local)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn format_date(&self) -> String {
        host::date_string(&self.raw)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn format_time(&self) -> String {
        host::time_string(&self.raw)
    }

    /// Short date label in an explicit time zone
    pub fn format_date_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.format_with(tz, SHORT_DATE_FORMAT)
    }

    /// Time label in an explicit time zone
    pub fn format_time_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.format_with(tz, TIME_FORMAT)
    }

    fn format_with<Tz>(&self, tz: &Tz, pattern: &str) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self.instant {
            Some(instant) => instant.with_timezone(tz).format(pattern).to_string(),
            None => INVALID_DATE.to_string(),
        }
    }
}

/// Read an ISO-8601 string the way a JS `Date` would.
///
/// With an offset or `Z` the instant is absolute, a date-time without one is
/// wall-clock time in `tz`, and a bare date (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`)
/// is midnight UTC. `T24:00` is midnight at the end of the day.
fn parse_instant<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(start_of_day) = end_of_day(raw) {
        return parse_instant(&start_of_day, tz).map(|dt| dt + Duration::days(1));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    // RFC 3339 insists on seconds, JS does not
    if let Some(naive) = raw.strip_suffix(['Z', 'z']).and_then(parse_naive_datetime) {
        return Some(Utc.from_utc_datetime(&naive));
    }

    if let Some(naive) = parse_naive_datetime(raw) {
        return resolve_wall_clock(&naive, tz);
    }

    parse_date_only(raw)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Map a wall-clock time to an instant. Repeated times take the earlier
/// instant; times skipped by a forward transition use the offset in force
/// before it, so 02:30 on a spring-forward night reads as 03:30.
fn resolve_wall_clock<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            let before = naive.checked_sub_signed(Duration::hours(1))?;
            let offset = tz.offset_from_local_datetime(&before).earliest()?.fix();
            let utc = naive.checked_sub_signed(Duration::seconds(offset.local_minus_utc().into()))?;
            Some(Utc.from_utc_datetime(&utc))
        }
    }
}

/// Rewrite `...T24:00[:00[.000]]...` to `...T00:00...`; `None` for anything else
fn end_of_day(raw: &str) -> Option<String> {
    let (date, rest) = raw.split_once("T24:")?;
    let zeros = rest
        .chars()
        .take_while(|c| matches!(c, '0' | ':' | '.'))
        .count();
    let tail = &rest[zeros..];
    if !rest.starts_with("00") || tail.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(format!("{}T00:{}", date, rest))
}

fn parse_date_only(raw: &str) -> Option<NaiveDate> {
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    match raw.len() {
        4 if all_digits(raw) => NaiveDate::from_ymd_opt(raw.parse().ok()?, 1, 1),
        7 => NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d").ok(),
        _ => NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
    }
}

fn parse_naive_datetime(raw: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(raw, pattern).ok())
}

#[cfg(target_arch = "wasm32")]
mod host {
    use super::FALLBACK_LOCALE;
    use js_sys::Date;
    use wasm_bindgen::JsValue;

    fn language() -> String {
        web_sys::window()
            .and_then(|window| window.navigator().language())
            .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
    }

    pub fn date_string(raw: &str) -> String {
        let date = Date::new(&JsValue::from_str(raw));
        date.to_locale_date_string(&language(), &JsValue::UNDEFINED).into()
    }

    pub fn time_string(raw: &str) -> String {
        let date = Date::new(&JsValue::from_str(raw));
        date.to_locale_time_string(&language()).into()
    }
}
