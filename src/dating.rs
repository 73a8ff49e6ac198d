//! All things date and time.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const BASE62: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Errors from the compact date codecs.
#[derive(Debug, Error)]
pub enum DatingError {
    #[error("year {0} is outside the encodable range 2000-2035")]
    YearOutOfRange(i32),
    #[error("month {0} is outside 1-12")]
    MonthOutOfRange(u32),
    #[error("{0} is not a calendar date")]
    InvalidDate(String),
    #[error("malformed input '{0}', expected {1}")]
    Malformed(String, &'static str),
}

/// Current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// How many whole seconds ago was this.
pub fn utcage(t: DateTime<Utc>) -> i64 {
    (now_utc() - t).num_seconds()
}

/// Format a Sara-style short date.
///
/// One character for the year (2000-2035), one for the month (1-9, then
/// A/B/C for October through December), two digits for the day. The format
/// is sortable but saves 60% space in print. A datetime input grows a
/// `-HHMM` suffix; seconds are dropped.
///
/// ```
/// assert_eq!(anita::dating::sara_date("2010-12-24").unwrap(), "AC24");
/// assert_eq!(anita::dating::sara_date("2010-12-24T07:06").unwrap(), "AC24-0706");
/// ```
pub fn sara_date(s: &str) -> Result<String, DatingError> {
    use DatingError::*;
    let malformed = || Malformed(s.to_string(), "YYYY-MM-DD or YYYY-MM-DDTHH:MM");

    if !s.is_ascii() || s.len() < 10 {
        return Err(malformed());
    }
    let b = s.as_bytes();
    if b[4] != b'-' || b[7] != b'-' {
        return Err(malformed());
    }

    let year: i32 = s[0..4].parse().map_err(|_| malformed())?;
    let month: u32 = s[5..7].parse().map_err(|_| malformed())?;
    let day: u32 = s[8..10].parse().map_err(|_| malformed())?;
    if !(2000..=2035).contains(&year) {
        return Err(YearOutOfRange(year));
    }
    if !(1..=12).contains(&month) {
        return Err(MonthOutOfRange(month));
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| InvalidDate(s.to_string()))?;

    let code = format!(
        "{}{}{:02}",
        BASE36[(year - 2000) as usize] as char,
        BASE36[month as usize] as char,
        day
    );

    if s.len() == 10 {
        return Ok(code);
    }
    // time part: accept a T or space separator, ignore anything past minutes
    if s.len() < 16 || !matches!(b[10], b'T' | b' ') || b[13] != b':' {
        return Err(malformed());
    }
    let hour: u32 = s[11..13].parse().map_err(|_| malformed())?;
    let minute: u32 = s[14..16].parse().map_err(|_| malformed())?;
    if hour > 23 || minute > 59 {
        return Err(malformed());
    }
    Ok(format!("{}-{:02}{:02}", code, hour, minute))
}

/// Today's Sara-style short date, date-only.
///
/// The format ends after 2035; until then this cannot fail.
pub fn sara_date_now() -> String {
    sara_date(&now_utc().format("%Y-%m-%d").to_string()).unwrap_or_default()
}

/// Convert a Sara-style short date back to a calendar date.
///
/// ```
/// use chrono::NaiveDate;
/// let d = anita::dating::from_sara_date("AC24").unwrap();
/// assert_eq!(d, NaiveDate::from_ymd_opt(2010, 12, 24).unwrap());
/// ```
pub fn from_sara_date(sd: &str) -> Result<NaiveDate, DatingError> {
    let malformed = || DatingError::Malformed(sd.to_string(), "a four-character code like AC24");

    let b = sd.as_bytes();
    if b.len() != 4 {
        return Err(malformed());
    }
    let year = match b[0] {
        b'0'..=b'9' => 2000 + (b[0] - b'0') as i32,
        b'A'..=b'Z' => 2010 + (b[0] - b'A') as i32,
        _ => return Err(malformed()),
    };
    let month = match b[1] {
        b'1'..=b'9' => (b[1] - b'0') as u32,
        b'A'..=b'C' => 10 + (b[1] - b'A') as u32,
        _ => return Err(malformed()),
    };
    let day: u32 = sd[2..4].parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DatingError::InvalidDate(sd.to_string()))
}

/// Funny stuff: render a duration like `5d 10m 3.5s`.
///
/// Zero components are left out; seconds appear with one decimal only when
/// at least 0.1 remains. A duration with nothing to show is `"no time"`.
///
/// ```
/// assert_eq!(anita::dating::split_seconds(90061.5), "1d 1h 1m 1.5s");
/// assert_eq!(anita::dating::split_seconds(7200.0), "2h");
/// assert_eq!(anita::dating::split_seconds(0.05), "no time");
/// ```
pub fn split_seconds(seconds: f64) -> String {
    let secs = seconds % 60.0;
    let mut rest = (seconds / 60.0).floor() as u64;
    let mins = rest % 60;
    rest /= 60;
    let hours = rest % 24;
    let days = rest / 24;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if mins > 0 {
        parts.push(format!("{}m", mins));
    }
    if secs >= 0.1 {
        parts.push(format!("{:.1}s", secs));
    }

    if parts.is_empty() {
        "no time".to_string()
    } else {
        parts.join(" ")
    }
}

/// Check a string is a plausible `YYYY-MM-DD` date in the 1900s or 2000s.
///
/// ```
/// assert!(anita::dating::check_date("2023-06-15"));
/// assert!(!anita::dating::check_date("2023-13-01"));
/// ```
pub fn check_date(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return false;
    }
    let digits_ok = b
        .iter()
        .enumerate()
        .all(|(i, c)| matches!(i, 4 | 7) || c.is_ascii_digit());
    if !digits_ok || !matches!(&s[0..2], "19" | "20") {
        return false;
    }
    let month: u32 = s[5..7].parse().unwrap_or(0);
    let day: u32 = s[8..10].parse().unwrap_or(0);
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

/// Very short string representation of an integer.
///
/// Strictly ascending base-62 over `0-9A-Za-z`, left-padded with zeroes to
/// `pad` characters; equal-width codes sort in numeric order. `pad = 3` is
/// suitable for counting days from Jan 1, 1900.
///
/// ```
/// assert_eq!(anita::dating::number62(0, 3), "000");
/// assert_eq!(anita::dating::number62(61, 3), "00z");
/// assert_eq!(anita::dating::number62(62, 3), "010");
/// ```
pub fn number62(mut n: u64, pad: usize) -> String {
    let mut code = String::new();
    loop {
        code.insert(0, BASE62[(n % 62) as usize] as char);
        n /= 62;
        if n == 0 {
            break;
        }
    }
    if code.len() >= pad {
        code
    } else {
        format!("{:0>width$}", code, width = pad)
    }
}

/// Days elapsed since Jan 1, 1900 as a three-character base-62 code.
///
/// Strictly ascending, so the codes sort like the dates they stand for.
///
/// ```
/// assert_eq!(anita::dating::date62("1900-01-01").unwrap(), "000");
/// ```
pub fn date62(iso: &str) -> Result<String, DatingError> {
    if !check_date(iso) {
        return Err(DatingError::Malformed(
            iso.to_string(),
            "YYYY-MM-DD between 1900 and 2099",
        ));
    }
    let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map_err(|_| DatingError::InvalidDate(iso.to_string()))?;
    let epoch = NaiveDate::from_ymd_opt(1900, 1, 1).expect("1900-01-01 is a valid date");
    let days = date.signed_duration_since(epoch).num_days();
    Ok(number62(days as u64, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sara_date_encodes_dates() {
        assert_eq!(sara_date("2010-12-24").unwrap(), "AC24");
        assert_eq!(sara_date("2020-01-15").unwrap(), "K115");
        assert_eq!(sara_date("2021-09-30").unwrap(), "L930");
        assert_eq!(sara_date("2000-01-01").unwrap(), "0101");
        assert_eq!(sara_date("2009-09-01").unwrap(), "9901");
        assert_eq!(sara_date("2035-01-01").unwrap(), "Z101");
    }

    #[test]
    fn sara_date_letters_the_late_months() {
        assert_eq!(sara_date("2010-10-01").unwrap(), "AA01");
        assert_eq!(sara_date("2010-11-01").unwrap(), "AB01");
        assert_eq!(sara_date("2010-12-01").unwrap(), "AC01");
    }

    #[test]
    fn sara_date_takes_datetimes_and_drops_seconds() {
        assert_eq!(sara_date("2010-12-24T07:06").unwrap(), "AC24-0706");
        assert_eq!(sara_date("2010-12-24T07:06:59").unwrap(), "AC24-0706");
        assert_eq!(sara_date("2010-12-24 07:06").unwrap(), "AC24-0706");
    }

    #[test]
    fn sara_date_rejects_years_outside_the_format() {
        assert!(matches!(
            sara_date("1971-02-24"),
            Err(DatingError::YearOutOfRange(1971))
        ));
        assert!(matches!(
            sara_date("2036-01-01"),
            Err(DatingError::YearOutOfRange(2036))
        ));
    }

    #[test]
    fn sara_date_rejects_garbage() {
        assert!(matches!(
            sara_date("2010-13-01"),
            Err(DatingError::MonthOutOfRange(13))
        ));
        assert!(matches!(
            sara_date("2010-02-30"),
            Err(DatingError::InvalidDate(_))
        ));
        assert!(matches!(sara_date("soon"), Err(DatingError::Malformed(..))));
        assert!(matches!(
            sara_date("2010-12-24T07"),
            Err(DatingError::Malformed(..))
        ));
    }

    #[test]
    fn from_sara_date_inverts_the_encoding() {
        let expect = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(from_sara_date("AC24").unwrap(), expect(2010, 12, 24));
        assert_eq!(from_sara_date("0101").unwrap(), expect(2000, 1, 1));
        assert_eq!(from_sara_date("Z101").unwrap(), expect(2035, 1, 1));
        assert_eq!(from_sara_date("K115").unwrap(), expect(2020, 1, 15));
    }

    #[test]
    fn sara_date_round_trips() {
        for iso in ["2000-01-01", "2010-12-24", "2023-06-15", "2035-12-31"] {
            let code = sara_date(iso).unwrap();
            assert_eq!(from_sara_date(&code).unwrap().to_string(), iso);
        }
    }

    #[test]
    fn from_sara_date_rejects_bad_codes() {
        assert!(matches!(
            from_sara_date("AC2"),
            Err(DatingError::Malformed(..))
        ));
        assert!(matches!(
            from_sara_date("AD01"),
            Err(DatingError::Malformed(..))
        ));
        assert!(matches!(
            from_sara_date("K230"),
            Err(DatingError::InvalidDate(_))
        ));
    }

    #[test]
    fn split_seconds_renders_each_unit() {
        assert_eq!(split_seconds(0.0), "no time");
        assert_eq!(split_seconds(0.05), "no time");
        assert_eq!(split_seconds(0.1), "0.1s");
        assert_eq!(split_seconds(5.5), "5.5s");
        assert_eq!(split_seconds(59.9), "59.9s");
        assert_eq!(split_seconds(60.0), "1m");
        assert_eq!(split_seconds(65.5), "1m 5.5s");
        assert_eq!(split_seconds(3600.0), "1h");
        assert_eq!(split_seconds(3661.5), "1h 1m 1.5s");
        assert_eq!(split_seconds(7200.0), "2h");
        assert_eq!(split_seconds(86400.0), "1d");
        assert_eq!(split_seconds(90061.5), "1d 1h 1m 1.5s");
        assert_eq!(split_seconds(172800.0), "2d");
        assert_eq!(split_seconds(883845.7), "10d 5h 30m 45.7s");
    }

    #[test]
    fn check_date_accepts_plausible_dates() {
        assert!(check_date("2023-06-15"));
        assert!(check_date("1999-12-31"));
        assert!(check_date("2000-02-29"));
    }

    #[test]
    fn check_date_rejects_the_rest() {
        assert!(!check_date(""));
        assert!(!check_date("23-06-15"));
        assert!(!check_date("2023/06/15"));
        assert!(!check_date("2023-06-15T10:30"));
        assert!(!check_date("2023-13-01"));
        assert!(!check_date("2023-01-32"));
        assert!(!check_date("0023-06-15"));
        assert!(!check_date("2100-01-01"));
    }

    #[test]
    fn number62_counts_through_the_alphabet() {
        assert_eq!(number62(0, 3), "000");
        assert_eq!(number62(1, 3), "001");
        assert_eq!(number62(9, 3), "009");
        assert_eq!(number62(10, 3), "00A");
        assert_eq!(number62(35, 3), "00Z");
        assert_eq!(number62(36, 3), "00a");
        assert_eq!(number62(61, 3), "00z");
        assert_eq!(number62(62, 3), "010");
        assert_eq!(number62(124, 3), "020");
        assert_eq!(number62(3843, 3), "0zz");
        assert_eq!(number62(3844, 3), "100");
    }

    #[test]
    fn number62_grows_past_the_padding() {
        assert_eq!(number62(62, 1), "10");
        assert_eq!(number62(0, 0), "0");
    }

    #[test]
    fn number62_is_strictly_ascending() {
        for n in 0..1000u64 {
            assert!(number62(n, 3) < number62(n + 1, 3));
        }
    }

    #[test]
    fn date62_counts_days_from_1900() {
        assert_eq!(date62("1900-01-01").unwrap(), "000");
        assert_eq!(date62("1900-01-02").unwrap(), "001");
        assert_eq!(date62("1900-12-31").unwrap(), "05s");
        assert_eq!(date62("2000-01-01").unwrap(), "9V6");
    }

    #[test]
    fn date62_sorts_like_the_dates() {
        let days = ["1900-01-01", "1950-06-15", "2000-01-01", "2022-04-16"];
        let codes: Vec<String> = days.iter().map(|d| date62(d).unwrap()).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn date62_rejects_out_of_range_input() {
        assert!(matches!(
            date62("1899-12-31"),
            Err(DatingError::Malformed(..))
        ));
        assert!(matches!(date62("someday"), Err(DatingError::Malformed(..))));
        assert!(matches!(
            date62("1900-02-31"),
            Err(DatingError::InvalidDate(_))
        ));
    }

    #[test]
    fn utcage_counts_seconds_since() {
        let age = utcage(now_utc());
        assert!((0..=2).contains(&age));
        let earlier = now_utc() - chrono::Duration::seconds(120);
        assert!(utcage(earlier) >= 120);
    }

    #[test]
    fn sara_date_now_is_a_short_code() {
        assert_eq!(sara_date_now().len(), 4);
    }
}
