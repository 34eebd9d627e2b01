//! ISO 8601 形式の動画長（contentDetails.duration）のパース
//!
//! YouTube APIは `PT4M13S` や `P1DT2H` のような形式で動画長を返す。
//! ライブ配信中の動画は `P0D` になる。

use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

// 正規表現のシングルトン（OnceLockで初回のみコンパイル）
static DURATION_RE: OnceLock<Regex> = OnceLock::new();

fn get_duration_regex() -> &'static Regex {
    DURATION_RE.get_or_init(|| {
        Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$")
            .expect("Failed to compile duration regex")
    })
}

/// ISO 8601 の動画長をDurationに変換
///
/// 不正な形式、または成分が一つもない場合（`P`, `PT`）はNoneを返す
pub fn parse_iso8601_duration(value: &str) -> Option<Duration> {
    let caps = get_duration_regex().captures(value)?;

    // 日・時・分・秒の順
    const UNIT_SECS: [u64; 4] = [86_400, 3_600, 60, 1];

    let mut total: u64 = 0;
    let mut found = false;
    for (index, unit) in UNIT_SECS.iter().enumerate() {
        if let Some(m) = caps.get(index + 1) {
            let n: u64 = m.as_str().parse().ok()?;
            total = total.checked_add(n.checked_mul(*unit)?)?;
            found = true;
        }
    }

    found.then(|| Duration::from_secs(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes_seconds() {
        assert_eq!(
            parse_iso8601_duration("PT4M13S"),
            Some(Duration::from_secs(253))
        );
    }

    #[test]
    fn test_parse_hours_and_days() {
        assert_eq!(
            parse_iso8601_duration("PT1H2M3S"),
            Some(Duration::from_secs(3723))
        );
        assert_eq!(
            parse_iso8601_duration("P1DT2H"),
            Some(Duration::from_secs(93_600))
        );
        assert_eq!(parse_iso8601_duration("PT45S"), Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_parse_live_stream() {
        // ライブ配信は P0D
        assert_eq!(parse_iso8601_duration("P0D"), Some(Duration::ZERO));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_iso8601_duration(""), None);
        assert_eq!(parse_iso8601_duration("P"), None);
        assert_eq!(parse_iso8601_duration("PT"), None);
        assert_eq!(parse_iso8601_duration("4M13S"), None);
        assert_eq!(parse_iso8601_duration("PT4M13"), None);
        assert_eq!(parse_iso8601_duration("PT1.5S"), None);
    }
}
