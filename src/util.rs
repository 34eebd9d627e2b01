use reqwest::Url;

/// ログ出力時にマスキングするクエリパラメータ名
const API_KEY_PARAM: &str = "key";

/// APIキーをマスキングしてログ出力用の文字列を生成
///
/// APIキーの最初の4文字と最後の4文字のみを表示し、中間を***でマスキング
///
/// # Examples
/// ```
/// use tube_client::util::mask_api_key;
///
/// let masked = mask_api_key("AIzaSyABC123def456GHI789");
/// assert_eq!(masked, "AIza***I789");
/// ```
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 8 {
        // 短いキー・空文字列は全体をマスク
        return "***".to_string();
    }

    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", prefix, suffix)
}

/// リクエストURLの `key` パラメータをマスキングした文字列を返す
///
/// その他のパラメータと順序はそのまま保持する
pub fn redact_api_key(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == API_KEY_PARAM {
                mask_api_key(&value)
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_api_key() {
        // 通常のAPIキー
        assert_eq!(mask_api_key("AIzaSyABC123def456GHI789"), "AIza***I789");

        // 短いキー
        assert_eq!(mask_api_key("short"), "***");

        // 空文字列
        assert_eq!(mask_api_key(""), "***");

        // 8文字ちょうど
        assert_eq!(mask_api_key("12345678"), "***");

        // 9文字（マスキング開始）
        assert_eq!(mask_api_key("123456789"), "1234***6789");

        // マルチバイト文字でもpanicしない
        assert_eq!(mask_api_key("あいうえおかきくけこ"), "あいうえ***きくけこ");
    }

    #[test]
    fn test_redact_api_key() {
        let url = Url::parse(
            "https://www.googleapis.com/youtube/v3/search?part=snippet&q=cats&key=AIzaSyABC123def456GHI789",
        )
        .unwrap();

        let redacted = redact_api_key(&url);
        assert_eq!(
            redacted,
            "https://www.googleapis.com/youtube/v3/search?part=snippet&q=cats&key=AIza***I789"
        );
        assert!(!redacted.contains("AIzaSyABC123def456GHI789"));
    }

    #[test]
    fn test_redact_without_query() {
        let url = Url::parse("https://www.googleapis.com/youtube/v3/videos").unwrap();
        assert_eq!(
            redact_api_key(&url),
            "https://www.googleapis.com/youtube/v3/videos"
        );
    }
}
