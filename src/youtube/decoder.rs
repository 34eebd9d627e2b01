//! HTTPレスポンスのデコード
//!
//! 非成功ステータスは本文をエラー情報として読み取り、ログ出力した上で
//! `YouTubeError::ApiError` を返す。成功ステータスは本文を型付きで返す。

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::errors::YouTubeError;

/// レスポンスを読み取り、型付きの値またはエラーに変換
pub async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, YouTubeError> {
    let status = response.status();
    let body = response.bytes().await?;
    decode_body(status, &body)
}

/// ステータスと本文から型付きの値またはエラーに変換
pub fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, YouTubeError> {
    if !status.is_success() {
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let error_data = parse_error_body(body);
        log::error!(
            "YouTube API Error: status={}, status_text={}, error={}",
            status.as_u16(),
            status_text,
            error_data
        );
        return Err(YouTubeError::ApiError {
            status: status.as_u16(),
            status_text,
            body: error_data,
        });
    }

    serde_json::from_slice(body).map_err(|e| {
        log::error!("Failed to parse YouTube API response: {}", e);
        YouTubeError::InvalidResponse(e.to_string())
    })
}

/// エラー本文をJSONとして読み取る（JSONでなければ文字列として保持）
fn parse_error_body(body: &[u8]) -> Value {
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}
