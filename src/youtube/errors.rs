use serde_json::Value;
use thiserror::Error;

/// エラーの分類
///
/// 呼び出し側が「結果なし」と「リクエスト失敗」を区別し、
/// 失敗時の扱い（空結果へのフォールバック等）を決めるために使用する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// APIキー未設定・設定ファイル読み込み失敗
    Configuration,
    /// ネットワークレベルの失敗（接続失敗・タイムアウト）
    Transport,
    /// YouTube APIが非成功ステータスを返した
    Remote,
    /// 成功ステータスだがレスポンス形式が想定と異なる
    Shape,
    /// 該当する動画が存在しない
    NotFound,
}

#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("YouTube API key is missing")]
    MissingApiKey,

    #[error("Failed to load env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Request timeout: no response within {0}s")]
    Timeout(u64),

    #[error("YouTube API Error: {status} {status_text}")]
    ApiError {
        status: u16,
        status_text: String,
        /// エラーレスポンス本文（JSONでない場合は文字列として保持）
        body: Value,
    },

    #[error("Invalid response format from YouTube API: {0}")]
    InvalidResponse(String),

    #[error("Video not found: {0}")]
    VideoNotFound(String),
}

impl YouTubeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingApiKey | Self::EnvFile(_) => ErrorKind::Configuration,
            Self::HttpError(_) | Self::Timeout(_) => ErrorKind::Transport,
            Self::ApiError { .. } => ErrorKind::Remote,
            Self::InvalidResponse(_) => ErrorKind::Shape,
            Self::VideoNotFound(_) => ErrorKind::NotFound,
        }
    }

    /// HTTPステータスコード（ApiErrorのみ）
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Googleのエラーエンベロープから最初の `error.errors[].reason` を取得
    ///
    /// 例: `quotaExceeded`, `keyInvalid`, `rateLimitExceeded`
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::ApiError { body, .. } => body
                .pointer("/error/errors/0/reason")
                .and_then(Value::as_str),
            _ => None,
        }
    }

    /// 1日のクォータ上限に達したかどうか
    pub fn is_quota_exceeded(&self) -> bool {
        self.reason() == Some("quotaExceeded")
    }

    /// APIキーが無効かどうか
    pub fn is_key_invalid(&self) -> bool {
        self.reason() == Some("keyInvalid")
    }
}
