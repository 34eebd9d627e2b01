// =============================================================================
// 共通設定・定数モジュール
// =============================================================================
// YouTube Data APIクライアントの設定値・定数を定義
// APIキーはグローバル状態ではなく、クライアント構築時に渡す設定値として扱う
// =============================================================================

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::util::mask_api_key;
use crate::youtube::errors::YouTubeError;

/// HTTPリクエストのデフォルトタイムアウト（秒）
///
/// ネットワーク状況が悪い場合でも適切にタイムアウトし、
/// ユーザーを長時間待たせないようにする。
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// HTTPリクエストのデフォルトタイムアウト（Duration）
pub fn http_timeout() -> Duration {
    Duration::from_secs(HTTP_TIMEOUT_SECS)
}

/// YouTube Data API v3 のベースURL
pub const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// APIキーを読み取る環境変数名
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// フロントエンド由来の旧環境変数名（`.env` の互換用）
pub const LEGACY_API_KEY_ENV: &str = "PUBLIC_YOUTUBE_API_KEY";

/// YouTubeクライアントの設定
///
/// ライフサイクルはクライアントと同じで、構築後は変更されない
#[derive(Clone)]
pub struct YouTubeConfig {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl YouTubeConfig {
    /// APIキーを指定して設定を作成（空文字列は未設定として扱う）
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key: String = api_key.into();
        let api_key = Some(api_key).filter(|k| !k.trim().is_empty());
        Self {
            api_key,
            base_url: API_BASE_URL.to_string(),
            timeout: http_timeout(),
        }
    }

    /// APIキーなしの設定を作成
    pub fn without_api_key() -> Self {
        Self::new("")
    }

    /// プロセス環境変数から設定を作成
    ///
    /// カレントディレクトリ（または親）に `.env` があれば先に読み込む。
    /// `YOUTUBE_API_KEY` を優先し、なければ `PUBLIC_YOUTUBE_API_KEY` を使用する
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded env file: {}", path.display());
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 指定した `.env` ファイルのみから設定を作成
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, YouTubeError> {
        let path = path.as_ref();
        let vars = dotenvy::from_path_iter(path)?.collect::<Result<HashMap<_, _>, _>>()?;
        log::debug!("Loaded {} variables from {}", vars.len(), path.display());
        Ok(Self::from_lookup(|name| vars.get(name).cloned()))
    }

    /// 任意の変数ルックアップから設定を作成
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = [API_KEY_ENV, LEGACY_API_KEY_ENV]
            .into_iter()
            .find_map(|name| lookup(name).filter(|v| !v.trim().is_empty()));

        match api_key {
            Some(key) => Self::new(key),
            None => Self::without_api_key(),
        }
    }

    /// ベースURLを変更（末尾の `/` は除去）
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// APIキーの状態をログ出力
    ///
    /// 未設定はエラーとして記録するが、初期化自体は止めない
    pub fn log_key_status(&self) {
        log::info!(
            "YouTube API Key status: present={}, length={}",
            self.has_api_key(),
            self.api_key.as_ref().map_or(0, |k| k.chars().count())
        );

        if !self.has_api_key() {
            log::error!(
                "YouTube API key is missing! Make sure {} is set in the environment or .env file",
                API_KEY_ENV
            );
        }
    }
}

// APIキーをログに出さないため手動実装
impl fmt::Debug for YouTubeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YouTubeConfig")
            .field("api_key", &self.api_key.as_deref().map(mask_api_key))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
