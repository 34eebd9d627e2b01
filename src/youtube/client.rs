use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{decoder::decode_response, errors::YouTubeError, types::*};
use crate::config::YouTubeConfig;
use crate::util::redact_api_key;

/// 1回のリクエストで取得する最大件数（APIの上限）
pub const MAX_RESULTS: &str = "50";

/// 急上昇動画のデフォルト地域
pub const DEFAULT_REGION_CODE: &str = "US";

/// 急上昇動画のデフォルトカテゴリ（0 = 全カテゴリ）
pub const DEFAULT_VIDEO_CATEGORY_ID: &str = "0";

/// search.list のクォータ消費
const SEARCH_QUOTA_COST: u32 = 100;

/// videos.list のクォータ消費
const VIDEOS_QUOTA_COST: u32 = 1;

/// 急上昇動画の取得条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingParams {
    pub region_code: String,
    pub video_category_id: String,
}

impl TrendingParams {
    pub fn new(region_code: impl Into<String>, video_category_id: impl Into<String>) -> Self {
        Self {
            region_code: region_code.into(),
            video_category_id: video_category_id.into(),
        }
    }
}

impl Default for TrendingParams {
    fn default() -> Self {
        Self::new(DEFAULT_REGION_CODE, DEFAULT_VIDEO_CATEGORY_ID)
    }
}

/// YouTube Data API v3 クライアント
///
/// 各メソッドはリクエストを1回だけ送信し、結果またはエラーを返す。
/// 空結果へのフォールバックは呼び出し側が `OrEmpty` で選択する
#[derive(Debug)]
pub struct YouTubeClient {
    client: Client,
    config: YouTubeConfig,
}

impl YouTubeClient {
    /// 新しいクライアントを作成
    ///
    /// APIキー未設定はログに記録するのみで、構築は失敗しない
    ///
    /// # Errors
    /// HTTPクライアントのビルドに失敗した場合にエラーを返す
    pub fn new(config: YouTubeConfig) -> Result<Self, YouTubeError> {
        config.log_key_status();

        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &YouTubeConfig {
        &self.config
    }

    /// キーワードで動画を検索（クォータ100消費）
    pub async fn search_videos(&self, query: &str) -> Result<ApiResponse, YouTubeError> {
        log::info!("Searching videos for query: {}", query);

        let data: ApiResponse = self
            .get_json(
                "search",
                &[
                    ("part", "snippet"),
                    ("maxResults", MAX_RESULTS),
                    ("q", query),
                    ("type", "video"),
                ],
                SEARCH_QUOTA_COST,
            )
            .await?;

        log::info!("Search returned {} videos", data.items.len());
        Ok(data)
    }

    /// 動画の詳細（snippet, contentDetails, statistics）を取得
    ///
    /// 該当する動画がない場合は `VideoNotFound` を返す
    pub async fn video_details(&self, video_id: &str) -> Result<Video, YouTubeError> {
        log::info!("Fetching video details: {}", video_id);

        let data: ApiResponse = self
            .get_json(
                "videos",
                &[
                    ("part", "snippet,contentDetails,statistics"),
                    ("id", video_id),
                ],
                VIDEOS_QUOTA_COST,
            )
            .await?;

        data.items.into_iter().next().ok_or_else(|| {
            log::warn!("Video not found: {}", video_id);
            YouTubeError::VideoNotFound(video_id.to_string())
        })
    }

    /// 関連動画を検索（クォータ100消費）
    pub async fn related_videos(&self, video_id: &str) -> Result<ApiResponse, YouTubeError> {
        log::info!("Fetching related videos for: {}", video_id);

        let data: ApiResponse = self
            .get_json(
                "search",
                &[
                    ("part", "snippet"),
                    ("relatedToVideoId", video_id),
                    ("type", "video"),
                ],
                SEARCH_QUOTA_COST,
            )
            .await?;

        log::info!("Related videos returned {} items", data.items.len());
        Ok(data)
    }

    /// 急上昇動画（mostPopularチャート）を取得
    ///
    /// `items` が配列でないレスポンスは `InvalidResponse` として扱う
    pub async fn trending_videos(
        &self,
        params: &TrendingParams,
    ) -> Result<ApiResponse, YouTubeError> {
        log::info!(
            "Fetching trending videos: region={}, category={}",
            params.region_code,
            params.video_category_id
        );

        let data: Value = self
            .get_json(
                "videos",
                &[
                    ("part", "snippet,contentDetails,statistics"),
                    ("chart", "mostPopular"),
                    ("regionCode", params.region_code.as_str()),
                    ("videoCategoryId", params.video_category_id.as_str()),
                    ("maxResults", MAX_RESULTS),
                ],
                VIDEOS_QUOTA_COST,
            )
            .await?;

        log::debug!("Trending videos response: {}", data);

        if !data.get("items").is_some_and(Value::is_array) {
            log::error!("Invalid response format: {}", data);
            return Err(YouTubeError::InvalidResponse(
                "items is missing or not an array".to_string(),
            ));
        }

        let data: ApiResponse = serde_json::from_value(data).map_err(|e| {
            log::error!("Failed to parse trending videos response: {}", e);
            YouTubeError::InvalidResponse(e.to_string())
        })?;

        log::info!("Trending videos returned {} items", data.items.len());
        Ok(data)
    }

    /// ショート動画（videoDuration=short）を検索（クォータ100消費）
    pub async fn shorts(&self) -> Result<ApiResponse, YouTubeError> {
        log::info!("Fetching shorts");

        let data: ApiResponse = self
            .get_json(
                "search",
                &[
                    ("part", "snippet,contentDetails"),
                    ("type", "video"),
                    ("videoDuration", "short"),
                    ("maxResults", MAX_RESULTS),
                ],
                SEARCH_QUOTA_COST,
            )
            .await?;

        log::info!("Shorts returned {} items", data.items.len());
        Ok(data)
    }

    /// GETリクエストを送信し、レスポンスをデコード
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        quota_cost: u32,
    ) -> Result<T, YouTubeError> {
        let response = self.send(endpoint, params, quota_cost).await?;
        decode_response(response)
            .await
            .map_err(|e| self.classify_timeout(e))
    }

    async fn send(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        quota_cost: u32,
    ) -> Result<Response, YouTubeError> {
        // ネットワークに出る前にAPIキーの有無を確認
        let api_key = self.config.api_key().ok_or_else(|| {
            log::error!("YouTube API key is missing, skipping request to {}", endpoint);
            YouTubeError::MissingApiKey
        })?;

        let url = format!("{}/{}", self.config.base_url(), endpoint);
        let request = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", api_key)])
            .build()?;

        log::info!(
            "YouTube API request (quota cost: {} units): {}",
            quota_cost,
            redact_api_key(request.url())
        );

        self.client
            .execute(request)
            .await
            .map_err(|e| self.classify_timeout(e.into()))
    }

    fn classify_timeout(&self, err: YouTubeError) -> YouTubeError {
        match err {
            YouTubeError::HttpError(e) if e.is_timeout() => {
                let secs = self.config.timeout().as_secs();
                log::warn!("YouTube API request timed out after {}s", secs);
                YouTubeError::Timeout(secs)
            }
            other => other,
        }
    }
}
