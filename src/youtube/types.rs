use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

use super::duration::parse_iso8601_duration;

const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

// YouTube API レスポンス型
//
// 宣言していないフィールドは `extra` に保持し、再シリアライズで元のJSONに戻す

/// 検索系エンドポイントが返す動画ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoId {
    pub kind: String,
    pub video_id: String,
}

/// 動画の `id` フィールド
///
/// videos.list では文字列、search.list では `VideoId` オブジェクトになる。
/// タグではなくJSONの形で判別する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VideoRef {
    Plain(String),
    Search(VideoId),
}

impl VideoRef {
    /// 形式に関わらず動画IDを取得
    pub fn video_id(&self) -> &str {
        match self {
            Self::Plain(id) => id,
            Self::Search(id) => &id.video_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<Thumbnail>,
    /// videos.list のみ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<Thumbnail>,
    /// videos.list のみ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxres: Option<Thumbnail>,
}

impl Thumbnails {
    /// 利用可能な最高解像度のサムネイル
    pub fn best(&self) -> Option<&Thumbnail> {
        self.maxres
            .as_ref()
            .or(self.standard.as_ref())
            .or(self.high.as_ref())
            .or(self.medium.as_ref())
            .or(self.default.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub published_at: String,
    pub channel_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    pub channel_title: String,
    #[serde(default)]
    pub live_broadcast_content: String,
    /// search.list のみ（videos.list には含まれない）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_time: Option<String>,
    /// tags, categoryId, localized など
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VideoSnippet {
    /// publishedAt をUTC日時としてパース（不正な形式ならNone）
    pub fn published_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.published_at)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDetails {
    /// ISO 8601 形式（例: `PT4M13S`）
    pub duration: String,
    /// dimension, definition, caption など
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentDetails {
    pub fn duration(&self) -> Option<Duration> {
        parse_iso8601_duration(&self.duration)
    }
}

/// 動画の統計情報
///
/// APIは数値を文字列で返す。チャンネル設定により非公開の項目は欠落する
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dislike_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<String>,
}

impl Statistics {
    pub fn views(&self) -> Option<u64> {
        parse_count(self.view_count.as_deref())
    }

    pub fn likes(&self) -> Option<u64> {
        parse_count(self.like_count.as_deref())
    }

    pub fn comments(&self) -> Option<u64> {
        parse_count(self.comment_count.as_deref())
    }
}

fn parse_count(value: Option<&str>) -> Option<u64> {
    value.and_then(|v| v.parse().ok())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub etag: String,
    pub id: VideoRef,
    pub snippet: VideoSnippet,
    /// part=contentDetails を指定した場合のみ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_details: Option<ContentDetails>,
    /// part=statistics を指定した場合のみ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Video {
    pub fn video_id(&self) -> &str {
        self.id.video_id()
    }

    /// 視聴ページのURL
    pub fn watch_url(&self) -> String {
        format!("{}{}", WATCH_URL_BASE, self.video_id())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_results: u32,
    pub results_per_page: u32,
}

/// 一覧系レスポンスの種別（空結果の `kind` に使用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// search.list
    Search,
    /// videos.list
    Videos,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "youtube#searchListResponse",
            Self::Videos => "youtube#videoListResponse",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub etag: String,
    pub items: Vec<Video>,
    pub page_info: PageInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    /// regionCode, prevPageToken など
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiResponse {
    /// 空の一覧レスポンス（items: [], 件数0）
    pub fn empty(kind: ListKind) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            etag: String::new(),
            items: Vec::new(),
            page_info: PageInfo::default(),
            next_page_token: None,
            extra: Map::new(),
        }
    }
}
