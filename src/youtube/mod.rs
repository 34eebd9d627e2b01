// =============================================================================
// YouTube Data API連携モジュール
// =============================================================================
// YouTube Data API v3 を使用して動画情報を取得
//
// 機能:
// - キーワード検索・関連動画・ショート動画（search.list）
// - 動画詳細・急上昇動画（videos.list）
// - 失敗時に空の一覧へフォールバックするヘルパー
//
// 使用API: https://developers.google.com/youtube/v3/docs
// =============================================================================

pub mod client;
pub mod decoder;
pub mod duration;
pub mod errors;
pub mod fallback;
pub mod types;

pub use client::{TrendingParams, YouTubeClient};
pub use errors::{ErrorKind, YouTubeError};
pub use fallback::OrEmpty;
pub use types::{
    ApiResponse, ContentDetails, ListKind, PageInfo, Statistics, Thumbnail, Thumbnails, Video,
    VideoId, VideoRef, VideoSnippet,
};
