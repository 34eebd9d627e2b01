//! 動画アプリ向けのクライアントユーティリティ
//!
//! - `youtube`: YouTube Data API v3 の型付きクライアント
//! - `speech`: 音声検索で使う音声認識ケイパビリティのインターフェース

pub mod config;
pub mod speech;
pub mod util; // doctestのためpubにする
pub mod youtube;

pub use config::YouTubeConfig;
pub use youtube::{ApiResponse, OrEmpty, TrendingParams, Video, YouTubeClient, YouTubeError};
