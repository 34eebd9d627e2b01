use super::errors::YouTubeError;
use super::types::{ApiResponse, ListKind};

/// 失敗した一覧取得を空のレスポンスに置き換える
///
/// エンドポイントは常にエラーを返すため、空結果で画面表示を続けたい
/// 呼び出し側が明示的に選択する。エラーはログに出力される
pub trait OrEmpty {
    fn or_empty(self, kind: ListKind) -> ApiResponse;
}

impl OrEmpty for Result<ApiResponse, YouTubeError> {
    fn or_empty(self, kind: ListKind) -> ApiResponse {
        self.unwrap_or_else(|e| {
            log::error!(
                "Falling back to empty {} ({:?} error): {}",
                kind.as_str(),
                e.kind(),
                e
            );
            ApiResponse::empty(kind)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::types::PageInfo;

    #[test]
    fn test_error_becomes_empty_shell() {
        let result: Result<ApiResponse, YouTubeError> = Err(YouTubeError::MissingApiKey);
        let response = result.or_empty(ListKind::Videos);

        assert_eq!(response.kind, "youtube#videoListResponse");
        assert!(response.items.is_empty());
        assert_eq!(response.page_info, PageInfo::default());
    }

    #[test]
    fn test_success_passes_through() {
        let mut original = ApiResponse::empty(ListKind::Search);
        original.etag = "etag".to_string();
        original.next_page_token = Some("token".to_string());

        let result: Result<ApiResponse, YouTubeError> = Ok(original.clone());
        let response = result.or_empty(ListKind::Videos);
        assert_eq!(response, original);
    }
}
