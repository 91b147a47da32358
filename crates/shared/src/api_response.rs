//! # レスポンスエンベロープ
//!
//! バックエンドが返す `{ "data": T }` 形式のラッパー型。

use serde::{Deserialize, Serialize};

/// `{ "data": T }` 形式のレスポンスラッパー
///
/// バックエンド関数は結果をこの形式で包んで返すことがある。
/// クライアントはラップされている場合に限り `data` を取り出して呼び出し元に渡す。
///
/// ```
/// use contactdesk_shared::ApiResponse;
///
/// let wrapped = ApiResponse::new(vec![1, 2, 3]);
/// assert_eq!(wrapped.into_data(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// ラッパーを外して中身を返す
    pub fn into_data(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_dataキーを持つjsonにシリアライズする() {
        let json = serde_json::to_value(ApiResponse::new("accepted")).unwrap();

        assert_eq!(json, serde_json::json!({ "data": "accepted" }));
    }

    #[test]
    fn test_余分なキーがあってもdataを読み取る() {
        let json = r#"{"data": {"ticket": 7}, "meta": "ignored"}"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();

        assert_eq!(response.into_data(), serde_json::json!({ "ticket": 7 }));
    }

    #[test]
    fn test_dataキーがなければデシリアライズに失敗する() {
        let result = serde_json::from_str::<ApiResponse<String>>(r#"{"value": "x"}"#);

        assert!(result.is_err());
    }
}
