//! API クライアントのエラー型

use thiserror::Error;

/// API クライアントエラー
///
/// トランスポートが返したエラーはこの型のまま呼び出し元へ伝播する。
/// クライアントはステータスコードによる分岐を行わない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiClientError {
    /// バックエンドが 2xx 以外を返した（401 を含む）
    #[error("予期しないステータス {status}: {body}")]
    Status { status: u16, body: String },

    /// 接続失敗・タイムアウトなどの通信エラー
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// 成功レスポンスのボディを JSON として解釈できない
    #[error("レスポンスのデコードに失敗しました: {0}")]
    Decode(String),

    /// リクエストボディを JSON にシリアライズできない
    #[error("リクエストのシリアライズに失敗しました: {0}")]
    Serialization(String),

    /// 送信先 URL を組み立てられない
    #[error("不正な URL です: {0}")]
    InvalidUrl(String),

    /// ヘッダー名または値が HTTP として不正
    #[error("不正なヘッダーです: {0}")]
    InvalidHeader(String),
}

impl ApiClientError {
    /// HTTP ステータスコードを返す（ステータスエラー以外は `None`）
    ///
    /// 401 をセッション切れとして扱うかどうかは呼び出し側が決める。
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiClientError {
    fn from(err: reqwest::Error) -> Self {
        ApiClientError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiClientError {
    fn from(err: serde_json::Error) -> Self {
        ApiClientError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statusはステータスエラーのみコードを返す() {
        let unauthorized = ApiClientError::Status {
            status: 401,
            body:   "expired".to_string(),
        };

        assert_eq!(unauthorized.status(), Some(401));
        assert_eq!(ApiClientError::Network("refused".to_string()).status(), None);
    }

    #[test]
    fn test_表示文字列にステータスとボディを含む() {
        let err = ApiClientError::Status {
            status: 503,
            body:   "maintenance".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("503"), "ステータスが含まれること: {message}");
        assert!(message.contains("maintenance"), "ボディが含まれること: {message}");
    }
}
